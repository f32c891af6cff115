//! Left recursion detection
//!
//! A rule is left recursive when it can reach itself through leading items
//! that all match the empty input. Such a rule would make lookahead
//! expansion loop forever, so grammars containing one are rejected before
//! any parse starts.

use crate::error::GrammarError;
use crate::grammar::compiled::{CompiledAlternative, CompiledGrammar, CompiledItem, RuleId};
use hashbrown::HashSet;

/// Check every rule of `grammar` for left recursion.
///
/// # Errors
///
/// Returns [`GrammarError::LeftRecursion`] naming the rule chain of the
/// first cycle found.
pub(crate) fn detect_left_recursion(grammar: &CompiledGrammar) -> Result<(), GrammarError> {
    let mut detector = LeftRecursionDetector {
        grammar,
        open: HashSet::with_hasher(ahash::RandomState::new()),
        chain: Vec::new(),
    };

    for rule in grammar.rule_ids() {
        detector.chain.push(rule);
        detector.is_nullable(rule)?;
        detector.chain.pop();
    }

    Ok(())
}

struct LeftRecursionDetector<'g> {
    grammar: &'g CompiledGrammar,
    /// Alternatives currently being scanned on the ancestry chain
    open: HashSet<(RuleId, usize), ahash::RandomState>,
    /// Rules entered through leading items, root first
    chain: Vec<RuleId>,
}

impl LeftRecursionDetector<'_> {
    /// Scan every alternative of `rule`, returning whether any of them can
    /// match the empty input. The rule must be the last entry of the chain.
    fn is_nullable(&mut self, rule: RuleId) -> Result<bool, GrammarError> {
        let mut nullable = false;
        for (index, alternative) in self.grammar.alternatives(rule).iter().enumerate() {
            // Keep scanning after a nullable alternative: cycles may hide in later ones
            if self.is_alternative_nullable(rule, index, alternative)? {
                nullable = true;
            }
        }
        Ok(nullable)
    }

    fn is_alternative_nullable(
        &mut self,
        rule: RuleId,
        index: usize,
        alternative: &CompiledAlternative,
    ) -> Result<bool, GrammarError> {
        if !self.open.insert((rule, index)) {
            return Err(self.cycle_error(rule));
        }
        let result = self.scan_leading_items(alternative);
        self.open.remove(&(rule, index));
        result
    }

    fn scan_leading_items(&mut self, alternative: &CompiledAlternative) -> Result<bool, GrammarError> {
        for item in alternative.items() {
            let CompiledItem::Rule(reference) = item else {
                return Ok(false);
            };
            self.chain.push(reference.id);
            let nullable = self.is_nullable(reference.id);
            self.chain.pop();
            if !nullable? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Build the error for a cycle closing at `rule`, reported from the
    /// nearest earlier occurrence of `rule` on the chain.
    fn cycle_error(&self, rule: RuleId) -> GrammarError {
        let last = self.chain.len().saturating_sub(1);
        let start = self.chain[..last]
            .iter()
            .rposition(|&id| id == rule)
            .unwrap_or(0);
        let chain = self.chain[start..]
            .iter()
            .map(|&id| self.grammar.name(id).into())
            .collect();
        GrammarError::left_recursion(chain)
    }
}
