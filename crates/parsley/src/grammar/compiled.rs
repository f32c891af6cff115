//! Compiled grammar table
//!
//! Rule names are interned once; every rule reference is resolved to the
//! interned key so the parser never looks names up while parsing.

use crate::error::GrammarError;
use crate::grammar::{Grammar, Item, TokenItem};
use crate::lexer::Token;
use compact_str::CompactString;
use hashbrown::HashSet;
use lasso::{Key, Rodeo, RodeoReader, Spur};

/// Set of token types that may appear anywhere between meaningful tokens.
pub(crate) type IgnoredTypes = HashSet<CompactString, ahash::RandomState>;

/// Index of a rule in the compiled table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RuleId(Spur);

impl RuleId {
    fn index(self) -> usize {
        self.0.into_usize()
    }
}

/// A resolved rule reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RuleRef {
    pub id: RuleId,
    /// Force a tree frame even if the matched alternative is transparent
    pub output: bool,
}

/// A token item ready for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenMatcher {
    elevation: u32,
    token_type: Option<CompactString>,
    token_value: Option<CompactString>,
    pub output_type: bool,
    pub output_value: bool,
}

impl TokenMatcher {
    fn new(item: &TokenItem) -> Self {
        Self {
            elevation: item.elevation(),
            token_type: item.token_type().map(CompactString::from),
            token_value: item.token_value().map(CompactString::from),
            output_type: item.is_output_type(),
            output_value: item.is_output_value(),
        }
    }

    /// Match strength for `token`: `elevation + 1` on a match, 0 otherwise.
    ///
    /// An untyped matcher accepts every non-ignored token and disregards
    /// its value constraint.
    pub fn strength(&self, token: &Token, ignored: &IgnoredTypes) -> u64 {
        let matches = match self.token_type.as_deref() {
            None => !ignored.contains(token.kind()),
            Some(kind) => {
                kind == token.kind()
                    && self
                        .token_value
                        .as_deref()
                        .is_none_or(|value| token.value() == Some(value))
            }
        };
        if matches {
            u64::from(self.elevation) + 1
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CompiledItem {
    Rule(RuleRef),
    Token(TokenMatcher),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledAlternative {
    pub output: bool,
    items: Box<[CompiledItem]>,
}

impl CompiledAlternative {
    /// Items in grammar order. Iterate with `.rev()` to build a lookahead
    /// stack, which is pushed last item first.
    pub fn items(&self) -> &[CompiledItem] {
        &self.items
    }
}

/// Rule table indexed by [`RuleId`], immutable once built.
#[derive(Debug)]
pub(crate) struct CompiledGrammar {
    names: RodeoReader,
    rules: Vec<Vec<CompiledAlternative>>,
}

impl CompiledGrammar {
    /// Compile `grammar`, resolving every rule reference.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::UnknownRule`] if an item references a rule
    /// that has no alternative.
    pub fn compile(grammar: &Grammar) -> Result<Self, GrammarError> {
        let mut names = Rodeo::default();
        let mut rules: Vec<Vec<CompiledAlternative>> = Vec::new();

        // Register every rule first so forward references resolve
        for alternative in grammar.alternatives() {
            let key = names.get_or_intern(alternative.rule());
            if key.into_usize() == rules.len() {
                rules.push(Vec::new());
            }
        }

        let resolve = |name: &str| {
            names
                .get(name)
                .map(RuleId)
                .ok_or_else(|| GrammarError::UnknownRule(name.into()))
        };

        for alternative in grammar.alternatives() {
            let items = alternative
                .items()
                .iter()
                .map(|item| -> Result<CompiledItem, GrammarError> {
                    match item {
                        Item::Rule(rule) => Ok(CompiledItem::Rule(RuleRef {
                            id: resolve(rule.rule())?,
                            output: rule.is_output(),
                        })),
                        Item::Token(token) => Ok(CompiledItem::Token(TokenMatcher::new(token))),
                    }
                })
                .collect::<Result<Box<[_]>, GrammarError>>()?;

            let owner = resolve(alternative.rule())?;
            rules[owner.index()].push(CompiledAlternative {
                output: alternative.is_output(),
                items,
            });
        }

        Ok(Self {
            names: names.into_reader(),
            rules,
        })
    }

    pub fn rule_id(&self, name: &str) -> Option<RuleId> {
        self.names.get(name).map(RuleId)
    }

    pub fn name(&self, id: RuleId) -> &str {
        self.names.resolve(&id.0)
    }

    pub fn alternatives(&self, id: RuleId) -> &[CompiledAlternative] {
        &self.rules[id.index()]
    }

    /// Rule ids in order of first declaration
    pub fn rule_ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.names.iter().map(|(key, _)| RuleId(key))
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn alternative_count(&self) -> usize {
        self.rules.iter().map(Vec::len).sum()
    }
}
