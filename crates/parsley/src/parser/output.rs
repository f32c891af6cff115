//! Turns committed parse chains into listener events.
//!
//! The emitter tracks which tree frames are open by the level of the rule
//! that opened them. Before a node is emitted, every frame at the node's
//! level or deeper is closed: such a frame belongs to a sibling or to a
//! descendant of a sibling, and is complete.

use crate::error::SyntaxTreeError;
use crate::grammar::compiled::CompiledGrammar;
use crate::parser::tree::{Decision, ParseChain, ParseNode};
use crate::syntax::OutputListener;
use smallvec::SmallVec;
use std::marker::PhantomData;

/// Level below every real node; never closed
const SENTINEL_LEVEL: usize = 0;

pub(crate) struct ParserOutput<'a, L, P> {
    grammar: &'a CompiledGrammar,
    listener: &'a mut L,
    levels: SmallVec<[usize; 16]>,
    _position: PhantomData<fn(&P)>,
}

impl<'a, L, P> ParserOutput<'a, L, P>
where
    L: OutputListener<P>,
{
    pub fn new(grammar: &'a CompiledGrammar, listener: &'a mut L) -> Self {
        let mut levels = SmallVec::new();
        levels.push(SENTINEL_LEVEL);
        Self {
            grammar,
            listener,
            levels,
            _position: PhantomData,
        }
    }

    /// Emit every decision of a committed chain, oldest first
    pub fn emit(&mut self, chain: &ParseChain<'_, P>) -> Result<(), SyntaxTreeError> {
        for node in chain.nodes() {
            self.emit_node(node)?;
        }
        Ok(())
    }

    /// Close every open frame
    pub fn finish(&mut self) -> Result<(), SyntaxTreeError> {
        self.close_from(SENTINEL_LEVEL + 1)
    }

    fn emit_node(&mut self, node: &ParseNode<'_, P>) -> Result<(), SyntaxTreeError> {
        self.close_from(node.level)?;

        match &node.decision {
            Decision::Token {
                matcher: Some(matcher),
                token,
            } => {
                let value = token.value().filter(|_| matcher.output_value);
                match (matcher.output_type, value) {
                    (true, Some(value)) => {
                        self.listener.enter(&node.position, token.kind())?;
                        self.listener.tap(&node.position, value)?;
                        self.listener.exit()?;
                    }
                    (true, None) => self.listener.tap(&node.position, token.kind())?,
                    (false, Some(value)) => self.listener.tap(&node.position, value)?,
                    (false, None) => {}
                }
            }
            Decision::Token { matcher: None, .. } => {}
            Decision::Rule {
                rule: Some(rule),
                output: true,
            } => {
                self.listener.enter(&node.position, self.grammar.name(*rule))?;
                self.levels.push(node.level);
            }
            Decision::Rule { .. } => {}
        }
        Ok(())
    }

    fn close_from(&mut self, level: usize) -> Result<(), SyntaxTreeError> {
        while self.levels.last().is_some_and(|&top| top != SENTINEL_LEVEL && top >= level) {
            self.levels.pop();
            self.listener.exit()?;
        }
        Ok(())
    }
}
