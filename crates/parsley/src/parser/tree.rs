//! Parse-tree chains
//!
//! Each path records the decisions it has taken as a chain of nodes linked
//! to their parent (the previous decision). Forked paths share the common
//! part of their chain. A chain is only walked when its path commits.

use crate::grammar::compiled::{RuleId, TokenMatcher};
use crate::lexer::Token;
use std::sync::Arc;

#[derive(Debug)]
pub(crate) enum Decision<'g> {
    /// An alternative of a rule (or of the skip rule) was chosen
    Rule {
        /// `None` for the skip rule
        rule: Option<RuleId>,
        /// Alternative output flag or reference output flag
        output: bool,
    },
    /// A token was consumed
    Token {
        /// `None` when consumed as an ignored token
        matcher: Option<&'g TokenMatcher>,
        token: Token,
    },
}

#[derive(Debug)]
pub(crate) struct ParseNode<'g, P> {
    parent: ParseChain<'g, P>,
    pub level: usize,
    pub position: P,
    pub decision: Decision<'g>,
}

/// Handle to the most recent decision of a path; empty right after a commit.
#[derive(Debug)]
pub(crate) struct ParseChain<'g, P> {
    head: Option<Arc<ParseNode<'g, P>>>,
}

// Manual impls: cloning a chain must not require `P: Clone`.
impl<P> Clone for ParseChain<'_, P> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<P> Default for ParseChain<'_, P> {
    fn default() -> Self {
        Self { head: None }
    }
}

impl<'g, P> ParseChain<'g, P> {
    /// Append a decision to the chain, sharing `self` as its parent
    #[must_use]
    pub fn push(&self, level: usize, position: P, decision: Decision<'g>) -> Self {
        Self {
            head: Some(Arc::new(ParseNode {
                parent: self.clone(),
                level,
                position,
                decision,
            })),
        }
    }

    /// Nodes from the oldest decision to the newest
    pub fn nodes(&self) -> Vec<&ParseNode<'g, P>> {
        let mut nodes = Vec::new();
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            nodes.push(node);
            current = node.parent.head.as_deref();
        }
        nodes.reverse();
        nodes
    }
}

impl<P> Drop for ParseChain<'_, P> {
    // Unlink uniquely owned nodes iteratively; a long deferred chain would
    // otherwise be dropped recursively.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.head.take(),
                Err(_) => break,
            }
        }
    }
}
