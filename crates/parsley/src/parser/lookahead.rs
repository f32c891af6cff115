//! Lookahead stack
//!
//! The obligations still to be matched by a path, as a persistent stack.
//! Entries are shared via `Arc` between every path forked from a common
//! prefix, so exploding an alternative never copies the remainder.

use crate::grammar::compiled::{RuleRef, TokenMatcher};
use std::sync::Arc;

/// A pending unit of grammar structure.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Obligation<'g> {
    /// Match one of the rule's alternatives
    Rule(RuleRef),
    /// Match zero or more ignored tokens
    Skip,
    /// Match one token against an item
    Token(&'g TokenMatcher),
    /// Match one ignored token
    Ignored,
}

#[derive(Debug)]
struct Entry<'g> {
    obligation: Obligation<'g>,
    level: usize,
    rest: Lookahead<'g>,
}

/// Persistent stack of obligations. An empty stack means the path is fully
/// reduced.
#[derive(Debug, Clone, Default)]
pub(crate) struct Lookahead<'g> {
    top: Option<Arc<Entry<'g>>>,
}

impl<'g> Lookahead<'g> {
    pub const fn empty() -> Self {
        Self { top: None }
    }

    /// Push `obligation` at `level` (depth from the root), sharing `self`
    #[must_use]
    pub fn push(&self, obligation: Obligation<'g>, level: usize) -> Self {
        Self {
            top: Some(Arc::new(Entry {
                obligation,
                level,
                rest: self.clone(),
            })),
        }
    }

    /// The top obligation with its level, and the stack beneath it
    pub fn pop(&self) -> Option<(Obligation<'g>, usize, &Self)> {
        self.top
            .as_deref()
            .map(|entry| (entry.obligation, entry.level, &entry.rest))
    }

    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }
}

impl Drop for Lookahead<'_> {
    // Unlink uniquely owned entries iteratively so long stacks do not
    // overflow the call stack when dropped.
    fn drop(&mut self) {
        let mut next = self.top.take();
        while let Some(entry) = next {
            match Arc::try_unwrap(entry) {
                Ok(mut entry) => next = entry.rest.top.take(),
                Err(_) => break,
            }
        }
    }
}
