//! # Error Types
//!
//! Errors raised while compiling grammars, parsing token streams and
//! building syntax trees.
//!
//! ## Overview
//!
//! - [`GrammarError`]: the grammar can not be compiled (unknown rule
//!   references, left recursion). Raised once, by
//!   [`Parser::new`](crate::Parser::new).
//! - [`ParseError`]: a single parse call failed. Carries the opaque input
//!   position reported by the [`TokenSource`](crate::lexer::TokenSource).
//! - [`SyntaxTreeError`]: an output listener was driven out of protocol.
//!
//! None of these are recovered internally. Tree events delivered to a
//! listener before a [`ParseError`] stay delivered.
//!
//! ## Diagnostics Support
//!
//! When the `diagnostics` feature is enabled, [`GrammarError`] and
//! [`SyntaxTreeError`] integrate with [`miette`].

use crate::lexer::Token;
use compact_str::CompactString;
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// Boxed error type produced by token sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The grammar handed to [`Parser::new`](crate::Parser::new) is not usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum GrammarError {
    #[error("unknown grammar rule \"{0}\"")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(grammar::unknown_rule)))]
    UnknownRule(CompactString),

    #[error("left recursion detected at {}", format_chain(.chain))]
    #[cfg_attr(
        feature = "diagnostics",
        diagnostic(
            code(grammar::left_recursion),
            help("make the recursive reference follow a token that always consumes input")
        )
    )]
    LeftRecursion {
        /// Rule names closing the cycle, first and last being the same rule
        chain: Vec<CompactString>,
    },
}

impl GrammarError {
    /// Create a left recursion error from the rule chain that closes the cycle
    #[must_use]
    pub const fn left_recursion(chain: Vec<CompactString>) -> Self {
        Self::LeftRecursion { chain }
    }
}

fn format_chain(chain: &[CompactString]) -> String {
    chain
        .iter()
        .map(CompactString::as_str)
        .collect::<Vec<_>>()
        .join(" > ")
}

/// A parse call failed.
///
/// `P` is the position type of the token source that was being parsed.
#[derive(Debug, Error)]
pub enum ParseError<P> {
    #[error("unknown grammar rule \"{name}\"")]
    UnknownRule { name: CompactString },

    #[error("unexpected `{token}` at {position:?}")]
    UnexpectedToken { token: Token, position: P },

    #[error("unexpected end of the input at {position:?}")]
    UnexpectedEof { position: P },

    #[error("ambiguous parsing path detected at {position:?}")]
    Ambiguous {
        position: P,
        /// Number of derivations that completed simultaneously
        paths: usize,
    },

    #[error("failed to read the next token at {position:?}")]
    TokenSource {
        position: P,
        #[source]
        source: BoxError,
    },

    #[error(transparent)]
    Output(#[from] SyntaxTreeError),
}

impl<P> ParseError<P> {
    /// Get the input position where this error was detected, if it has one
    #[must_use]
    pub const fn position(&self) -> Option<&P> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEof { position }
            | Self::Ambiguous { position, .. }
            | Self::TokenSource { position, .. } => Some(position),
            Self::UnknownRule { .. } | Self::Output(_) => None,
        }
    }

    /// Check whether the input ran out before the grammar was satisfied
    #[must_use]
    pub const fn is_unexpected_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }

    /// Check whether more than one derivation matched the whole input
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }
}

/// An output listener received events that do not form a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum SyntaxTreeError {
    #[error("failed to exit syntax tree top")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(syntax_tree::unmatched_exit)))]
    UnmatchedExit,

    #[error("syntax tree already has a root node")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(syntax_tree::multiple_roots)))]
    MultipleRoots,

    #[error("syntax tree has {open} unclosed node(s)")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(syntax_tree::unclosed)))]
    Unclosed { open: usize },

    #[error("syntax tree is empty")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(syntax_tree::empty)))]
    Empty,
}
