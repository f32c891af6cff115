//! # Token Input
//!
//! The parser consumes typed tokens from a pull-style [`TokenSource`].
//! Turning characters into tokens is the job of the caller's tokenizer;
//! this module only defines the contract and two in-memory sources:
//!
//! - [`TokenStream`]: an owned list of tokens with their positions
//! - [`IterTokenSource`]: adapts any iterator of `(Token, position)` pairs
//!
//! Positions are opaque to the parser. They are attached to parse errors
//! and handed to the output listener, never interpreted.

mod stream;
mod token;

pub use stream::{IterTokenSource, TokenStream};
pub use token::{TextPosition, Token};

use crate::error::BoxError;

/// A pull-style source of tokens.
///
/// The parser calls [`next_token`](Self::next_token) exactly once per
/// consumed token and never looks further ahead. After each successful
/// call, [`position`](Self::position) must describe the token just taken.
pub trait TokenSource {
    /// Opaque position marker attached to the most recently taken token
    type Position: Clone + std::fmt::Debug;

    /// Take the next token, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input can not be read.
    fn next_token(&mut self) -> Result<Option<Token>, BoxError>;

    /// Position of the most recently taken token, or the start position
    /// before any token has been taken.
    fn position(&self) -> Self::Position;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    type Position = S::Position;

    fn next_token(&mut self) -> Result<Option<Token>, BoxError> {
        (**self).next_token()
    }

    fn position(&self) -> Self::Position {
        (**self).position()
    }
}
