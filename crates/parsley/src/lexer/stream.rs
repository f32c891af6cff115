//! In-memory token sources

use super::{Token, TokenSource};
use crate::error::BoxError;

/// Token source over an owned list of tokens.
///
/// # Example
///
/// ```rust
/// use parsley::lexer::{Token, TokenSource, TokenStream};
///
/// let mut stream = TokenStream::from_tokens(vec![Token::new("a"), Token::new("b")]);
/// assert_eq!(stream.position(), 0);
///
/// stream.next_token().unwrap();
/// stream.next_token().unwrap();
/// assert_eq!(stream.position(), 1);
/// assert!(stream.next_token().unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TokenStream<P> {
    tokens: std::vec::IntoIter<(Token, P)>,
    position: P,
}

impl<P: Clone> TokenStream<P> {
    /// Create a stream from tokens paired with their positions.
    ///
    /// `start` is reported as the position until the first token is taken.
    #[must_use]
    pub fn new(tokens: Vec<(Token, P)>, start: P) -> Self {
        Self {
            tokens: tokens.into_iter(),
            position: start,
        }
    }

    /// Number of tokens not yet taken
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenStream<usize> {
    /// Create a stream whose positions are the token indices
    #[must_use]
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let tokens = tokens.into_iter().enumerate().map(|(i, t)| (t, i)).collect();
        Self::new(tokens, 0)
    }
}

impl<P: Clone + std::fmt::Debug> TokenSource for TokenStream<P> {
    type Position = P;

    fn next_token(&mut self) -> Result<Option<Token>, BoxError> {
        Ok(self.tokens.next().map(|(token, position)| {
            self.position = position;
            token
        }))
    }

    fn position(&self) -> P {
        self.position.clone()
    }
}

/// Token source adapting an iterator of `(Token, position)` pairs.
///
/// Useful for streaming tokens out of a tokenizer without collecting them.
#[derive(Debug, Clone)]
pub struct IterTokenSource<I, P> {
    iter: I,
    position: P,
}

impl<I, P> IterTokenSource<I, P>
where
    I: Iterator<Item = (Token, P)>,
{
    /// `start` is reported as the position until the first token is taken
    pub fn new(iter: impl IntoIterator<IntoIter = I>, start: P) -> Self {
        Self {
            iter: iter.into_iter(),
            position: start,
        }
    }
}

impl<I, P> TokenSource for IterTokenSource<I, P>
where
    I: Iterator<Item = (Token, P)>,
    P: Clone + std::fmt::Debug,
{
    type Position = P;

    fn next_token(&mut self) -> Result<Option<Token>, BoxError> {
        Ok(self.iter.next().map(|(token, position)| {
            self.position = position;
            token
        }))
    }

    fn position(&self) -> P {
        self.position.clone()
    }
}
