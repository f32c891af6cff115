//! # Parser
//!
//! [`Parser`] compiles a [`Grammar`] once and then parses any number of
//! token sources against it.
//!
//! ## Algorithm
//!
//! Parsing explores every alternative that is still consistent with the
//! input, one token at a time. When several alternatives match a token, the
//! ones whose token item has the highest elevation win. As soon as a single
//! candidate remains, its part of the tree is emitted to the
//! [`OutputListener`] and exploration continues from there. Candidates that
//! are never narrowed down to one before the input ends are reported as
//! [`ParseError::Ambiguous`].
//!
//! Left-recursive grammars can not be explored this way and are rejected
//! when the parser is created.
//!
//! ## Ignored tokens
//!
//! Token types registered with [`ParserConfig::ignore`] may appear before
//! every consumed token and at the end of the input without being named in
//! the grammar. They never produce output and never satisfy a token item
//! without a type.

mod engine;
mod lookahead;
mod output;
mod tree;

use crate::error::{GrammarError, ParseError};
use crate::grammar::Grammar;
use crate::grammar::compiled::{CompiledGrammar, IgnoredTypes};
use crate::grammar::validate::detect_left_recursion;
use crate::lexer::TokenSource;
use crate::syntax::{NoopListener, OutputListener, SyntaxTreeBuilder, SyntaxTreeNode};
use compact_str::CompactString;
use engine::Engine;

/// Options applied when a [`Parser`] is created.
///
/// # Example
///
/// ```rust
/// use parsley::ParserConfig;
///
/// let config = ParserConfig::new().ignore("whitespace").ignore_all(["comment", "newline"]);
/// assert!(config.is_ignored("comment"));
/// assert!(!config.is_ignored("ident"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    ignored_token_types: IgnoredTypes,
}

impl ParserConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow tokens of `token_type` anywhere between consumed tokens
    #[must_use]
    pub fn ignore(mut self, token_type: impl Into<CompactString>) -> Self {
        self.ignored_token_types.insert(token_type.into());
        self
    }

    /// Allow tokens of every type in `token_types` anywhere between
    /// consumed tokens
    #[must_use]
    pub fn ignore_all<T>(mut self, token_types: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<CompactString>,
    {
        self.ignored_token_types
            .extend(token_types.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn is_ignored(&self, token_type: &str) -> bool {
        self.ignored_token_types.contains(token_type)
    }

    /// Ignored token types in no particular order
    pub fn ignored_token_types(&self) -> impl Iterator<Item = &str> {
        self.ignored_token_types.iter().map(CompactString::as_str)
    }
}

/// A grammar ready for parsing.
///
/// A `Parser` is immutable once created. [`parse`](Self::parse) only
/// borrows it, so one parser can serve several threads at the same time.
///
/// # Example
///
/// ```rust
/// use parsley::{GrammarBuilder, Item, Parser, Token, TokenItem, TokenStream};
///
/// let grammar = GrammarBuilder::new()
///     .output_alternative("sum", [
///         Item::from(TokenItem::of_type("num").output_value()),
///         Item::token("plus"),
///         Item::from(TokenItem::of_type("num").output_value()),
///     ])
///     .build();
/// let parser = Parser::new(&grammar)?;
///
/// let tokens = TokenStream::from_tokens(vec![
///     Token::with_value("num", "1"),
///     Token::new("plus"),
///     Token::with_value("num", "2"),
/// ]);
/// let tree = parser.parse_tree(tokens, "sum")?;
/// assert_eq!(tree.to_string(), "sum\n    1\n    2\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Parser {
    grammar: CompiledGrammar,
    ignored: IgnoredTypes,
}

impl Parser {
    /// Create a parser without ignored token types.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule reference can not be resolved or the
    /// grammar is left-recursive.
    pub fn new(grammar: &Grammar) -> Result<Self, GrammarError> {
        Self::with_config(grammar, ParserConfig::default())
    }

    /// Create a parser with `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule reference can not be resolved or the
    /// grammar is left-recursive.
    pub fn with_config(grammar: &Grammar, config: ParserConfig) -> Result<Self, GrammarError> {
        let compiled = CompiledGrammar::compile(grammar)?;
        detect_left_recursion(&compiled).inspect_err(|error| {
            tracing::debug!(%error, "grammar rejected");
        })?;

        tracing::debug!(
            rules = compiled.rule_count(),
            alternatives = compiled.alternative_count(),
            ignored = config.ignored_token_types.len(),
            "grammar compiled"
        );

        Ok(Self {
            grammar: compiled,
            ignored: config.ignored_token_types,
        })
    }

    /// Parse all tokens of `source` as a `root`, reporting the tree to
    /// `listener`.
    ///
    /// Events for the part of the input that has been parsed unambiguously
    /// are delivered before the rest of the input is read, and are not
    /// taken back if a later token fails.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not a rule of the grammar, the tokens
    /// do not form a single `root`, the source fails, or the listener
    /// rejects an event.
    #[tracing::instrument(level = "debug", skip_all, fields(root = root))]
    pub fn parse<S, L>(
        &self,
        source: S,
        root: &str,
        listener: &mut L,
    ) -> Result<(), ParseError<S::Position>>
    where
        S: TokenSource,
        L: OutputListener<S::Position>,
    {
        let Some(root_id) = self.grammar.rule_id(root) else {
            tracing::debug!("unknown root rule");
            return Err(ParseError::UnknownRule { name: root.into() });
        };
        Engine::new(&self.grammar, &self.ignored).run(root_id, source, listener)
    }

    /// Parse all tokens of `source` as a `root` and build its syntax tree.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn parse_tree<S>(
        &self,
        source: S,
        root: &str,
    ) -> Result<SyntaxTreeNode<S::Position>, ParseError<S::Position>>
    where
        S: TokenSource,
    {
        let mut builder = SyntaxTreeBuilder::new();
        self.parse(source, root, &mut builder)?;
        Ok(builder.finish()?)
    }

    /// Check that all tokens of `source` form a `root`, discarding output.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn validate<S>(&self, source: S, root: &str) -> Result<(), ParseError<S::Position>>
    where
        S: TokenSource,
    {
        self.parse(source, root, &mut NoopListener)
    }

    /// Check whether `name` is a rule of the grammar
    #[must_use]
    pub fn has_rule(&self, name: &str) -> bool {
        self.grammar.rule_id(name).is_some()
    }
}
