//! # Parsley
//!
//! A grammar-driven parsing engine that explores every derivation of a
//! token stream at once and streams the winning one as tree events.
//!
//! ## Overview
//!
//! - **Declarative grammars**: rules are ordered alternatives of rule and
//!   token items, built with [`GrammarBuilder`] or deserialized (with the
//!   `serialize` feature)
//! - **No recursive descent**: all alternatives are followed in parallel,
//!   one token at a time, and pruned by the token item's elevation
//! - **Streaming output**: as soon as the input is unambiguous, the
//!   corresponding part of the tree is delivered to an [`OutputListener`]
//! - **Ignored tokens**: whitespace and comments can be accepted between
//!   any two tokens without mentioning them in the grammar
//!
//! ## Quick Start
//!
//! ```rust
//! use parsley::{GrammarBuilder, Item, Parser, ParserConfig, Token, TokenItem, TokenStream};
//!
//! // assignment: ident "=" value
//! // value:      num | ident
//! let grammar = GrammarBuilder::new()
//!     .output_alternative("assignment", [
//!         Item::from(TokenItem::of_type("ident").output_value()),
//!         Item::token("eq"),
//!         Item::output_rule("value"),
//!     ])
//!     .alternative("value", [Item::from(TokenItem::of_type("num").output_type().output_value())])
//!     .alternative("value", [Item::from(TokenItem::of_type("ident").output_value())])
//!     .build();
//!
//! let parser = Parser::with_config(&grammar, ParserConfig::new().ignore("ws"))?;
//!
//! let tokens = TokenStream::from_tokens(vec![
//!     Token::with_value("ident", "x"),
//!     Token::new("ws"),
//!     Token::new("eq"),
//!     Token::new("ws"),
//!     Token::with_value("num", "42"),
//! ]);
//! let tree = parser.parse_tree(tokens, "assignment")?;
//!
//! assert_eq!(tree.to_string(), "assignment\n    x\n    value\n        num\n            42\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`grammar`]: grammar model and builder
//! - [`lexer`]: tokens and token sources
//! - [`parser`]: the parser and its configuration
//! - [`syntax`]: output listeners and the syntax tree
//! - [`error`]: error types
//!
//! ## Feature Flags
//!
//! - `diagnostics`: [`miette`](https://docs.rs/miette) integration for
//!   grammar and syntax tree errors
//! - `serialize`: serde support for grammars and tokens
//!
//! ## Logging
//!
//! Parsley reports through [`tracing`](https://docs.rs/tracing): grammar
//! compilation and parse failures at `debug`, every parse step at `trace`.
//! No subscriber is installed by the library.

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod syntax;

pub use error::{BoxError, GrammarError, ParseError, SyntaxTreeError};
pub use grammar::{Alternative, Grammar, GrammarBuilder, Item, RuleItem, TokenItem};
pub use lexer::{IterTokenSource, TextPosition, Token, TokenSource, TokenStream};
pub use parser::{Parser, ParserConfig};
pub use syntax::{NoopListener, OutputListener, SyntaxTreeBuilder, SyntaxTreeNode};
