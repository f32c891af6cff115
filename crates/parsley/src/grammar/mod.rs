//! # Grammar Module
//!
//! Declarative grammar model and its compiled form.
//!
//! ## Overview
//!
//! A [`Grammar`] is an ordered list of [`Alternative`]s. Each alternative
//! belongs to a rule (by name), has an `output` flag, and holds a sequence
//! of [`Item`]s:
//!
//! - [`RuleItem`]: a reference to another rule
//! - [`TokenItem`]: a terminal match on token type and/or value
//!
//! Alternatives of the same rule may appear anywhere in the list; their
//! order only determines exploration order. An alternative with no items
//! matches the empty input.
//!
//! Grammars are plain data. Rule references are resolved, and left
//! recursion rejected, when a [`Parser`](crate::Parser) is built from them.
//!
//! ## Usage
//!
//! ```rust
//! use parsley::grammar::{GrammarBuilder, Item, TokenItem};
//!
//! // list: item (comma item)*
//! let grammar = GrammarBuilder::new()
//!     .output_alternative("list", [Item::rule("item"), Item::rule("tail")])
//!     .alternative("tail", [])
//!     .alternative("tail", [Item::token("comma"), Item::rule("item"), Item::rule("tail")])
//!     .output_alternative("item", [Item::from(TokenItem::of_type("word").output_value())])
//!     .build();
//!
//! assert_eq!(grammar.alternatives().len(), 4);
//! ```

mod builder;
pub(crate) mod compiled;
pub(crate) mod validate;

pub use builder::GrammarBuilder;

use compact_str::CompactString;

/// An ordered collection of alternatives describing one or more rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct Grammar {
    alternatives: Vec<Alternative>,
}

impl Grammar {
    #[must_use]
    pub const fn new(alternatives: Vec<Alternative>) -> Self {
        Self { alternatives }
    }

    #[must_use]
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Iterate the distinct rule names in order of first appearance
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        let mut seen = hashbrown::HashSet::with_hasher(ahash::RandomState::new());
        self.alternatives
            .iter()
            .map(Alternative::rule)
            .filter(move |name| seen.insert(*name))
    }
}

impl FromIterator<Alternative> for Grammar {
    fn from_iter<I: IntoIterator<Item = Alternative>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One alternative of a rule: an ordered sequence of items.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    rule: CompactString,
    #[cfg_attr(feature = "serialize", serde(default))]
    output: bool,
    #[cfg_attr(feature = "serialize", serde(default))]
    items: Vec<Item>,
}

impl Alternative {
    /// Create an alternative for `rule`.
    ///
    /// When `output` is set, every match of this alternative opens a tree
    /// frame named after the rule.
    #[must_use]
    pub fn new(
        rule: impl Into<CompactString>,
        output: bool,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        Self {
            rule: rule.into(),
            output,
            items: items.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[must_use]
    pub const fn is_output(&self) -> bool {
        self.output
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Check whether this alternative matches the empty input by itself
    #[must_use]
    pub fn is_epsilon(&self) -> bool {
        self.items.is_empty()
    }
}

/// A grammar item: either a rule reference or a token match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Item {
    Rule(RuleItem),
    Token(TokenItem),
}

impl Item {
    /// Reference to `rule` that does not force a tree frame
    #[must_use]
    pub fn rule(rule: impl Into<CompactString>) -> Self {
        Self::Rule(RuleItem::new(rule, false))
    }

    /// Reference to `rule` that always produces a tree frame
    #[must_use]
    pub fn output_rule(rule: impl Into<CompactString>) -> Self {
        Self::Rule(RuleItem::new(rule, true))
    }

    /// Match any token of type `token_type`, producing no output
    #[must_use]
    pub fn token(token_type: impl Into<CompactString>) -> Self {
        Self::Token(TokenItem::of_type(token_type))
    }

    /// Match any token whose type is not ignored, producing no output
    #[must_use]
    pub fn any_token() -> Self {
        Self::Token(TokenItem::any())
    }
}

impl From<RuleItem> for Item {
    fn from(item: RuleItem) -> Self {
        Self::Rule(item)
    }
}

impl From<TokenItem> for Item {
    fn from(item: TokenItem) -> Self {
        Self::Token(item)
    }
}

/// A reference to another rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleItem {
    rule: CompactString,
    #[cfg_attr(feature = "serialize", serde(default))]
    output: bool,
}

impl RuleItem {
    #[must_use]
    pub fn new(rule: impl Into<CompactString>, output: bool) -> Self {
        Self {
            rule: rule.into(),
            output,
        }
    }

    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Whether a match through this reference always opens a tree frame,
    /// regardless of the matched alternative's own flag
    #[must_use]
    pub const fn is_output(&self) -> bool {
        self.output
    }
}

/// A terminal match on token type and value.
///
/// `token_type = None` matches any token whose type is not ignored. A
/// `token_value` only constrains typed items. `elevation` breaks ties:
/// when several token items match the same input token at the same step,
/// only those with the highest elevation survive.
///
/// # Example
///
/// ```rust
/// use parsley::grammar::TokenItem;
///
/// let keyword = TokenItem::of_type("ident")
///     .with_value("let")
///     .with_elevation(1)
///     .output_type();
///
/// assert_eq!(keyword.token_type(), Some("ident"));
/// assert_eq!(keyword.token_value(), Some("let"));
/// assert_eq!(keyword.elevation(), 1);
/// assert!(keyword.is_output_type());
/// assert!(!keyword.is_output_value());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct TokenItem {
    elevation: u32,
    token_type: Option<CompactString>,
    output_type: bool,
    token_value: Option<CompactString>,
    output_value: bool,
}

impl TokenItem {
    #[must_use]
    pub fn new(
        elevation: u32,
        token_type: Option<CompactString>,
        output_type: bool,
        token_value: Option<CompactString>,
        output_value: bool,
    ) -> Self {
        Self {
            elevation,
            token_type,
            output_type,
            token_value,
            output_value,
        }
    }

    /// Match tokens of the given type
    #[must_use]
    pub fn of_type(token_type: impl Into<CompactString>) -> Self {
        Self {
            token_type: Some(token_type.into()),
            ..Self::default()
        }
    }

    /// Match any token whose type is not ignored
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Additionally require the token value to equal `value`
    #[must_use]
    pub fn with_value(mut self, value: impl Into<CompactString>) -> Self {
        self.token_value = Some(value.into());
        self
    }

    #[must_use]
    pub const fn with_elevation(mut self, elevation: u32) -> Self {
        self.elevation = elevation;
        self
    }

    /// Report the matched token's type in the output
    #[must_use]
    pub const fn output_type(mut self) -> Self {
        self.output_type = true;
        self
    }

    /// Report the matched token's value in the output
    #[must_use]
    pub const fn output_value(mut self) -> Self {
        self.output_value = true;
        self
    }

    #[must_use]
    pub const fn elevation(&self) -> u32 {
        self.elevation
    }

    #[must_use]
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    #[must_use]
    pub fn token_value(&self) -> Option<&str> {
        self.token_value.as_deref()
    }

    #[must_use]
    pub const fn is_output_type(&self) -> bool {
        self.output_type
    }

    #[must_use]
    pub const fn is_output_value(&self) -> bool {
        self.output_value
    }
}
