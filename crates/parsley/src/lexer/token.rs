use compact_str::CompactString;
use std::fmt;

/// A typed token produced by a tokenizer.
///
/// Tokens carry a type identifier (`kind`) and an optional value payload.
/// Grammars match on the kind and, optionally, on the value.
///
/// # Example
///
/// ```rust
/// use parsley::lexer::Token;
///
/// let plus = Token::new("plus");
/// let number = Token::with_value("number", "42");
///
/// assert_eq!(plus.to_string(), "plus");
/// assert_eq!(number.to_string(), "number \"42\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    kind: CompactString,
    value: Option<CompactString>,
}

impl Token {
    /// Create a token without a value
    #[must_use]
    pub fn new(kind: impl Into<CompactString>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
        }
    }

    /// Create a token carrying a value
    #[must_use]
    pub fn with_value(kind: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        Self {
            kind: kind.into(),
            value: Some(value.into()),
        }
    }

    /// The token type identifier
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The token value, if the tokenizer attached one
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)?;
        if let Some(value) = &self.value {
            write!(f, " \"{value}\"")?;
        }
        Ok(())
    }
}

/// A line and column in a text source, both starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TextPosition {
    pub line: u32,
    pub column: u32,
}

impl TextPosition {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for TextPosition {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
