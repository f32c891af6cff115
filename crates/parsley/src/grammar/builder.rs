use crate::grammar::{Alternative, Grammar, Item};
use compact_str::CompactString;

/// Fluent builder for [`Grammar`]s.
///
/// Alternatives are kept in the order they are added.
///
/// # Example
///
/// ```rust
/// use parsley::grammar::{GrammarBuilder, Item};
///
/// let grammar = GrammarBuilder::new()
///     .output_alternative("pair", [Item::token("key"), Item::token("colon"), Item::rule("value")])
///     .alternative("value", [Item::token("string")])
///     .alternative("value", [Item::token("number")])
///     .build();
///
/// let names: Vec<_> = grammar.rule_names().collect();
/// assert_eq!(names, ["pair", "value"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    alternatives: Vec<Alternative>,
}

impl GrammarBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            alternatives: Vec::new(),
        }
    }

    /// Add an alternative that is transparent in the output
    #[must_use]
    pub fn alternative(
        self,
        rule: impl Into<CompactString>,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        self.push(Alternative::new(rule, false, items))
    }

    /// Add an alternative that opens a tree frame named after its rule
    #[must_use]
    pub fn output_alternative(
        self,
        rule: impl Into<CompactString>,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        self.push(Alternative::new(rule, true, items))
    }

    /// Add a prebuilt alternative
    #[must_use]
    pub fn push(mut self, alternative: Alternative) -> Self {
        self.alternatives.push(alternative);
        self
    }

    #[must_use]
    pub fn build(self) -> Grammar {
        Grammar::new(self.alternatives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::TokenItem;

    #[test]
    fn test_builder_keeps_insertion_order() {
        let grammar = GrammarBuilder::new()
            .alternative("a", [Item::token("x")])
            .output_alternative("b", [])
            .push(Alternative::new("a", true, [Item::rule("b")]))
            .build();

        let alternatives = grammar.alternatives();
        assert_eq!(alternatives.len(), 3);
        assert_eq!(alternatives[0].rule(), "a");
        assert!(!alternatives[0].is_output());
        assert_eq!(alternatives[1].rule(), "b");
        assert!(alternatives[1].is_output());
        assert!(alternatives[1].is_epsilon());
        assert_eq!(alternatives[2].items(), [Item::rule("b")]);
    }

    #[test]
    fn test_builder_empty_grammar() {
        let grammar = GrammarBuilder::default().build();
        assert!(grammar.alternatives().is_empty());
        assert_eq!(grammar.rule_names().count(), 0);
    }

    #[test]
    fn test_builder_token_items() {
        let grammar = GrammarBuilder::new()
            .alternative(
                "kw",
                [Item::from(TokenItem::of_type("ident").with_value("if").output_type())],
            )
            .build();

        let Item::Token(item) = &grammar.alternatives()[0].items()[0] else {
            panic!("expected a token item");
        };
        assert_eq!(item.token_type(), Some("ident"));
        assert_eq!(item.token_value(), Some("if"));
        assert!(item.is_output_type());
    }
}
