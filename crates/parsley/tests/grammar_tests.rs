//! Tests for grammar building and validation

use parsley::grammar::{Alternative, Grammar, GrammarBuilder, Item, RuleItem, TokenItem};
use parsley::{GrammarError, Parser};

fn chain(error: GrammarError) -> Vec<String> {
    match error {
        GrammarError::LeftRecursion { chain } => chain.iter().map(ToString::to_string).collect(),
        other => panic!("expected left recursion, got {other:?}"),
    }
}

#[test]
fn test_grammar_builder_simple() {
    let grammar = GrammarBuilder::new()
        .output_alternative("expr", [Item::rule("term"), Item::rule("rest")])
        .alternative("rest", [])
        .alternative("rest", [Item::token("plus"), Item::rule("term"), Item::rule("rest")])
        .alternative("term", [Item::from(TokenItem::of_type("num").output_value())])
        .build();

    assert_eq!(grammar.alternatives().len(), 4);
    assert!(grammar.alternatives()[0].is_output());
    assert!(grammar.alternatives()[1].is_epsilon());
    let names: Vec<_> = grammar.rule_names().collect();
    assert_eq!(names, ["expr", "rest", "term"]);
    assert!(Parser::new(&grammar).is_ok());
}

#[test]
fn test_grammar_from_alternatives() {
    let grammar: Grammar = [
        Alternative::new("s", true, [Item::Rule(RuleItem::new("t", true))]),
        Alternative::new("t", false, [Item::any_token()]),
    ]
    .into_iter()
    .collect();

    let built = GrammarBuilder::new()
        .push(Alternative::new("s", true, [Item::output_rule("t")]))
        .alternative("t", [Item::from(TokenItem::any())])
        .build();
    assert_eq!(grammar, built);
}

#[test]
fn test_empty_grammar_compiles() {
    let parser = Parser::new(&Grammar::default()).unwrap();
    assert!(!parser.has_rule("anything"));
}

#[test]
fn test_unknown_rule_reference() {
    let grammar = GrammarBuilder::new()
        .alternative("s", [Item::token("a"), Item::rule("missing")])
        .build();

    let error = Parser::new(&grammar).unwrap_err();
    assert_eq!(error, GrammarError::UnknownRule("missing".into()));
    assert_eq!(error.to_string(), "unknown grammar rule \"missing\"");
}

#[test]
fn test_direct_left_recursion() {
    let grammar = GrammarBuilder::new()
        .alternative("expr", [Item::rule("expr"), Item::token("plus"), Item::token("num")])
        .alternative("expr", [Item::token("num")])
        .build();

    assert_eq!(chain(Parser::new(&grammar).unwrap_err()), ["expr", "expr"]);
}

#[test]
fn test_indirect_left_recursion() {
    let grammar = GrammarBuilder::new()
        .alternative("a", [Item::rule("b"), Item::token("x")])
        .alternative("b", [Item::rule("c")])
        .alternative("c", [Item::token("y")])
        .alternative("c", [Item::rule("a")])
        .build();

    let error = Parser::new(&grammar).unwrap_err();
    assert_eq!(error.to_string(), "left recursion detected at a > b > c > a");
}

#[test]
fn test_left_recursion_behind_empty_rule() {
    let grammar = GrammarBuilder::new()
        .alternative("s", [Item::rule("opt"), Item::rule("s"), Item::token("x")])
        .alternative("s", [Item::token("x")])
        .alternative("opt", [])
        .alternative("opt", [Item::token("o")])
        .build();

    assert_eq!(chain(Parser::new(&grammar).unwrap_err()), ["s", "s"]);
}

#[test]
fn test_right_recursion_is_accepted() {
    let grammar = GrammarBuilder::new()
        .alternative("list", [])
        .alternative("list", [Item::token("x"), Item::rule("list")])
        .build();

    assert!(Parser::new(&grammar).is_ok());
}

#[test]
fn test_left_recursion_in_unused_rule() {
    let grammar = GrammarBuilder::new()
        .alternative("main", [Item::token("x")])
        .alternative("unused", [Item::rule("unused")])
        .build();

    assert_eq!(chain(Parser::new(&grammar).unwrap_err()), ["unused", "unused"]);
}
