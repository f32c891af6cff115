//! Grammar serialization tests

#![cfg(feature = "serialize")]

use parsley::{Grammar, GrammarBuilder, Item, Parser, Token, TokenItem, TokenStream};

#[test]
fn test_grammar_json_round_trip() {
    let grammar = GrammarBuilder::new()
        .output_alternative("pair", [Item::rule("key"), Item::token("colon"), Item::rule("key")])
        .alternative(
            "key",
            [Item::from(TokenItem::of_type("str").with_elevation(2).output_value())],
        )
        .alternative("key", [Item::from(TokenItem::any().output_type())])
        .build();

    let json = serde_json::to_string(&grammar).unwrap();
    let restored: Grammar = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, grammar);
}

#[test]
fn test_grammar_from_handwritten_json() {
    let json = r#"[
        {"rule": "greeting", "output": true, "items": [
            {"kind": "token", "token_type": "word", "token_value": "hello"},
            {"kind": "rule", "rule": "name", "output": true}
        ]},
        {"rule": "name", "items": [
            {"kind": "token", "token_type": "word", "output_value": true}
        ]}
    ]"#;
    let grammar: Grammar = serde_json::from_str(json).unwrap();
    let parser = Parser::new(&grammar).unwrap();

    let tokens = TokenStream::from_tokens(vec![
        Token::with_value("word", "hello"),
        Token::with_value("word", "world"),
    ]);
    let tree = parser.parse_tree(tokens, "greeting").unwrap();
    assert_eq!(tree.to_string(), "greeting\n    name\n        world\n");
}

#[test]
fn test_token_serialization() {
    let token = Token::with_value("num", "42");
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, r#"{"kind":"num","value":"42"}"#);
    assert_eq!(serde_json::from_str::<Token>(&json).unwrap(), token);
}
