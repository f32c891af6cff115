#![no_main]
use libfuzzer_sys::fuzz_target;
use parsley::{GrammarBuilder, Item, Parser, ParserConfig, Token, TokenItem, TokenStream};

/// Token types indexed by the low bits of each input byte
const KINDS: [&str; 6] = ["num", "op", "lparen", "rparen", "ws", "other"];

fuzz_target!(|data: &[u8]| {
    let grammar = GrammarBuilder::new()
        .output_alternative("expr", [Item::rule("term"), Item::rule("tail")])
        .alternative("tail", [])
        .alternative(
            "tail",
            [
                Item::from(TokenItem::of_type("op").output_value()),
                Item::rule("term"),
                Item::rule("tail"),
            ],
        )
        .alternative("term", [Item::from(TokenItem::of_type("num").output_value())])
        .alternative("term", [Item::from(TokenItem::any().with_elevation(1).output_type())])
        .alternative(
            "term",
            [Item::token("lparen"), Item::output_rule("expr"), Item::token("rparen")],
        )
        .build();
    let Ok(parser) = Parser::with_config(&grammar, ParserConfig::new().ignore("ws")) else {
        return;
    };

    let tokens = data
        .iter()
        .map(|byte| Token::with_value(KINDS[usize::from(byte % 6)], byte.to_string()))
        .collect();

    // Errors are expected; panics and hangs are not
    let _ = parser.parse_tree(TokenStream::from_tokens(tokens), "expr");
});
