//! Basic arithmetic expression parser example
//!
//! This example demonstrates how to:
//! 1. Turn text into tokens with line/column positions
//! 2. Build a grammar for arithmetic expressions with operator precedence
//! 3. Ignore whitespace without mentioning it in the grammar
//! 4. Parse input and handle errors

use parsley::{
    GrammarBuilder, Item, IterTokenSource, Parser, ParserConfig, TextPosition, Token, TokenItem,
};

/// Split `text` into number, operator, parenthesis and whitespace tokens
fn tokenize(text: &str) -> Vec<(Token, TextPosition)> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut position = TextPosition::default();

    while let Some((start, c)) = chars.next() {
        let token_position = position;
        let mut end = start + c.len_utf8();
        let kind = match c {
            '0'..='9' => {
                while let Some(&(i, d)) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    end = i + d.len_utf8();
                    chars.next();
                }
                "number"
            }
            '+' | '-' => "additive",
            '*' | '/' => "multiplicative",
            '(' => "lparen",
            ')' => "rparen",
            c if c.is_whitespace() => "whitespace",
            _ => "unknown",
        };

        let lexeme = &text[start..end];
        for ch in lexeme.chars() {
            if ch == '\n' {
                position = TextPosition::new(position.line + 1, 1);
            } else {
                position.column += 1;
            }
        }
        tokens.push((Token::with_value(kind, lexeme), token_position));
    }

    tokens
}

fn build_parser() -> Result<Parser, parsley::GrammarError> {
    // expr:        term expr_tail           (output)
    // expr_tail:   | additive term expr_tail
    // term:        factor term_tail         (output)
    // term_tail:   | multiplicative factor term_tail
    // factor:      number | lparen expr rparen
    let grammar = GrammarBuilder::new()
        .output_alternative("expr", [Item::rule("term"), Item::rule("expr_tail")])
        .alternative("expr_tail", [])
        .alternative(
            "expr_tail",
            [
                Item::from(TokenItem::of_type("additive").output_value()),
                Item::rule("term"),
                Item::rule("expr_tail"),
            ],
        )
        .output_alternative("term", [Item::rule("factor"), Item::rule("term_tail")])
        .alternative("term_tail", [])
        .alternative(
            "term_tail",
            [
                Item::from(TokenItem::of_type("multiplicative").output_value()),
                Item::rule("factor"),
                Item::rule("term_tail"),
            ],
        )
        .alternative("factor", [Item::from(TokenItem::of_type("number").output_value())])
        .alternative(
            "factor",
            [Item::token("lparen"), Item::rule("expr"), Item::token("rparen")],
        )
        .build();

    Parser::with_config(&grammar, ParserConfig::new().ignore("whitespace"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let parser = build_parser()?;

    let inputs = ["1 + 2 * 3", "(1 + 2) * 3", "4 *\n  (5 - 6", "7 ^ 8"];
    for input in inputs {
        println!("Parsing: {input:?}");
        let source = IterTokenSource::new(tokenize(input), TextPosition::default());
        match parser.parse_tree(source, "expr") {
            Ok(tree) => print!("{tree:#}"),
            Err(error) => println!("  error: {error}"),
        }
        println!();
    }

    Ok(())
}
