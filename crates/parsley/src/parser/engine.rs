//! Frontier parsing engine
//!
//! The engine keeps every derivation still consistent with the input as a
//! path: a lookahead stack of obligations plus the chain of decisions taken
//! since the last commit. For each token it
//!
//! 1. explodes every path until a token obligation is on top,
//! 2. matches the token against each top obligation,
//! 3. keeps only the paths that matched with the highest strength,
//! 4. commits when a single path survives, or defers otherwise.
//!
//! A committed path has its decisions emitted immediately and continues
//! with an empty chain, so output is streamed as soon as the input is
//! unambiguous.

use crate::error::ParseError;
use crate::grammar::compiled::{CompiledGrammar, CompiledItem, IgnoredTypes, RuleId, RuleRef};
use crate::lexer::{Token, TokenSource};
use crate::parser::lookahead::{Lookahead, Obligation};
use crate::parser::output::ParserOutput;
use crate::parser::tree::{Decision, ParseChain};
use crate::syntax::OutputListener;

/// Level of the root rule obligation
const ROOT_LEVEL: usize = 1;

/// One candidate derivation
struct Path<'g, P> {
    chain: ParseChain<'g, P>,
    lookahead: Lookahead<'g>,
}

impl<'g, P> Path<'g, P> {
    fn start(lookahead: Lookahead<'g>) -> Self {
        Self {
            chain: ParseChain::default(),
            lookahead,
        }
    }
}

/// Per-call parsing state over a borrowed grammar.
pub(crate) struct Engine<'g> {
    grammar: &'g CompiledGrammar,
    ignored: &'g IgnoredTypes,
}

impl<'g> Engine<'g> {
    pub const fn new(grammar: &'g CompiledGrammar, ignored: &'g IgnoredTypes) -> Self {
        Self { grammar, ignored }
    }

    /// Parse everything `source` yields as one `root`, driving `listener`.
    pub fn run<S, L>(
        &self,
        root: RuleId,
        mut source: S,
        listener: &mut L,
    ) -> Result<(), ParseError<S::Position>>
    where
        S: TokenSource,
        L: OutputListener<S::Position>,
    {
        let mut output = ParserOutput::new(self.grammar, listener);
        let mut frontier = vec![Path::start(self.initial_lookahead(root))];
        let mut consumed = 0usize;

        loop {
            let token = match source.next_token() {
                Ok(Some(token)) => token,
                Ok(None) => break,
                Err(error) => {
                    let position = source.position();
                    tracing::debug!(?position, %error, "token source failed");
                    return Err(ParseError::TokenSource {
                        position,
                        source: error,
                    });
                }
            };
            let position = source.position();
            consumed += 1;

            let mut survivors = self.advance(frontier, &token, &position);
            tracing::trace!(
                token = %token,
                ?position,
                survivors = survivors.len(),
                "token matched"
            );

            frontier = match survivors.len() {
                0 => {
                    tracing::debug!(token = %token, ?position, "unexpected token");
                    return Err(ParseError::UnexpectedToken { token, position });
                }
                1 => {
                    let Path { chain, lookahead } = survivors.swap_remove(0);
                    tracing::trace!("single path left, committing");
                    output.emit(&chain)?;
                    vec![Path::start(lookahead)]
                }
                paths => {
                    tracing::trace!(paths, "several paths left, deferring");
                    survivors
                }
            };
        }

        let position = source.position();
        let mut tails = self
            .explode_all(frontier, &position)
            .into_iter()
            .filter(|path| path.lookahead.is_empty());

        let Some(tail) = tails.next() else {
            tracing::debug!(?position, consumed, "input ended before the grammar was satisfied");
            return Err(ParseError::UnexpectedEof { position });
        };
        let remaining = tails.count();
        if remaining > 0 {
            tracing::debug!(?position, paths = remaining + 1, "ambiguous end of input");
            return Err(ParseError::Ambiguous {
                position,
                paths: remaining + 1,
            });
        }

        output.emit(&tail.chain)?;
        output.finish()?;
        tracing::trace!(consumed, "parse finished");
        Ok(())
    }

    fn skips_ignored(&self) -> bool {
        !self.ignored.is_empty()
    }

    /// The root obligation, over a trailing skip when ignored types exist
    fn initial_lookahead(&self, root: RuleId) -> Lookahead<'g> {
        let mut lookahead = Lookahead::empty();
        if self.skips_ignored() {
            lookahead = lookahead.push(Obligation::Skip, ROOT_LEVEL + 1);
        }
        lookahead.push(
            Obligation::Rule(RuleRef {
                id: root,
                output: true,
            }),
            ROOT_LEVEL,
        )
    }

    /// Explode, match `token` and keep the strongest matches
    fn advance<P: Clone>(
        &self,
        frontier: Vec<Path<'g, P>>,
        token: &Token,
        position: &P,
    ) -> Vec<Path<'g, P>> {
        let mut best = 0;
        let mut survivors = Vec::new();

        for path in self.explode_all(frontier, position) {
            // Fully reduced paths can not take another token
            let Some((obligation, level, rest)) = path.lookahead.pop() else {
                continue;
            };
            let (strength, matcher) = match obligation {
                Obligation::Token(matcher) => (matcher.strength(token, self.ignored), Some(matcher)),
                Obligation::Ignored => (u64::from(self.ignored.contains(token.kind())), None),
                Obligation::Rule(_) | Obligation::Skip => continue,
            };
            if strength == 0 || strength < best {
                continue;
            }
            if strength > best {
                best = strength;
                survivors.clear();
            }
            survivors.push(Path {
                chain: path.chain.push(
                    level,
                    position.clone(),
                    Decision::Token {
                        matcher,
                        token: token.clone(),
                    },
                ),
                lookahead: rest.clone(),
            });
        }

        survivors
    }

    fn explode_all<P: Clone>(
        &self,
        frontier: Vec<Path<'g, P>>,
        position: &P,
    ) -> Vec<Path<'g, P>> {
        let mut reduced = Vec::with_capacity(frontier.len());
        for path in frontier {
            self.explode(path, position, &mut reduced);
        }
        reduced
    }

    /// Expand rule and skip obligations on top of `path` until every
    /// resulting path has a token obligation on top or nothing left.
    fn explode<P: Clone>(&self, path: Path<'g, P>, position: &P, reduced: &mut Vec<Path<'g, P>>) {
        let mut pending = vec![path];

        while let Some(path) = pending.pop() {
            let Some((obligation, level, rest)) = path.lookahead.pop() else {
                reduced.push(path);
                continue;
            };

            match obligation {
                Obligation::Rule(reference) => {
                    // Pushed in reverse so the first alternative is expanded first
                    for alternative in self.grammar.alternatives(reference.id).iter().rev() {
                        pending.push(Path {
                            chain: path.chain.push(
                                level,
                                position.clone(),
                                Decision::Rule {
                                    rule: Some(reference.id),
                                    output: alternative.output || reference.output,
                                },
                            ),
                            lookahead: self.push_items(rest, alternative.items(), level + 1),
                        });
                    }
                }
                Obligation::Skip => {
                    let chain = path.chain.push(
                        level,
                        position.clone(),
                        Decision::Rule {
                            rule: None,
                            output: false,
                        },
                    );
                    pending.push(Path {
                        chain: chain.clone(),
                        lookahead: rest
                            .push(Obligation::Skip, level + 1)
                            .push(Obligation::Ignored, level + 1),
                    });
                    pending.push(Path {
                        chain,
                        lookahead: rest.clone(),
                    });
                }
                Obligation::Token(_) | Obligation::Ignored => reduced.push(path),
            }
        }
    }

    /// Push `items` onto `rest` so the first item ends up on top. Every
    /// token obligation gets a skip obligation above it.
    fn push_items(
        &self,
        rest: &Lookahead<'g>,
        items: &'g [CompiledItem],
        level: usize,
    ) -> Lookahead<'g> {
        items.iter().rev().fold(rest.clone(), |lookahead, item| match item {
            CompiledItem::Rule(reference) => lookahead.push(Obligation::Rule(*reference), level),
            CompiledItem::Token(matcher) => {
                let lookahead = lookahead.push(Obligation::Token(matcher), level);
                if self.skips_ignored() {
                    lookahead.push(Obligation::Skip, level)
                } else {
                    lookahead
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{GrammarBuilder, Item, TokenItem};
    use crate::lexer::TokenStream;
    use crate::syntax::NoopListener;
    use compact_str::CompactString;

    fn compile(builder: GrammarBuilder) -> CompiledGrammar {
        CompiledGrammar::compile(&builder.build()).unwrap()
    }

    fn ignored(types: &[&str]) -> IgnoredTypes {
        types.iter().map(|t| CompactString::from(*t)).collect()
    }

    #[test]
    fn test_explode_stops_at_tokens() {
        let grammar = compile(
            GrammarBuilder::new()
                .alternative("s", [Item::rule("a"), Item::token("z")])
                .alternative("a", [Item::token("x")])
                .alternative("a", [Item::token("y")])
                .alternative("a", []),
        );
        let none = ignored(&[]);
        let engine = Engine::new(&grammar, &none);

        let root = grammar.rule_id("s").unwrap();
        let reduced = engine.explode_all(vec![Path::start(engine.initial_lookahead(root))], &0usize);
        assert_eq!(reduced.len(), 3);
        assert!(reduced.iter().all(|path| matches!(
            path.lookahead.pop(),
            Some((Obligation::Token(_), _, _))
        )));
        // root, rule `a` alternative
        assert!(reduced.iter().all(|path| path.chain.nodes().len() == 2));
    }

    #[test]
    fn test_skip_adds_ignored_alternative() {
        let grammar = compile(GrammarBuilder::new().alternative("s", [Item::token("x")]));
        let ws = ignored(&["ws"]);
        let engine = Engine::new(&grammar, &ws);

        let root = grammar.rule_id("s").unwrap();
        let reduced = engine.explode_all(vec![Path::start(engine.initial_lookahead(root))], &0usize);
        let tops: Vec<_> = reduced
            .iter()
            .filter_map(|path| path.lookahead.pop().map(|(top, _, _)| top))
            .collect();
        assert_eq!(tops.len(), 2);
        assert!(matches!(tops[0], Obligation::Token(_)));
        assert!(matches!(tops[1], Obligation::Ignored));
    }

    #[test]
    fn test_advance_prunes_to_strongest() {
        let grammar = compile(
            GrammarBuilder::new()
                .alternative("s", [Item::token("x")])
                .alternative("s", [Item::from(TokenItem::any().with_elevation(1))]),
        );
        let none = ignored(&[]);
        let engine = Engine::new(&grammar, &none);

        let root = grammar.rule_id("s").unwrap();
        let frontier = vec![Path::start(engine.initial_lookahead(root))];
        let survivors = engine.advance(frontier, &Token::new("x"), &0usize);
        assert_eq!(survivors.len(), 1);
        let nodes = survivors[0].chain.nodes();
        assert!(matches!(
            nodes[1].decision,
            Decision::Token { matcher: Some(matcher), .. } if matcher.strength(&Token::new("q"), &none) == 2
        ));
    }

    #[test]
    fn test_run_reports_eof_at_last_position() {
        let grammar = compile(
            GrammarBuilder::new().alternative("s", [Item::token("a"), Item::token("b")]),
        );
        let none = ignored(&[]);
        let engine = Engine::new(&grammar, &none);
        let root = grammar.rule_id("s").unwrap();

        let source = TokenStream::from_tokens(vec![Token::new("a")]);
        let error = engine.run(root, source, &mut NoopListener).unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEof { position: 0 }));
    }
}
