use regex::Regex;

use crate::{mk_default_handler, mk_token};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            pos: 0,
            tokens: vec![],
            source,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Patterns are tried in order at the current scan position; the first one
/// that matches wins. The trailing catch-all turns any leftover character
/// into a `Char` token, so scanning never fails.
fn lexer_patterns() -> Vec<RegexPattern> {
    vec![
        RegexPattern {
            regex: Regex::new(r"\s+").unwrap(),
            handler: skip_handler,
        },
        RegexPattern {
            regex: Regex::new(r"#.*").unwrap(),
            handler: skip_handler,
        },
        RegexPattern {
            regex: Regex::new("[a-zA-Z][a-zA-Z0-9]*").unwrap(),
            handler: symbol_handler,
        },
        RegexPattern {
            regex: Regex::new("[0-9.]+").unwrap(),
            handler: number_handler,
        },
        RegexPattern {
            regex: Regex::new(r"\(").unwrap(),
            handler: mk_default_handler!(TokenKind::OpenParen, "("),
        },
        RegexPattern {
            regex: Regex::new(r"\)").unwrap(),
            handler: mk_default_handler!(TokenKind::CloseParen, ")"),
        },
        RegexPattern {
            regex: Regex::new(",").unwrap(),
            handler: mk_default_handler!(TokenKind::Comma, ","),
        },
        RegexPattern {
            regex: Regex::new(";").unwrap(),
            handler: mk_default_handler!(TokenKind::Semicolon, ";"),
        },
        RegexPattern {
            regex: Regex::new("(?s).").unwrap(),
            handler: char_handler,
        },
    ]
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        lexer.push(mk_token!(*kind, matched.clone()));
    } else {
        lexer.push(mk_token!(TokenKind::Identifier, matched.clone()));
    }

    lexer.advance_n(matched.len());
}

// The numeric value is converted by the parser; the lexer only captures the
// maximal digits-and-dots run.
fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.push(mk_token!(TokenKind::Number, matched.clone()));
    lexer.advance_n(matched.len());
}

fn char_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.push(mk_token!(TokenKind::Char, matched.clone()));
    lexer.advance_n(matched.len());
}

/// Partitions `source` into the token sequence ending in an `EOF` token.
///
/// Scanning is total: unrecognized characters become `Char` tokens rather
/// than errors, leaving it to the parser to reject them.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source.to_string());
    let patterns = lexer_patterns();

    while !lex.at_eof() {
        for pattern in patterns.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, &pattern.regex);
                break;
            }
        }
    }

    lex.push(mk_token!(TokenKind::EOF, String::from("EOF")));
    lex.tokens
}
