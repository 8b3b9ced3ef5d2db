//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. Expression parsing lives in
//! `expr` and uses precedence climbing over the parser's operator table;
//! prototypes, definitions, externs and top-level dispatch live in `item`.
//!
//! The parser consumes the token stream with one token of lookahead and
//! reports failures as `CompileError` values; a failure aborts the current
//! top-level unit only.

use crate::{
    errors::errors::CompileError,
    lexer::tokens::{Token, TokenKind},
};

use super::lookups::OperatorTable;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, the current position in it, and the
/// operator precedence table used for binary expressions.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Precedence table for binary operators
    operators: OperatorTable,
}

impl Parser {
    /// Creates a parser over `tokens` with the default operator table
    /// (`<`, `+`, `-`, `*`).
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_operators(tokens, OperatorTable::default())
    }

    /// Creates a parser with a caller-supplied operator table.
    pub fn with_operators(tokens: Vec<Token>, operators: OperatorTable) -> Self {
        Parser {
            tokens,
            pos: 0,
            operators,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Advances past the current token and returns it. The position never
    /// moves past the trailing EOF token.
    pub fn advance(&mut self) -> &Token {
        let pos = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[pos]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<CompileError>,
    ) -> Result<Token, CompileError> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(CompileError::UnexpectedToken {
                    token: token.value.clone(),
                }),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, CompileError> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the operator table.
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Precedence of the current token, or -1 when it is not a registered
    /// binary operator.
    pub fn peek_precedence(&self) -> i32 {
        self.current_token()
            .char()
            .and_then(|op| self.operators.lookup(op))
            .unwrap_or(-1)
    }
}
