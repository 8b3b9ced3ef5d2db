use crate::{
    ast::ast::{Function, Item, Prototype},
    errors::errors::CompileError,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, parser::Parser};

/// prototype := identifier '(' identifier* ')'
///
/// Parameter names carry no separators and must be distinct.
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, CompileError> {
    let name = parser
        .expect_error(
            TokenKind::Identifier,
            Some(CompileError::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected function name in prototype"),
            }),
        )?
        .value;

    parser.expect_error(
        TokenKind::OpenParen,
        Some(CompileError::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected '(' in prototype"),
        }),
    )?;

    let mut params = vec![];

    while parser.current_token_kind() == TokenKind::Identifier {
        let param = parser.advance().value.clone();

        if params.contains(&param) {
            return Err(CompileError::DuplicateParameter { name: param });
        }

        params.push(param);
    }

    parser.expect_error(
        TokenKind::CloseParen,
        Some(CompileError::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected ')' in prototype"),
        }),
    )?;

    Ok(Prototype::new(name, params))
}

/// definition := 'def' prototype expression
pub fn parse_definition(parser: &mut Parser) -> Result<Function, CompileError> {
    parser.advance();
    let proto = parse_prototype(parser)?;
    let body = parse_expression(parser)?;

    Ok(Function { proto, body })
}

/// external := 'extern' prototype
pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, CompileError> {
    parser.advance();
    parse_prototype(parser)
}

/// A bare expression is wrapped in an anonymous zero-parameter prototype so
/// it lowers through the same path as a named definition.
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<Function, CompileError> {
    let body = parse_expression(parser)?;

    Ok(Function {
        proto: Prototype::anonymous(),
        body,
    })
}

/// Parses one top-level unit, skipping stray `;` tokens. Returns `None` once
/// the token stream is exhausted.
pub fn parse_item(parser: &mut Parser) -> Result<Option<Item>, CompileError> {
    loop {
        match parser.current_token_kind() {
            TokenKind::EOF => return Ok(None),
            TokenKind::Semicolon => {
                parser.advance();
            }
            TokenKind::Def => return Ok(Some(Item::Definition(parse_definition(parser)?))),
            TokenKind::Extern => return Ok(Some(Item::Extern(parse_extern(parser)?))),
            _ => return Ok(Some(Item::Expression(parse_top_level_expr(parser)?))),
        }
    }
}
