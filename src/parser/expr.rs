use crate::{ast::ast::Expr, errors::errors::CompileError, lexer::tokens::TokenKind};

use super::parser::Parser;

/// expression := primary (binop primary)*
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, CompileError> {
    let lhs = parse_primary(parser)?;
    parse_binop_rhs(parser, 0, lhs)
}

/// primary := number | identifier call-suffix? | '(' expression ')'
pub fn parse_primary(parser: &mut Parser) -> Result<Expr, CompileError> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse::<f64>();

            match result {
                Ok(value) => {
                    parser.advance();
                    Ok(Expr::Number(value))
                }
                Err(_) => Err(CompileError::NumberParse {
                    token: parser.current_token().value.clone(),
                }),
            }
        }
        TokenKind::Identifier => parse_identifier_expr(parser),
        TokenKind::OpenParen => parse_paren_expr(parser),
        _ => Err(CompileError::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected an expression"),
        }),
    }
}

/// Precedence-climbing loop: consumes `(binop primary)*` pairs that bind at
/// least as tightly as `min_prec`. A strictly tighter following operator is
/// absorbed into the right-hand side first; equal precedence binds left.
pub fn parse_binop_rhs(
    parser: &mut Parser,
    min_prec: i32,
    mut lhs: Expr,
) -> Result<Expr, CompileError> {
    loop {
        let op = match parser.current_token().char() {
            Some(op) => op,
            None => return Ok(lhs),
        };
        let tok_prec = match parser.operators().lookup(op) {
            Some(prec) => prec,
            None => return Ok(lhs),
        };
        if tok_prec < min_prec {
            return Ok(lhs);
        }

        parser.advance();
        let mut rhs = parse_primary(parser)?;

        if tok_prec < parser.peek_precedence() {
            rhs = parse_binop_rhs(parser, tok_prec + 1, rhs)?;
        }

        lhs = Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        };
    }
}

fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, CompileError> {
    let name = parser.advance().value.clone();

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Expr::Variable(name));
    }

    parser.advance();

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expression(parser)?);

            if parser.current_token_kind() == TokenKind::CloseParen {
                break;
            }

            parser.expect_error(
                TokenKind::Comma,
                Some(CompileError::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected ')' or ',' in argument list"),
                }),
            )?;
        }
    }

    parser.advance();

    Ok(Expr::Call { callee: name, args })
}

fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, CompileError> {
    parser.advance();
    let expr = parse_expression(parser)?;
    parser.expect_error(
        TokenKind::CloseParen,
        Some(CompileError::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected ')'"),
        }),
    )?;

    Ok(expr)
}
