use log::trace;

use crate::{
    ast::{ast::Expr, operators::Operator},
    errors::errors::{Error, Expectation, ParseError},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::parser::Parser;

/// Parses one expression starting at the current token.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    trace!("parse_expr: current token = {:?}", parser.current_token());

    let handler = match parser.get_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => return Err(parser.unexpected(Expectation::Expression)),
    };

    handler(parser)
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Number, Expectation::Expression)?;

    Ok(Expr::NumberLiteral {
        value: token.lexeme,
        span: token.span,
    })
}

/// `( operator operand... )`, with the operand count fixed by the operator's arity class.
pub fn parse_operation_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open_index = parser.current_index();
    let open = parser.expect(TokenKind::LeftParen, Expectation::Expression)?;

    parser.enter_nesting(open_index)?;
    let expr = parse_operation_body(parser, open)?;
    parser.exit_nesting();

    Ok(expr)
}

fn parse_operation_body(parser: &mut Parser, open: Token) -> Result<Expr, Error> {
    let operator_token = parser.current_token();
    let operator = match operator_token.kind {
        TokenKind::Identifier => Operator::from_lexeme(&operator_token.lexeme),
        _ => None,
    };
    let Some(operator) = operator else {
        return Err(parser.error_at_current(ParseError::ExpectedOperator {
            found: operator_token.describe(),
            index: parser.current_index(),
        }));
    };
    parser.advance();

    trace!("parse_operation_expr: operator = {}", operator);
    let closing = Expectation::ClosingParen { operator };

    match operator {
        Operator::Unary(operator) => {
            let operand = parse_expr(parser)?;
            let close = parser.expect(TokenKind::RightParen, closing)?;

            Ok(Expr::UnaryOp {
                operator,
                operand: Box::new(operand),
                span: span_between(&open, &close),
            })
        }
        Operator::Binary(operator) => {
            let left = parse_expr(parser)?;
            let right = parse_expr(parser)?;
            let close = parser.expect(TokenKind::RightParen, closing)?;

            Ok(Expr::BinaryOp {
                operator,
                left: Box::new(left),
                right: Box::new(right),
                span: span_between(&open, &close),
            })
        }
        Operator::Variadic(operator) => {
            let mut operands = vec![parse_expr(parser)?, parse_expr(parser)?];

            while parser.current_token_kind() != TokenKind::RightParen {
                operands.push(parse_expr(parser)?);
            }
            let close = parser.expect(TokenKind::RightParen, closing)?;

            Ok(Expr::VariadicOp {
                operator,
                operands,
                span: span_between(&open, &close),
            })
        }
    }
}

fn span_between(open: &Token, close: &Token) -> Span {
    Span {
        start: open.span.start.clone(),
        end: close.span.end.clone(),
    }
}
