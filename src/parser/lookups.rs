use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.nud(TokenKind::Number, parse_number_expr);
    parser.nud(TokenKind::LeftParen, parse_operation_expr);
}

// Tokens that can start an expression
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
