//! Canonical printing of expressions.
//!
//! Every operation is printed as `(op a b ...)` with single spaces, so the
//! output lexes and parses back to the same tree shape.

use std::fmt;

use super::ast::Expr;

fn print_expr(e: &Expr, out: &mut fmt::Formatter) -> fmt::Result {
    match e {
        Expr::NumberLiteral { value, .. } => write!(out, "{}", value),
        Expr::UnaryOp { operator, .. } => print_operation(operator.lexeme(), e, out),
        Expr::BinaryOp { operator, .. } => print_operation(operator.lexeme(), e, out),
        Expr::VariadicOp { operator, .. } => print_operation(operator.lexeme(), e, out),
    }
}

fn print_operation(lexeme: &str, e: &Expr, out: &mut fmt::Formatter) -> fmt::Result {
    write!(out, "({}", lexeme)?;
    for operand in e.operands() {
        write!(out, " ")?;
        print_expr(operand, out)?;
    }
    write!(out, ")")
}

impl fmt::Display for Expr {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        print_expr(self, out)
    }
}
