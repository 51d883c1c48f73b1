use crate::Span;

use super::operators::{BinaryOperator, Operator, UnaryOperator, VariadicOperator};

/// A parsed prefix expression.
///
/// Each interior node owns its operand subtrees. Numeric literals are kept as
/// the source text they were scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    NumberLiteral {
        value: String,
        span: Span,
    },
    UnaryOp {
        operator: UnaryOperator,
        operand: Box<Expr>,
        span: Span,
    },
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    /// Always holds at least two operands.
    VariadicOp {
        operator: VariadicOperator,
        operands: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    /// Returns the span of the expression, parentheses included.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::NumberLiteral { span, .. }
            | Expr::UnaryOp { span, .. }
            | Expr::BinaryOp { span, .. }
            | Expr::VariadicOp { span, .. } => span,
        }
    }

    /// The operator applied at this node, `None` for literals.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expr::NumberLiteral { .. } => None,
            Expr::UnaryOp { operator, .. } => Some(Operator::Unary(*operator)),
            Expr::BinaryOp { operator, .. } => Some(Operator::Binary(*operator)),
            Expr::VariadicOp { operator, .. } => Some(Operator::Variadic(*operator)),
        }
    }

    /// Direct children in source order.
    pub fn operands(&self) -> Vec<&Expr> {
        match self {
            Expr::NumberLiteral { .. } => vec![],
            Expr::UnaryOp { operand, .. } => vec![operand.as_ref()],
            Expr::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expr::VariadicOp { operands, .. } => operands.iter().collect(),
        }
    }

    /// Nesting depth; a literal has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .operands()
            .into_iter()
            .map(Expr::depth)
            .max()
            .unwrap_or(0)
    }
}
