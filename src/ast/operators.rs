//! The operator vocabulary, partitioned by arity class.

use std::fmt::Display;

use crate::lexer::tokens::OPERATOR_LOOKUP;

/// How many operands an operator's syntax requires.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ArityClass {
    /// Exactly one operand.
    Unary,
    /// Exactly two operands.
    Binary,
    /// Two or more operands.
    Variadic,
}

impl ArityClass {
    pub fn min_operands(&self) -> usize {
        match self {
            ArityClass::Unary => 1,
            ArityClass::Binary | ArityClass::Variadic => 2,
        }
    }

    /// `None` when the class accepts any number of operands above the minimum.
    pub fn max_operands(&self) -> Option<usize> {
        match self {
            ArityClass::Unary => Some(1),
            ArityClass::Binary => Some(2),
            ArityClass::Variadic => None,
        }
    }

    pub fn accepts(&self, operand_count: usize) -> bool {
        operand_count >= self.min_operands()
            && self.max_operands().map_or(true, |max| operand_count <= max)
    }
}

impl Display for ArityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArityClass::Unary => write!(f, "exactly 1 operand"),
            ArityClass::Binary => write!(f, "exactly 2 operands"),
            ArityClass::Variadic => write!(f, "2 or more operands"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum UnaryOperator {
    Abs,
    Sqrt,
    Ceil,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    Mod,
    Expt,
    Subtract,
    Divide,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum VariadicOperator {
    Min,
    Max,
    Add,
    Multiply,
}

impl UnaryOperator {
    pub fn lexeme(&self) -> &'static str {
        match self {
            UnaryOperator::Abs => "abs",
            UnaryOperator::Sqrt => "sqrt",
            UnaryOperator::Ceil => "ceil",
        }
    }
}

impl BinaryOperator {
    pub fn lexeme(&self) -> &'static str {
        match self {
            BinaryOperator::Mod => "mod",
            BinaryOperator::Expt => "expt",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Divide => "/",
        }
    }
}

impl VariadicOperator {
    pub fn lexeme(&self) -> &'static str {
        match self {
            VariadicOperator::Min => "min",
            VariadicOperator::Max => "max",
            VariadicOperator::Add => "+",
            VariadicOperator::Multiply => "*",
        }
    }
}

/// Any operator in the vocabulary. Each belongs to exactly one arity class.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
    Variadic(VariadicOperator),
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::Unary(UnaryOperator::Abs),
        Operator::Unary(UnaryOperator::Sqrt),
        Operator::Unary(UnaryOperator::Ceil),
        Operator::Binary(BinaryOperator::Mod),
        Operator::Binary(BinaryOperator::Expt),
        Operator::Binary(BinaryOperator::Subtract),
        Operator::Binary(BinaryOperator::Divide),
        Operator::Variadic(VariadicOperator::Min),
        Operator::Variadic(VariadicOperator::Max),
        Operator::Variadic(VariadicOperator::Add),
        Operator::Variadic(VariadicOperator::Multiply),
    ];

    pub fn from_lexeme(lexeme: &str) -> Option<Operator> {
        OPERATOR_LOOKUP.get(lexeme).copied()
    }

    pub fn lexeme(&self) -> &'static str {
        match self {
            Operator::Unary(operator) => operator.lexeme(),
            Operator::Binary(operator) => operator.lexeme(),
            Operator::Variadic(operator) => operator.lexeme(),
        }
    }

    pub fn arity_class(&self) -> ArityClass {
        match self {
            Operator::Unary(_) => ArityClass::Unary,
            Operator::Binary(_) => ArityClass::Binary,
            Operator::Variadic(_) => ArityClass::Variadic,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}
