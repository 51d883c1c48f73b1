use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{ast::operators::Operator, Span};

lazy_static! {
    /// The fixed operator vocabulary, keyed by exact (case-sensitive) spelling.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, Operator> = Operator::ALL
        .iter()
        .map(|operator| (operator.lexeme(), *operator))
        .collect();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Number,
    Identifier, // always a member of OPERATOR_LOOKUP
    EndOfInput,
}

impl TokenKind {
    /// The fixed source text of structural tokens.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Empty for parens and end of input.
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Identifier => {
                write!(f, "{} ({}) @ {}", self.kind, self.lexeme, self.span.start.0)
            }
            _ => write!(f, "{} () @ {}", self.kind, self.span.start.0),
        }
    }
}

impl Token {
    /// The text this token occupies in the source.
    pub fn source_text(&self) -> &str {
        self.kind.symbol().unwrap_or(self.lexeme.as_str())
    }

    /// Human readable description used in diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::LeftParen | TokenKind::RightParen => format!("`{}`", self.source_text()),
            TokenKind::Number => format!("number `{}`", self.lexeme),
            TokenKind::Identifier => format!("operator `{}`", self.lexeme),
            TokenKind::EndOfInput => String::from("end of input"),
        }
    }
}
