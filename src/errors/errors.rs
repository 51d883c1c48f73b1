use std::fmt::Display;

use thiserror::Error;

use crate::{ast::operators::Operator, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn lex_error(&self) -> Option<&LexError> {
        match &self.internal_error {
            ErrorImpl::Lex(error) => Some(error),
            ErrorImpl::Parse(_) => None,
        }
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        match &self.internal_error {
            ErrorImpl::Parse(error) => Some(error),
            ErrorImpl::Lex(_) => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Lex(LexError::UnexpectedCharacter { .. }) => "UnexpectedCharacter",
            ErrorImpl::Lex(LexError::UnknownIdentifier { .. }) => "UnknownIdentifier",
            ErrorImpl::Lex(LexError::SourceTooLarge { .. }) => "SourceTooLarge",
            ErrorImpl::Parse(ParseError::ExpectedOperator { .. }) => "ExpectedOperator",
            ErrorImpl::Parse(ParseError::UnexpectedToken { .. }) => "UnexpectedToken",
            ErrorImpl::Parse(ParseError::TrailingTokens { .. }) => "TrailingTokens",
            ErrorImpl::Parse(ParseError::NestingTooDeep { .. }) => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Lex(LexError::UnexpectedCharacter { character: '.' }) => {
                ErrorTip::Suggestion(String::from(
                    "Numbers must start with a digit, e.g. `0.5`",
                ))
            }
            ErrorImpl::Lex(LexError::UnexpectedCharacter { .. }) => ErrorTip::None,
            ErrorImpl::Lex(LexError::UnknownIdentifier { identifier }) => {
                let known = Operator::ALL
                    .iter()
                    .map(|operator| operator.lexeme())
                    .collect::<Vec<_>>()
                    .join(", ");
                ErrorTip::Suggestion(format!(
                    "Unknown operator `{}`, expected one of: {}",
                    identifier, known
                ))
            }
            ErrorImpl::Lex(LexError::SourceTooLarge { length }) => ErrorTip::Suggestion(format!(
                "Source is {} bytes, the limit is {} bytes",
                length,
                u32::MAX
            )),
            ErrorImpl::Parse(ParseError::ExpectedOperator { found, .. }) => {
                ErrorTip::Suggestion(format!(
                    "`(` must be followed by an operator, found {}",
                    found
                ))
            }
            ErrorImpl::Parse(ParseError::UnexpectedToken {
                expected: Expectation::Expression,
                found,
                ..
            }) => ErrorTip::Suggestion(format!(
                "Unexpected {}, expected a number or `(`, is an operand missing?",
                found
            )),
            ErrorImpl::Parse(ParseError::UnexpectedToken {
                expected: Expectation::ClosingParen { operator },
                found,
                ..
            }) => ErrorTip::Suggestion(format!(
                "Unexpected {}, `{}` takes {}",
                found,
                operator,
                operator.arity_class()
            )),
            ErrorImpl::Parse(ParseError::TrailingTokens { found, .. }) => {
                ErrorTip::Suggestion(format!(
                    "Only one expression is allowed, found {} after it",
                    found
                ))
            }
            ErrorImpl::Parse(ParseError::NestingTooDeep { max_depth, .. }) => {
                ErrorTip::Suggestion(format!(
                    "Operations may be nested at most {} levels deep",
                    max_depth
                ))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("unknown identifier {identifier:?}")]
    UnknownIdentifier { identifier: String },
    #[error("source of {length} bytes is too large")]
    SourceTooLarge { length: usize },
}

/// Parser failures. `index` is the offending token's index in the token stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected an operator after `(`, found {found}")]
    ExpectedOperator { found: String, index: usize },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: Expectation,
        found: String,
        index: usize,
    },
    #[error("unexpected {found} after a complete expression")]
    TrailingTokens { found: String, index: usize },
    #[error("operations nested deeper than {max_depth} levels")]
    NestingTooDeep { max_depth: usize, index: usize },
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Expression,
    ClosingParen { operator: Operator },
}

impl Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expectation::Expression => write!(f, "an expression"),
            Expectation::ClosingParen { operator } => write!(f, "`)` closing `{}`", operator),
        }
    }
}
