//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::operators::{BinaryOperator, Operator};
use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Expectation, LexError, ParseError};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::Lex(LexError::UnexpectedCharacter { character: '@' }),
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_position().0, 10);
    assert!(error.parse_error().is_none());
}

#[test]
fn test_error_names() {
    let cases = [
        (
            ErrorImpl::Lex(LexError::UnknownIdentifier {
                identifier: "foo".to_string(),
            }),
            "UnknownIdentifier",
        ),
        (
            ErrorImpl::Parse(ParseError::ExpectedOperator {
                found: "number `1`".to_string(),
                index: 1,
            }),
            "ExpectedOperator",
        ),
        (
            ErrorImpl::Parse(ParseError::UnexpectedToken {
                expected: Expectation::Expression,
                found: "`)`".to_string(),
                index: 3,
            }),
            "UnexpectedToken",
        ),
        (
            ErrorImpl::Parse(ParseError::TrailingTokens {
                found: "number `3`".to_string(),
                index: 5,
            }),
            "TrailingTokens",
        ),
        (
            ErrorImpl::Parse(ParseError::NestingTooDeep {
                max_depth: 128,
                index: 256,
            }),
            "NestingTooDeep",
        ),
        (
            ErrorImpl::Lex(LexError::SourceTooLarge { length: usize::MAX }),
            "SourceTooLarge",
        ),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, at(0)).get_error_name(), name);
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::Lex(LexError::UnknownIdentifier {
            identifier: "foo".to_string(),
        }),
        at(1),
    );

    assert_eq!(error.to_string(), "unknown identifier \"foo\" at test:1");
}

#[test]
fn test_expectation_display() {
    let error = ParseError::UnexpectedToken {
        expected: Expectation::ClosingParen {
            operator: Operator::Binary(BinaryOperator::Mod),
        },
        found: "number `3`".to_string(),
        index: 4,
    };

    assert_eq!(
        error.to_string(),
        "expected `)` closing `mod`, found number `3`"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::Lex(LexError::UnexpectedCharacter { character: '@' }),
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_lists_operators() {
    let error = Error::new(
        ErrorImpl::Lex(LexError::UnknownIdentifier {
            identifier: "floor".to_string(),
        }),
        at(0),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unknown operator `floor`, expected one of: abs, sqrt, ceil, mod, expt, -, /, min, max, +, *"
    );
}

#[test]
fn test_error_tip_reports_arity() {
    let error = Error::new(
        ErrorImpl::Parse(ParseError::UnexpectedToken {
            expected: Expectation::ClosingParen {
                operator: Operator::Binary(BinaryOperator::Expt),
            },
            found: "number `3`".to_string(),
            index: 4,
        }),
        at(0),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected number `3`, `expt` takes exactly 2 operands"
    );
}

#[test]
fn test_error_tip_for_stray_dot() {
    let error = Error::new(
        ErrorImpl::Lex(LexError::UnexpectedCharacter { character: '.' }),
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_for_deep_nesting() {
    let error = Error::new(
        ErrorImpl::Parse(ParseError::NestingTooDeep {
            max_depth: 4,
            index: 8,
        }),
        at(20),
    );

    assert_eq!(
        error.to_string(),
        "operations nested deeper than 4 levels at test:20"
    );
    assert_eq!(
        error.get_tip().to_string(),
        "Operations may be nested at most 4 levels deep"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
