//! Unit tests for the expression tree, operators and printer.

use crate::{ast::ast::Expr, parse_source};

use super::operators::{ArityClass, BinaryOperator, Operator, UnaryOperator, VariadicOperator};

fn check_arity(expr: &Expr) {
    if let Some(operator) = expr.operator() {
        assert!(
            operator.arity_class().accepts(expr.operands().len()),
            "`{}` has {} operands",
            operator,
            expr.operands().len()
        );
    }

    for operand in expr.operands() {
        check_arity(operand);
    }
}

#[test]
fn test_operator_lookup() {
    assert_eq!(
        Operator::from_lexeme("ceil"),
        Some(Operator::Unary(UnaryOperator::Ceil))
    );
    assert_eq!(
        Operator::from_lexeme("/"),
        Some(Operator::Binary(BinaryOperator::Divide))
    );
    assert_eq!(
        Operator::from_lexeme("*"),
        Some(Operator::Variadic(VariadicOperator::Multiply))
    );
    assert_eq!(Operator::from_lexeme("floor"), None);
    assert_eq!(Operator::from_lexeme("Max"), None);
}

#[test]
fn test_every_operator_round_trips_through_its_lexeme() {
    for operator in Operator::ALL {
        assert_eq!(Operator::from_lexeme(operator.lexeme()), Some(operator));
    }
}

#[test]
fn test_arity_classes() {
    let unary: Vec<&str> = Operator::ALL
        .iter()
        .filter(|operator| operator.arity_class() == ArityClass::Unary)
        .map(|operator| operator.lexeme())
        .collect();
    let binary: Vec<&str> = Operator::ALL
        .iter()
        .filter(|operator| operator.arity_class() == ArityClass::Binary)
        .map(|operator| operator.lexeme())
        .collect();
    let variadic: Vec<&str> = Operator::ALL
        .iter()
        .filter(|operator| operator.arity_class() == ArityClass::Variadic)
        .map(|operator| operator.lexeme())
        .collect();

    assert_eq!(unary, vec!["abs", "sqrt", "ceil"]);
    assert_eq!(binary, vec!["mod", "expt", "-", "/"]);
    assert_eq!(variadic, vec!["min", "max", "+", "*"]);
}

#[test]
fn test_arity_bounds() {
    assert!(ArityClass::Unary.accepts(1));
    assert!(!ArityClass::Unary.accepts(2));
    assert!(!ArityClass::Binary.accepts(1));
    assert!(ArityClass::Binary.accepts(2));
    assert!(!ArityClass::Binary.accepts(3));
    assert!(!ArityClass::Variadic.accepts(1));
    assert!(ArityClass::Variadic.accepts(2));
    assert!(ArityClass::Variadic.accepts(17));
    assert_eq!(ArityClass::Variadic.max_operands(), None);
}

#[test]
fn test_printer_canonical_form() {
    let expr = parse_source("(  +  1\n\t(abs   (- 5 8))  2.5 )", None).unwrap();
    assert_eq!(expr.to_string(), "(+ 1 (abs (- 5 8)) 2.5)");
}

#[test]
fn test_printer_round_trip() {
    let sources = [
        "7",
        "(sqrt 16)",
        "(mod (expt 2 10) 7)",
        "(max 1 (min 4 5 6) (ceil 2.5) (/ 9 3))",
        "(* (+ 1 2 3 4) (- 10 (abs 3)))",
    ];

    for source in sources {
        let expr = parse_source(source, None).unwrap();
        assert_eq!(expr.to_string(), source);

        // Spans differ once whitespace is normalised, so compare printed shape
        let reparsed = parse_source(&expr.to_string(), None).unwrap();
        assert_eq!(reparsed.to_string(), expr.to_string());
        assert_eq!(reparsed.depth(), expr.depth());
    }
}

#[test]
fn test_operand_counts_match_arity() {
    let expr = parse_source(
        "(+ (abs 1) (mod 2 3) (min 4 5 6 7) (* (sqrt 8) (expt 9 10)))",
        None,
    )
    .unwrap();

    check_arity(&expr);
    assert_eq!(expr.operands().len(), 4);
}

#[test]
fn test_literal_has_no_operator() {
    let expr = parse_source("12.75", None).unwrap();

    assert_eq!(expr.operator(), None);
    assert!(expr.operands().is_empty());
    assert_eq!(expr.depth(), 1);
}
