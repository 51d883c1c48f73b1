//! Lexical analysis for prefix expressions.
//!
//! Converts the raw expression text into a stream of tokens for parsing:
//!
//! - Whitespace skipping
//! - Parentheses, numeric literals and operators
//! - Rejection of identifiers outside the operator vocabulary
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
