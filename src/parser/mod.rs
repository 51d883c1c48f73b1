//! Parser module for building the expression tree.
//!
//! This module contains the recursive-descent parser that transforms a stream
//! of tokens into an `Expr`. It handles:
//!
//! - Numeric literals
//! - Parenthesized operations, dispatched on the operator's arity class
//! - Rejection of tokens left over after the expression
//!
//! Each decision is made on a single token of lookahead. Tokens that can start
//! an expression are registered as NUD (null denotation) handlers.

pub mod expr;
pub mod lookups;
pub mod parser;
