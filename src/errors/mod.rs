//! Error types for lexing and parsing.
//!
//! This module defines:
//!
//! - The crate-wide `Error` carrying a source position
//! - Lexer and parser error variants
//! - Error names and suggestions used for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
