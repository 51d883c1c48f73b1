/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the parsed expression tree
///
/// Submodules:
/// - ast: The expression tree
/// - operators: The operator vocabulary and arity classes
/// - printer: Canonical printing of expressions
pub mod ast;
pub mod operators;
pub mod printer;

#[cfg(test)]
mod tests;
