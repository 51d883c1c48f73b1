//! Parser implementation for building the expression tree.
//!
//! This module contains the main Parser struct and the `parse` entry points.
//! The parser keeps a single cursor into the token stream and never
//! backtracks.

use std::{collections::HashMap, rc::Rc};

use log::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl, Expectation, ParseError},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, NUDHandler, NUDLookup},
};

/// Default for `ParserOptions::max_depth`.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Ignore anything after the first complete expression instead of
    /// failing with `TrailingTokens`.
    pub allow_trailing_tokens: bool,
    /// Deepest allowed nesting of parenthesized operations. Deeper input
    /// fails with `NestingTooDeep` rather than exhausting the stack.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            allow_trailing_tokens: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EndOfInput`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Rc<String>,
    options: ParserOptions,
    /// Number of operations currently open
    depth: usize,
    /// Lookup table for tokens that can start an expression
    nud_lookup: NUDLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EndOfInput` token is appended when `tokens` does not already end
    /// with one, so the cursor can never run off the end of the stream.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EndOfInput) {
            let offset = tokens.last().map_or(0, |token| token.span.end.0);
            let end = Position(offset, Rc::clone(&file));
            tokens.push(MK_TOKEN!(
                TokenKind::EndOfInput,
                String::new(),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            options: ParserOptions::default(),
            depth: 0,
            nud_lookup: HashMap::new(),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn get_options(&self) -> ParserOptions {
        self.options
    }

    pub fn get_file(&self) -> &Rc<String> {
        &self.file
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Index of the current token in the token stream.
    pub fn current_index(&self) -> usize {
        self.pos
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor stops on the trailing `EndOfInput`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Consumes a token of the given kind, or fails with `UnexpectedToken`.
    pub fn expect(
        &mut self,
        expected_kind: TokenKind,
        expected: Expectation,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(expected));
        }

        Ok(self.advance().clone())
    }

    /// Records entry into an operation opened by the token at `open_index`.
    pub fn enter_nesting(&mut self, open_index: usize) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            let open = &self.tokens[open_index.min(self.tokens.len() - 1)];
            return Err(Error::new(
                ErrorImpl::Parse(ParseError::NestingTooDeep {
                    max_depth: self.options.max_depth,
                    index: open_index,
                }),
                open.span.start.clone(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// An `UnexpectedToken` error for the current token.
    pub fn unexpected(&self, expected: Expectation) -> Error {
        self.error_at_current(ParseError::UnexpectedToken {
            expected,
            found: self.current_token().describe(),
            index: self.pos,
        })
    }

    pub fn error_at_current(&self, error: ParseError) -> Error {
        Error::new(ErrorImpl::Parse(error), self.get_position())
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation handler for a token that starts an expression.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a token stream into a single expression with the default options.
///
/// # Arguments
///
/// * `tokens` - Tokens produced by `tokenize`
/// * `file` - The name of the source the tokens came from
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    parse_with_options(tokens, file, ParserOptions::default())
}

pub fn parse_with_options(
    tokens: Vec<Token>,
    file: Rc<String>,
    options: ParserOptions,
) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens, file).with_options(options);
    create_token_lookups(&mut parser);

    let expr = parse_expr(&mut parser)?;

    if !parser.get_options().allow_trailing_tokens
        && parser.current_token_kind() != TokenKind::EndOfInput
    {
        return Err(parser.error_at_current(ParseError::TrailingTokens {
            found: parser.current_token().describe(),
            index: parser.current_index(),
        }));
    }

    debug!(
        "parsed {} tokens from {} into an expression of depth {}",
        parser.current_index(),
        parser.get_file(),
        expr.depth()
    );
    Ok(expr)
}
