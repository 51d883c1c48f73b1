use std::rc::Rc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    ast::operators::Operator,
    errors::errors::{Error, ErrorImpl, LexError},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Positions are stored as `u32`, which bounds the length of a source.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Receives the byte length of the match at the lexer's current position.
pub type RegexHandler = fn(&mut Lexer, usize) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored, so a match always starts at the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \\t\\r\\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")") },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: operator_handler },
        RegexPattern { regex: Regex::new("^[-+*/]").unwrap(), handler: operator_handler },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    // Offsets fit in a u32 because tokenize rejects sources over MAX_SOURCE_LEN.
    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes of input.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn lexeme(&self, len: usize) -> String {
        String::from(&self.remainder()[..len])
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Result<(), Error> {
    lexer.advance_n(len);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Result<(), Error> {
    let lexeme = lexer.lexeme(len);
    let span = lexer.span_of(len);

    lexer.push(MK_TOKEN!(TokenKind::Number, lexeme, span));
    lexer.advance_n(len);
    Ok(())
}

// Handles both word operators and the single-character arithmetic symbols.
fn operator_handler(lexer: &mut Lexer, len: usize) -> Result<(), Error> {
    let lexeme = lexer.lexeme(len);

    if Operator::from_lexeme(&lexeme).is_none() {
        return Err(Error::new(
            ErrorImpl::Lex(LexError::UnknownIdentifier { identifier: lexeme }),
            lexer.position(),
        ));
    }

    let span = lexer.span_of(len);
    lexer.push(MK_TOKEN!(TokenKind::Identifier, lexeme, span));
    lexer.advance_n(len);
    Ok(())
}

pub(crate) fn check_source_len(len: usize, file: &Rc<String>) -> Result<(), Error> {
    if len > MAX_SOURCE_LEN {
        return Err(Error::new(
            ErrorImpl::Lex(LexError::SourceTooLarge { length: len }),
            Position(0, Rc::clone(file)),
        ));
    }

    Ok(())
}

/// Scans `source` into tokens, terminated by a single `EndOfInput` token.
///
/// Fails on the first character that cannot start a token, or on an
/// identifier outside the operator vocabulary. Sources longer than
/// `MAX_SOURCE_LEN` bytes are rejected up front.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    check_source_len(lex.source.len(), &lex.file)?;

    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.end()))
        });

        match matched {
            Some((handler, len)) => handler(&mut lex, len)?,
            None => {
                let character = lex.at().unwrap_or('\0');
                return Err(Error::new(
                    ErrorImpl::Lex(LexError::UnexpectedCharacter { character }),
                    lex.position(),
                ));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EndOfInput, String::new(), span));

    debug!("tokenized {} tokens from {}", lex.tokens.len(), lex.file);
    Ok(lex.tokens)
}
