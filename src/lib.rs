#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{parse_with_options, ParserOptions},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A character offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes and parses a single prefix expression with the default options.
pub fn parse_source(source: &str, file: Option<String>) -> Result<Expr, Error> {
    parse_source_with_options(source, file, ParserOptions::default())
}

pub fn parse_source_with_options(
    source: &str,
    file: Option<String>,
    options: ParserOptions,
) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), file)?;
    let file = tokens
        .last()
        .map(|token| Rc::clone(&token.span.start.1))
        .unwrap_or_else(|| Rc::new(String::from("shell")));

    parse_with_options(tokens, file, options)
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text and the column (in characters)
/// of `position` within that line. Offsets at or past the end of the source
/// point one past the last character of the final line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = line
                .get(..pos - start)
                .map(|prefix| prefix.chars().count())
                .unwrap_or(pos - start);
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
        last_line = line;
    }

    if source.is_empty() {
        return (1, String::new(), 0);
    }

    let trimmed = last_line.trim_end_matches(['\n', '\r']);
    if trimmed.len() != last_line.len() {
        // The source ends with a newline, so the end sits on an empty line.
        return (line_number, String::new(), 0);
    }

    (line_number - 1, last_line.to_string(), trimmed.chars().count())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "(+ 1\n   (abs 2)\n   3)";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 3);
        assert_eq!(line_number, 1);
        assert_eq!(line, "(+ 1\n");
        assert_eq!(line_pos, 3);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 9);
        assert_eq!(line_number, 2);
        assert_eq!(line, "   (abs 2)\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("(+ 1 2", 6);
        assert_eq!(line_number, 1);
        assert_eq!(line, "(+ 1 2");
        assert_eq!(line_pos, 6);

        let (line_number, line, line_pos) = super::get_line_at_position("(+ 1\n", 5);
        assert_eq!(line_number, 2);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        let (line_number, line, line_pos) = super::get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_format_error_points_at_offending_character() {
        let source = "(+ 1 #)";
        let error = crate::parse_source(source, Some("expr".to_string())).unwrap_err();
        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedCharacter");
        assert_eq!(lines[1], "-> expr");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | (+ 1 #)");
        assert_eq!(lines[4], "  | -----^");
    }
}

/// Renders an error as a caret diagnostic against the source it came from.
///
/// ```text
/// Error: UnknownIdentifier (...)
/// -> shell
///   |
/// 1 | (foo 1 2)
///   | -^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
