//! Parser Types and Constants
//!
//! Shared error type and character classes used across parser modules.

use std::fmt;
use thiserror::Error;

pub const PIPE_OP: char = '|';
pub const SEMI_OP: char = ';';
pub const LESS_THAN: char = '<';
pub const GREATER_THAN: char = '>';
pub const SINGLE_QUOTE: char = '\'';
pub const DOUBLE_QUOTE: char = '"';
pub const BACKQUOTE: char = '`';

/// Characters that end an unquoted run
pub fn is_reserved(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            SINGLE_QUOTE | DOUBLE_QUOTE | BACKQUOTE | SEMI_OP | PIPE_OP | LESS_THAN | GREATER_THAN
        )
}

/// Check if a character can start a quoted fragment
pub fn is_quote_start(c: char) -> bool {
    matches!(c, SINGLE_QUOTE | DOUBLE_QUOTE | BACKQUOTE)
}

/// Check if a character starts a redirection
pub fn is_redirection_start(c: char) -> bool {
    matches!(c, LESS_THAN | GREATER_THAN)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseException {
    pub message: String,
    pub line: usize,
    pub column: usize,
    /// Character offset into the input
    pub offset: usize,
}

impl fmt::Display for ParseException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at {}:{}: {}", self.line, self.column, self.message)
    }
}

impl ParseException {
    pub fn new(message: impl Into<String>, line: usize, column: usize, offset: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            offset,
        }
    }

    /// Build an error positioned at `offset` characters into `input`.
    pub fn at(input: &[char], offset: usize, message: impl Into<String>) -> Self {
        let mut line = 1;
        let mut column = 1;
        for c in input.iter().take(offset) {
            if *c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self::new(message, line, column, offset)
    }
}
