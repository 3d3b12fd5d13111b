//! Recursive Descent Parser for command lines
//!
//! The parser walks the input one character at a time; there is no separate
//! token stream, because what counts as a token boundary depends on whether
//! the cursor is inside a quote.
//!
//! Grammar:
//!   command     ::= call ( ('|' call) | (';' call) )*
//!   call        ::= ws (redirection ws)* app_name (ws atom)* ws
//!   atom        ::= redirection | argument
//!   app_name    ::= backquoted | unquoted | double_quoted
//!   argument    ::= (quoted | unquoted)+
//!   redirection ::= ('<' | '>') ws unquoted
//!
//! Operators fold to the left: `a | b ; c` is `Seq(Pipe(a, b), c)`.

use crate::ast::types::{Node, AST};
use crate::parser::command_parser::parse_call;
use crate::parser::types::{ParseException, PIPE_OP, SEMI_OP};

pub const MAX_INPUT_SIZE: usize = 1_000_000;

/// Main parser struct
pub struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    /// Create a new parser instance
    pub fn new() -> Self {
        Parser {
            chars: Vec::new(),
            pos: 0,
        }
    }

    /// Parse one command line into its root node
    pub fn parse(&mut self, input: &str) -> Result<Node, ParseException> {
        if input.len() > MAX_INPUT_SIZE {
            return Err(ParseException::new(
                format!(
                    "Input too large: {} bytes exceeds limit of {}",
                    input.len(),
                    MAX_INPUT_SIZE
                ),
                1,
                1,
                0,
            ));
        }

        self.load(input);
        let node = self.parse_command()?;
        tracing::debug!(target: "parse", "parsed {:?} as {}", input, node);
        Ok(node)
    }

    fn parse_command(&mut self) -> Result<Node, ParseException> {
        let mut basis = parse_call(self)?;

        while let Some(c) = self.current() {
            match c {
                PIPE_OP => {
                    self.advance();
                    let right = parse_call(self)?;
                    basis = AST::pipe(basis, right);
                }
                SEMI_OP => {
                    self.advance();
                    let right = parse_call(self)?;
                    basis = AST::seq(basis, right);
                }
                other => {
                    return Err(self.error(format!("unexpected character '{}'", other)));
                }
            }
        }

        Ok(basis)
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    pub(crate) fn load(&mut self, input: &str) {
        self.chars = input.chars().collect();
        self.pos = 0;
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.current();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn reset_to(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Consume a (possibly empty) run of whitespace
    pub(crate) fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Build an error at the current position
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseException {
        ParseException::at(&self.chars, self.pos, message)
    }

    /// Build an error at an earlier position
    pub(crate) fn error_at(&self, offset: usize, message: impl Into<String>) -> ParseException {
        ParseException::at(&self.chars, offset, message)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to parse a command line
pub fn parse(input: &str) -> Result<Node, ParseException> {
    let mut parser = Parser::new();
    parser.parse(input)
}
