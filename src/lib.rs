//! mini-shell - A small command language
//!
//! This library parses a command line into an AST and evaluates it with
//! quoting, command substitution, redirections, pipes, sequences and glob
//! expansion against a registry of applications.

pub mod ast;
pub mod commands;
pub mod interpreter;
pub mod parser;
pub mod shell;

pub use ast::types::*;
pub use commands::{Application, CommandRegistry, CommandResult};
pub use interpreter::{ExecResult, Interpreter, ShellError};
pub use parser::{parse, ParseException, Parser};
pub use shell::{ConfigError, Shell, ShellOptions};
