//! Parser module for command lines
//!
//! Turns one command-line string into an AST, or fails with a positioned
//! `ParseException` before anything is evaluated.

pub mod types;
pub mod word_parser;
pub mod command_parser;
pub mod parser;

// Re-exports
pub use types::ParseException;
pub use parser::{parse, Parser};
