//! Interpreter module
//!
//! Evaluates a parsed command line against a command registry.

pub mod command_substitution;
pub mod errors;
pub mod glob_expansion;
pub mod interpreter;
pub mod redirections;
pub mod types;
pub mod word_expansion;

pub use errors::ShellError;
pub use interpreter::Interpreter;
pub use types::ExecResult;
