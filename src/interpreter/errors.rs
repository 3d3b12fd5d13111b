//! Evaluation Errors
//!
//! Hard failures that abort the whole evaluation. Application failures that
//! are only reported travel inside `ExecResult` instead.

use thiserror::Error;

use crate::parser::ParseException;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Parse(#[from] ParseException),

    /// Duplicate redirection kind, or an output target matching several files
    #[error("{0}")]
    InvalidRedirection(String),

    /// A nested evaluation reported a failure where its output was needed
    #[error("substitution of `{command}` failed: {stderr}")]
    SubstitutionFailure { command: String, stderr: String },

    #[error("{0}: command not found")]
    AppNotFound(String),

    /// An input redirection pattern matched nothing
    #[error("{0}: No such file or directory")]
    FileNotFound(String),

    /// A safely dispatched application exited with a failure
    #[error("{app}: {stderr}")]
    ExitNonZero { app: String, stderr: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ShellError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ShellError::Io {
            path: path.into(),
            source,
        }
    }
}
