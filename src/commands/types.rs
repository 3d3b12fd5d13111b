// src/commands/types.rs

/// Result of running one application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: Vec<String>) -> Self {
        Self { stdout, stderr: Vec::new(), exit_code: 0 }
    }

    pub fn error(stderr: impl Into<String>) -> Self {
        Self { stdout: Vec::new(), stderr: vec![stderr.into()], exit_code: 1 }
    }

    pub fn with_exit_code(stdout: Vec<String>, stderr: Vec<String>, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }
}

/// Uniform contract shared by built-ins and the external-process adapter.
///
/// `stdin` is the upstream output (pipe or `<` redirection), or empty.
pub trait Application: Send + Sync {
    fn name(&self) -> &str;
    fn execute(&self, args: &[String], stdin: &[String]) -> CommandResult;
}
