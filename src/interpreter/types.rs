//! Interpreter Types

use serde::Serialize;

/// Accumulated output of evaluating one subtree.
///
/// For a call, `exit_code` is the number of captured stderr entries rather
/// than a 0/1 status. Sequences and pipes keep the left side's exit code when
/// it is nonzero and otherwise take the right side's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecResult {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub exit_code: i32,
}

impl ExecResult {
    /// Build a result whose exit code counts the stderr entries.
    pub fn new(stdout: Vec<String>, stderr: Vec<String>) -> Self {
        let exit_code = stderr.len() as i32;
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    /// A single stdout entry and no errors
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()], Vec::new())
    }

    /// All stdout entries joined together
    pub fn stdout_text(&self) -> String {
        self.stdout.concat()
    }

    /// All stderr entries, one per line
    pub fn stderr_text(&self) -> String {
        self.stderr.join("\n")
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Exit code of two results evaluated one after the other
    pub fn combine_exit(left: i32, right: i32) -> i32 {
        if left != 0 {
            left
        } else {
            right
        }
    }
}
