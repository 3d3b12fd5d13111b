// src/commands/utils/mod.rs
pub mod head_tail;

use std::io;
use std::path::Path;

/// Split text into lines, keeping each line's `\n`. A final line without a
/// newline is kept as is.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(String::from).collect()
}

/// Normalize stdin into lines. Upstream entries may hold several lines or a
/// partial one, so they are joined before splitting.
pub fn stdin_lines(stdin: &[String]) -> Vec<String> {
    split_lines(&stdin.concat())
}

/// Read a whole file as lines.
pub fn read_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    std::fs::read_to_string(path).map(|content| split_lines(&content))
}

/// Line content without its trailing newline
pub fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

/// Make sure a line ends with `\n`
pub fn with_newline(line: &str) -> String {
    format!("{}\n", strip_newline(line))
}
