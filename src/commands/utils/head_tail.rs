// src/commands/utils/head_tail.rs
use crate::commands::utils::{read_lines, stdin_lines};
use crate::commands::CommandResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTailOptions {
    pub lines: usize,
    pub file: Option<String>,
}

impl Default for HeadTailOptions {
    fn default() -> Self {
        Self { lines: 10, file: None }
    }
}

/// Accepted forms: `[]`, `[FILE]`, `[-n N]`, `[-n N FILE]`.
pub fn parse_head_tail_args(args: &[String], cmd_name: &str) -> Result<HeadTailOptions, CommandResult> {
    let mut opts = HeadTailOptions::default();

    match args {
        [] => {}
        [file] => {
            if file.starts_with('-') {
                return Err(CommandResult::error(format!("{}: wrong flags", cmd_name)));
            }
            opts.file = Some(file.clone());
        }
        [flag, count, rest @ ..] if rest.len() <= 1 => {
            if flag != "-n" {
                return Err(CommandResult::error(format!("{}: wrong flags", cmd_name)));
            }
            opts.lines = count.parse().map_err(|_| {
                CommandResult::error(format!("{}: {}: invalid number of lines", cmd_name, count))
            })?;
            opts.file = rest.first().cloned();
        }
        _ => {
            return Err(CommandResult::error(format!(
                "{}: wrong number of command line arguments",
                cmd_name
            )));
        }
    }

    Ok(opts)
}

/// Load the input lines (file or stdin) and hand them to `processor`.
pub fn process_head_tail<F>(
    opts: &HeadTailOptions,
    stdin: &[String],
    cmd_name: &str,
    processor: F,
) -> CommandResult
where
    F: Fn(Vec<String>, usize) -> Vec<String>,
{
    let lines = match &opts.file {
        None => stdin_lines(stdin),
        Some(file) => match read_lines(file) {
            Ok(lines) => lines,
            Err(_) => {
                return CommandResult::error(format!(
                    "{}: {}: No such file or directory",
                    cmd_name, file
                ));
            }
        },
    };

    CommandResult::success(processor(lines, opts.lines))
}

pub fn get_head(mut lines: Vec<String>, count: usize) -> Vec<String> {
    lines.truncate(count);
    lines
}

pub fn get_tail(mut lines: Vec<String>, count: usize) -> Vec<String> {
    let start = lines.len().saturating_sub(count);
    lines.split_off(start)
}
