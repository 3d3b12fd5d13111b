// src/commands/uniq/mod.rs
use crate::commands::utils::{read_lines, stdin_lines, strip_newline};
use crate::commands::{Application, CommandResult};

pub struct UniqCommand;

/// Keep the first line of each run of adjacent equal lines.
fn collapse(lines: Vec<String>, ignore_case: bool) -> Vec<String> {
    let key = |line: &str| {
        let line = strip_newline(line);
        if ignore_case {
            line.to_lowercase()
        } else {
            line.to_string()
        }
    };

    let mut output: Vec<String> = Vec::new();
    let mut previous: Option<String> = None;
    for line in lines {
        let current = key(&line);
        if previous.as_ref() != Some(&current) {
            output.push(line);
            previous = Some(current);
        }
    }
    output
}

impl Application for UniqCommand {
    fn name(&self) -> &str {
        "uniq"
    }

    fn execute(&self, args: &[String], stdin: &[String]) -> CommandResult {
        let (ignore_case, file) = match args {
            [] => (false, None),
            [flag] if flag == "-i" => (true, None),
            [flag] if flag.starts_with('-') => return CommandResult::error("uniq: wrong flags"),
            [file] => (false, Some(file)),
            [flag, file] if flag == "-i" => (true, Some(file)),
            [_, _] => return CommandResult::error("uniq: wrong flags"),
            _ => return CommandResult::error("uniq: wrong number of command line arguments"),
        };

        let lines = match file {
            Some(file) => match read_lines(file) {
                Ok(lines) => lines,
                Err(_) => {
                    return CommandResult::error(format!("uniq: {}: No such file or directory", file))
                }
            },
            None => stdin_lines(stdin),
        };

        CommandResult::success(collapse(lines, ignore_case))
    }
}
