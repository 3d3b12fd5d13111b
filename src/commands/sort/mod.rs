// src/commands/sort/mod.rs
use crate::commands::utils::{read_lines, stdin_lines, strip_newline, with_newline};
use crate::commands::{Application, CommandResult};

pub struct SortCommand;

impl Application for SortCommand {
    fn name(&self) -> &str {
        "sort"
    }

    fn execute(&self, args: &[String], stdin: &[String]) -> CommandResult {
        let (reverse, file) = match args {
            [] => (false, None),
            [flag] if flag == "-r" => (true, None),
            [flag] if flag.starts_with('-') => return CommandResult::error("sort: wrong flags"),
            [file] => (false, Some(file)),
            [flag, file] if flag == "-r" => (true, Some(file)),
            [_, _] => return CommandResult::error("sort: wrong flags"),
            _ => return CommandResult::error("sort: wrong number of command line arguments"),
        };

        let lines = match file {
            Some(file) => match read_lines(file) {
                Ok(lines) => lines,
                Err(_) => {
                    return CommandResult::error(format!("sort: {}: No such file or directory", file))
                }
            },
            None => stdin_lines(stdin),
        };

        let mut keys: Vec<&str> = lines.iter().map(|line| strip_newline(line)).collect();
        keys.sort_unstable();
        if reverse {
            keys.reverse();
        }

        CommandResult::success(keys.into_iter().map(with_newline).collect())
    }
}
