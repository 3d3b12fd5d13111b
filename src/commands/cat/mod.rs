// src/commands/cat/mod.rs
use crate::commands::utils::{read_lines, stdin_lines};
use crate::commands::{Application, CommandResult};

pub struct CatCommand;

impl Application for CatCommand {
    fn name(&self) -> &str {
        "cat"
    }

    fn execute(&self, args: &[String], stdin: &[String]) -> CommandResult {
        // No files: read stdin
        if args.is_empty() {
            return CommandResult::success(stdin_lines(stdin));
        }

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        for file in args {
            match read_lines(file) {
                Ok(lines) => stdout.extend(lines),
                Err(_) => stderr.push(format!("cat: {}: No such file or directory", file)),
            }
        }

        let exit_code = if stderr.is_empty() { 0 } else { 1 };
        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}
