// src/commands/pwd/mod.rs
use crate::commands::{Application, CommandResult};

pub struct PwdCommand;

impl Application for PwdCommand {
    fn name(&self) -> &str {
        "pwd"
    }

    fn execute(&self, args: &[String], _stdin: &[String]) -> CommandResult {
        if !args.is_empty() {
            return CommandResult::error("pwd: wrong number of command line arguments");
        }
        match std::env::current_dir() {
            Ok(dir) => CommandResult::success(vec![format!("{}\n", dir.display())]),
            Err(e) => CommandResult::error(format!("pwd: {}", e)),
        }
    }
}
