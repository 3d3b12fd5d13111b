// src/commands/cd/mod.rs
use crate::commands::{Application, CommandResult};

/// Changes the process working directory, which later evaluations observe.
pub struct CdCommand;

impl Application for CdCommand {
    fn name(&self) -> &str {
        "cd"
    }

    fn execute(&self, args: &[String], _stdin: &[String]) -> CommandResult {
        let [dir] = args else {
            return CommandResult::error("cd: wrong number of command line arguments");
        };
        match std::env::set_current_dir(dir) {
            Ok(()) => CommandResult::success(Vec::new()),
            Err(_) => CommandResult::error(format!("cd: {}: No such file or directory", dir)),
        }
    }
}
