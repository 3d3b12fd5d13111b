// src/commands/ls/mod.rs
use crate::commands::{Application, CommandResult};

pub struct LsCommand;

impl Application for LsCommand {
    fn name(&self) -> &str {
        "ls"
    }

    fn execute(&self, args: &[String], _stdin: &[String]) -> CommandResult {
        let dir = match args {
            [] => ".",
            [dir] => dir.as_str(),
            _ => return CommandResult::error("ls: wrong number of command line arguments"),
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return CommandResult::error(format!("ls: {}: No such directory", dir)),
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !name.starts_with('.'))
            .collect();
        names.sort();

        CommandResult::success(names.into_iter().map(|name| format!("{}\n", name)).collect())
    }
}
