// src/commands/find/mod.rs
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::commands::{Application, CommandResult};

pub struct FindCommand;

/// Walk `root` breadth-first and collect every entry below it whose file
/// name matches `pattern`. The root itself is never reported.
fn walk(root: &Path, pattern: &Pattern) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut queue: VecDeque<PathBuf> = VecDeque::new();
    queue.push_back(root.to_path_buf());

    while let Some(dir) = queue.pop_front() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.filter_map(|entry| entry.ok()) {
            let path = dir.join(entry.file_name());
            if pattern.matches(&entry.file_name().to_string_lossy()) {
                found.push(path.clone());
            }
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                queue.push_back(path);
            }
        }
    }

    found.sort();
    found
}

impl Application for FindCommand {
    fn name(&self) -> &str {
        "find"
    }

    fn execute(&self, args: &[String], _stdin: &[String]) -> CommandResult {
        let (root, flag, pattern) = match args {
            [flag, pattern] => (".", flag, pattern),
            [root, flag, pattern] => (root.as_str(), flag, pattern),
            _ => return CommandResult::error("find: wrong number of command line arguments"),
        };
        if flag != "-name" {
            return CommandResult::error("find: wrong flags");
        }

        let pattern = match Pattern::new(pattern) {
            Ok(pattern) => pattern,
            Err(e) => return CommandResult::error(format!("find: invalid pattern: {}", e)),
        };

        let root = Path::new(root);
        if !root.is_dir() {
            return CommandResult::error(format!(
                "find: {}: No such file or directory",
                root.display()
            ));
        }

        let stdout = walk(root, &pattern)
            .into_iter()
            .map(|path| format!("{}\n", path.display()))
            .collect();
        CommandResult::success(stdout)
    }
}
