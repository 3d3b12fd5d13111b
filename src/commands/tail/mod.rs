// src/commands/tail/mod.rs
use crate::commands::utils::head_tail::{get_tail, parse_head_tail_args, process_head_tail};
use crate::commands::{Application, CommandResult};

pub struct TailCommand;

impl Application for TailCommand {
    fn name(&self) -> &str {
        "tail"
    }

    fn execute(&self, args: &[String], stdin: &[String]) -> CommandResult {
        let opts = match parse_head_tail_args(args, "tail") {
            Ok(o) => o,
            Err(e) => return e,
        };
        process_head_tail(&opts, stdin, "tail", get_tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tail_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file1.txt");
        fs::write(&path, "abc\nadc\nabc\ndef").unwrap();
        let path = path.display().to_string();

        let result = TailCommand.execute(&strings(&["-n", "3", &path]), &[]);
        assert_eq!(result.stdout, strings(&["adc\n", "abc\n", "def"]));
    }

    #[test]
    fn test_tail_stdin_last_line() {
        let stdin = strings(&["abc\n", "adc\n"]);
        let result = TailCommand.execute(&strings(&["-n", "1"]), &stdin);
        assert_eq!(result.stdout, strings(&["adc\n"]));
    }

    #[test]
    fn test_tail_wrong_flags() {
        let result = TailCommand.execute(&strings(&["-i", "2"]), &[]);
        assert_eq!(result.stderr, vec!["tail: wrong flags"]);
    }
}
