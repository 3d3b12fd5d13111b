// src/commands/grep/mod.rs
use regex_lite::Regex;

use crate::commands::utils::{read_lines, stdin_lines};
use crate::commands::{Application, CommandResult};

pub struct GrepCommand;

impl Application for GrepCommand {
    fn name(&self) -> &str {
        "grep"
    }

    fn execute(&self, args: &[String], stdin: &[String]) -> CommandResult {
        let Some((pattern, files)) = args.split_first() else {
            return CommandResult::error("grep: wrong number of command line arguments");
        };

        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(e) => return CommandResult::error(format!("grep: invalid pattern: {}", e)),
        };

        if files.is_empty() {
            let matched = stdin_lines(stdin)
                .into_iter()
                .filter(|line| re.is_match(line))
                .collect();
            return CommandResult::success(matched);
        }

        let show_filename = files.len() > 1;
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        for file in files {
            let lines = match read_lines(file) {
                Ok(lines) => lines,
                Err(_) => {
                    stderr.push(format!("grep: {}: No such file or directory", file));
                    continue;
                }
            };
            for line in lines.into_iter().filter(|line| re.is_match(line)) {
                if show_filename {
                    stdout.push(format!("{}:{}", file, line));
                } else {
                    stdout.push(line);
                }
            }
        }

        let exit_code = if stderr.is_empty() { 0 } else { 1 };
        CommandResult::with_exit_code(stdout, stderr, exit_code)
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
    fn test_grep_no_args() {
        let result = GrepCommand.execute(&[], &[]);
        assert_eq!(result.stderr, vec!["grep: wrong number of command line arguments"]);
    }

    #[test]
    fn test_grep_files() {
        let dir = tempfile::tempdir().unwrap();
        let f1 = dir.path().join("file1.txt");
        let f2 = dir.path().join("file2.txt");
        fs::write(&f1, "abc\nadc\nabc\ndef").unwrap();
        fs::write(&f2, "file2\ncontent").unwrap();
        let f1 = f1.display().to_string();
        let f2 = f2.display().to_string();

        let result = GrepCommand.execute(&strings(&["a.*?c", &f1]), &[]);
        assert_eq!(result.stdout, strings(&["abc\n", "adc\n", "abc\n"]));

        let result = GrepCommand.execute(&strings(&["a.*?c", &f1, &f2]), &[]);
        assert_eq!(
            result.stdout,
            vec![
                format!("{}:abc\n", f1),
                format!("{}:adc\n", f1),
                format!("{}:abc\n", f1)
            ]
        );
    }

    #[test]
    fn test_grep_stdin() {
        let stdin = strings(&["abc\n", "adc\n", "abc\n"]);
        let result = GrepCommand.execute(&strings(&["a.*?c"]), &stdin);
        assert_eq!(result.stdout, stdin);

        let result = GrepCommand.execute(&strings(&["z"]), &stdin);
        assert!(result.stdout.is_empty());
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_grep_missing_file() {
        let result = GrepCommand.execute(&strings(&["AAA", "/no/file3.txt"]), &[]);
        assert_eq!(result.stderr, vec!["grep: /no/file3.txt: No such file or directory"]);
    }

    #[test]
    fn test_grep_invalid_pattern() {
        let result = GrepCommand.execute(&strings(&["(", "x"]), &[]);
        assert_eq!(result.exit_code, 1);
    }
}
