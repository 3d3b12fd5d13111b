// src/commands/echo/mod.rs
use crate::commands::{Application, CommandResult};

pub struct EchoCommand;

impl Application for EchoCommand {
    fn name(&self) -> &str {
        "echo"
    }

    fn execute(&self, args: &[String], _stdin: &[String]) -> CommandResult {
        CommandResult::success(vec![format!("{}\n", args.join(" "))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_joins_args() {
        let args = vec!["hello".to_string(), "world".to_string()];
        let result = EchoCommand.execute(&args, &[]);
        assert_eq!(result.stdout, vec!["hello world\n"]);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_echo_no_args() {
        let result = EchoCommand.execute(&[], &[]);
        assert_eq!(result.stdout, vec!["\n"]);
    }

    #[test]
    fn test_echo_ignores_stdin() {
        let result = EchoCommand.execute(&["x".to_string()], &["piped\n".to_string()]);
        assert_eq!(result.stdout, vec!["x\n"]);
    }
}
