// src/commands/head/mod.rs
use crate::commands::utils::head_tail::{get_head, parse_head_tail_args, process_head_tail};
use crate::commands::{Application, CommandResult};

pub struct HeadCommand;

impl Application for HeadCommand {
    fn name(&self) -> &str {
        "head"
    }

    fn execute(&self, args: &[String], stdin: &[String]) -> CommandResult {
        let opts = match parse_head_tail_args(args, "head") {
            Ok(o) => o,
            Err(e) => return e,
        };
        process_head_tail(&opts, stdin, "head", get_head)
    }
}
