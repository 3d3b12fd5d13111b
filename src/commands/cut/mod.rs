// src/commands/cut/mod.rs
use crate::commands::utils::{read_lines, stdin_lines, strip_newline};
use crate::commands::{Application, CommandResult};

pub struct CutCommand;

/// Represents a single range element in a LIST specification.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RangeSpec {
    Single(usize),
    Range(usize, usize),
    FromStart(usize), // -M  (1 to M)
    ToEnd(usize),     // N-  (N to end)
}

fn parse_position(text: &str, part: &str) -> Result<usize, String> {
    let n: usize = text
        .parse()
        .map_err(|_| format!("cut: invalid range: {}", part))?;
    if n == 0 {
        return Err("cut: bytes are numbered from 1".to_string());
    }
    Ok(n)
}

/// Parse a LIST string like "1,3-5,7-" into a vector of RangeSpec.
fn parse_list(list: &str) -> Result<Vec<RangeSpec>, String> {
    let mut specs = Vec::new();
    for part in list.split(',') {
        if part.is_empty() {
            return Err(format!("cut: invalid list: {}", list));
        }
        let spec = match part.split_once('-') {
            Some(("", "")) => return Err("cut: invalid range with no endpoint: -".to_string()),
            Some(("", right)) => RangeSpec::FromStart(parse_position(right, part)?),
            Some((left, "")) => RangeSpec::ToEnd(parse_position(left, part)?),
            Some((left, right)) => {
                RangeSpec::Range(parse_position(left, part)?, parse_position(right, part)?)
            }
            None => RangeSpec::Single(parse_position(part, part)?),
        };
        specs.push(spec);
    }
    Ok(specs)
}

/// Expand range specs into a sorted, deduplicated list of 1-based indices.
/// `max` is the number of bytes available.
fn expand_indices(specs: &[RangeSpec], max: usize) -> Vec<usize> {
    let mut indices = Vec::new();
    for spec in specs {
        let (start, end) = match *spec {
            RangeSpec::Single(n) => (n, n),
            RangeSpec::Range(n, m) => (n, m),
            RangeSpec::FromStart(m) => (1, m),
            RangeSpec::ToEnd(n) => (n, max),
        };
        indices.extend((start..=end.min(max)).filter(|i| *i >= 1));
    }
    indices.sort_unstable();
    indices.dedup();
    indices
}

fn cut_line(line: &str, specs: &[RangeSpec]) -> String {
    let bytes = strip_newline(line).as_bytes();
    let selected: Vec<u8> = expand_indices(specs, bytes.len())
        .into_iter()
        .map(|i| bytes[i - 1])
        .collect();
    format!("{}\n", String::from_utf8_lossy(&selected))
}

impl Application for CutCommand {
    fn name(&self) -> &str {
        "cut"
    }

    fn execute(&self, args: &[String], stdin: &[String]) -> CommandResult {
        let (flag, list, file) = match args {
            [flag, list] => (flag, list, None),
            [flag, list, file] => (flag, list, Some(file)),
            _ => return CommandResult::error("cut: wrong number of command line arguments"),
        };
        if flag != "-b" {
            return CommandResult::error("cut: wrong flags");
        }

        let specs = match parse_list(list) {
            Ok(specs) => specs,
            Err(msg) => return CommandResult::error(msg),
        };

        let lines = match file {
            Some(file) => match read_lines(file) {
                Ok(lines) => lines,
                Err(_) => {
                    return CommandResult::error(format!("cut: {}: No such file or directory", file))
                }
            },
            None => stdin_lines(stdin),
        };

        CommandResult::success(lines.iter().map(|line| cut_line(line, &specs)).collect())
    }
}
