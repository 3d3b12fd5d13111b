//! Redirections
//!
//! A call takes at most one `<` source and one `>` sink. Both targets are
//! glob patterns resolved at evaluation time.

use std::fs::File;
use std::io::Write;

use crate::ast::types::{RedirectInNode, RedirectOutNode, RedirectionNode};
use crate::commands::utils::split_lines;
use crate::interpreter::errors::ShellError;
use crate::interpreter::glob_expansion::expand_glob;
use crate::interpreter::types::ExecResult;

/// Split a call's redirections into its input source and output sink.
pub fn partition_redirects(
    redirects: &[RedirectionNode],
) -> Result<(Option<&RedirectInNode>, Option<&RedirectOutNode>), ShellError> {
    let mut input = None;
    let mut output = None;

    for redirect in redirects {
        match redirect {
            RedirectionNode::In(node) if input.is_none() => input = Some(node),
            RedirectionNode::Out(node) if output.is_none() => output = Some(node),
            _ => return Err(ShellError::InvalidRedirection("invalid redirections".to_string())),
        }
    }

    Ok((input, output))
}

/// Read every file the target matches, in match order, as stdout lines.
pub fn read_input(node: &RedirectInNode) -> Result<ExecResult, ShellError> {
    let paths = expand_glob(&node.target);
    if paths.is_empty() {
        return Err(ShellError::FileNotFound(node.target.clone()));
    }

    let mut stdout = Vec::new();
    for path in &paths {
        let content = std::fs::read_to_string(path).map_err(|e| ShellError::io(path, e))?;
        stdout.extend(split_lines(&content));
    }
    Ok(ExecResult::new(stdout, Vec::new()))
}

/// Resolve the single file an output redirection writes to. A target that
/// matches nothing is used as a literal path.
pub fn output_path(node: &RedirectOutNode) -> Result<String, ShellError> {
    let mut paths = expand_glob(&node.target);
    match paths.len() {
        0 => Ok(node.target.clone()),
        1 => Ok(paths.remove(0)),
        _ => Err(ShellError::InvalidRedirection(
            "invalid redirection out".to_string(),
        )),
    }
}

/// Truncate the target and write `lines` to it in order.
pub fn write_output(node: &RedirectOutNode, lines: &[String]) -> Result<ExecResult, ShellError> {
    let path = output_path(node)?;
    let mut file = File::create(&path).map_err(|e| ShellError::io(&path, e))?;
    for line in lines {
        file.write_all(line.as_bytes())
            .map_err(|e| ShellError::io(&path, e))?;
    }
    Ok(ExecResult::default())
}
