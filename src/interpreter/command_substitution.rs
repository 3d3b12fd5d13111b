//! Command Substitution
//!
//! The backquoted text is kept raw by the parser and only parsed here, at
//! evaluation time, by the same grammar. Parser and evaluator recurse into
//! each other for nested substitutions.

use crate::ast::types::SubstitutionNode;
use crate::interpreter::errors::ShellError;
use crate::interpreter::interpreter::Interpreter;
use crate::interpreter::types::ExecResult;
use crate::parser::parse;

/// Parse and evaluate the raw text, then flatten its stdout into a single
/// entry. stderr and the exit code pass through unchanged.
pub fn evaluate_substitution(
    interp: &Interpreter<'_>,
    node: &SubstitutionNode,
) -> Result<ExecResult, ShellError> {
    let ast = parse(&node.raw)?;
    let inner = interp.evaluate(&ast)?;

    Ok(ExecResult {
        stdout: vec![flatten_output(&inner.stdout)],
        stderr: inner.stderr,
        exit_code: inner.exit_code,
    })
}

/// Join output lines, strip newlines and spaces from both ends and turn
/// inner newlines into spaces.
pub fn flatten_output(stdout: &[String]) -> String {
    stdout
        .concat()
        .trim_matches(|c: char| c == '\n' || c == ' ')
        .replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::types::AST;
    use crate::commands::CommandRegistry;

    fn substitute(raw: &str) -> Result<ExecResult, ShellError> {
        let registry = CommandRegistry::default();
        let interp = Interpreter::new(&registry);
        evaluate_substitution(&interp, &AST::substitution(raw))
    }

    #[test]
    fn test_flatten_output() {
        let lines = vec!["a\n".to_string(), "b\n".to_string(), "c\n".to_string()];
        assert_eq!(flatten_output(&lines), "a b c");
        assert_eq!(flatten_output(&["  x y \n\n".to_string()]), "x y");
        assert_eq!(flatten_output(&[]), "");
    }

    #[test]
    fn test_flatten_output_keeps_tabs() {
        assert_eq!(flatten_output(&["\tx\t\n".to_string()]), "\tx\t");
        assert_eq!(flatten_output(&["\n a\tb \n".to_string()]), "a\tb");
    }

    #[test]
    fn test_substitution_strips_newline() {
        let result = substitute("echo foo").unwrap();
        assert_eq!(result.stdout, vec!["foo"]);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_substitution_of_sequence() {
        let result = substitute("echo a; echo b").unwrap();
        assert_eq!(result.stdout, vec!["a b"]);
    }

    #[test]
    fn test_nested_substitution() {
        let result = substitute("echo \"`echo inner`\" outer").unwrap();
        assert_eq!(result.stdout, vec!["inner outer"]);
    }

    #[test]
    fn test_substitution_passes_failures_through() {
        let result = substitute("_ls /no/such/dir").unwrap();
        assert_eq!(result.stdout, vec![""]);
        assert_eq!(result.stderr, vec!["ls: /no/such/dir: No such directory"]);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn test_substitution_parse_error() {
        assert!(matches!(substitute("echo 'x"), Err(ShellError::Parse(_))));
    }
}
