//! Word Expansion
//!
//! Resolves quoted fragments, substitutions and application names into
//! plain text. A word whose unquoted literal fragments contain `*` also
//! gets a glob pattern in which every resolved fragment is escaped, so that
//! only the literal wildcards match.

use glob::Pattern;

use crate::ast::types::{
    AppName, DoubleQuoteNode, DoubleQuotePart, SingleQuoteNode, WordNode, WordPart,
};
use crate::interpreter::command_substitution::evaluate_substitution;
use crate::interpreter::errors::ShellError;
use crate::interpreter::interpreter::Interpreter;
use crate::interpreter::types::ExecResult;

/// A fully resolved argument word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedWord {
    pub text: String,
    /// Set when the word is a glob site
    pub pattern: Option<String>,
}

impl ExpandedWord {
    pub fn is_glob_site(&self) -> bool {
        self.pattern.is_some()
    }
}

pub fn evaluate_single_quote(node: &SingleQuoteNode) -> ExecResult {
    ExecResult::text(node.text.clone())
}

/// Splice each substitution's flattened output between the literal parts.
/// Failures of the substitutions are collected, not raised.
pub fn evaluate_double_quote(
    interp: &Interpreter<'_>,
    node: &DoubleQuoteNode,
) -> Result<ExecResult, ShellError> {
    let mut text = String::new();
    let mut stderr = Vec::new();

    for part in &node.parts {
        match part {
            DoubleQuotePart::Literal(s) => text.push_str(s),
            DoubleQuotePart::Substitution(sub) if node.has_substitution => {
                let result = evaluate_substitution(interp, sub)?;
                text.push_str(&result.stdout_text());
                stderr.extend(result.stderr);
            }
            DoubleQuotePart::Substitution(_) => {}
        }
    }

    Ok(ExecResult::new(vec![text], stderr))
}

/// Text of a fragment that must have succeeded
fn require_success(result: ExecResult, fragment: &dyn std::fmt::Display) -> Result<String, ShellError> {
    if !result.is_success() {
        return Err(ShellError::SubstitutionFailure {
            command: fragment.to_string(),
            stderr: result.stderr_text(),
        });
    }
    Ok(result.stdout_text())
}

/// Resolve one argument word, left to right. Any failing fragment aborts.
pub fn expand_word(interp: &Interpreter<'_>, word: &WordNode) -> Result<ExpandedWord, ShellError> {
    let mut text = String::new();
    let mut pattern = String::new();
    let mut is_glob = false;

    for part in &word.parts {
        let resolved = match part {
            WordPart::Literal(s) => {
                is_glob |= s.contains('*');
                text.push_str(s);
                pattern.push_str(s);
                continue;
            }
            WordPart::SingleQuote(q) => evaluate_single_quote(q).stdout_text(),
            WordPart::DoubleQuote(q) => require_success(evaluate_double_quote(interp, q)?, q)?,
            WordPart::Substitution(sub) => {
                require_success(evaluate_substitution(interp, sub)?, sub)?
            }
        };
        pattern.push_str(&Pattern::escape(&resolved));
        text.push_str(&resolved);
    }

    Ok(ExpandedWord {
        text,
        pattern: is_glob.then_some(pattern),
    })
}

/// Resolve the application name to a plain string.
pub fn resolve_app_name(interp: &Interpreter<'_>, app_name: &AppName) -> Result<String, ShellError> {
    match app_name {
        AppName::Literal(name) => Ok(name.clone()),
        AppName::DoubleQuote(q) => require_success(evaluate_double_quote(interp, q)?, q),
        AppName::Substitution(sub) => {
            let result = evaluate_substitution(interp, sub)?;
            if !result.is_success() {
                return Err(ShellError::SubstitutionFailure {
                    command: format!("Cannot substitute {} as app name", sub),
                    stderr: result.stderr_text(),
                });
            }
            Ok(result.stdout_text().trim().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::types::AST;
    use crate::commands::CommandRegistry;

    fn with_interp<T>(f: impl FnOnce(&Interpreter<'_>) -> T) -> T {
        let registry = CommandRegistry::default();
        let interp = Interpreter::new(&registry);
        f(&interp)
    }

    #[test]
    fn test_single_quote_is_verbatim() {
        let result = evaluate_single_quote(&AST::single_quote("`echo x` ; *"));
        assert_eq!(result.stdout, vec!["`echo x` ; *"]);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_double_quote_without_substitution() {
        let node = AST::double_quote(vec![DoubleQuotePart::Literal("a b".to_string())]);
        let result = with_interp(|i| evaluate_double_quote(i, &node)).unwrap();
        assert_eq!(result.stdout, vec!["a b"]);
    }

    #[test]
    fn test_double_quote_splices_substitution() {
        let node = AST::double_quote(vec![
            DoubleQuotePart::Literal("<".to_string()),
            DoubleQuotePart::Substitution(AST::substitution("echo x")),
            DoubleQuotePart::Literal(">".to_string()),
        ]);
        let result = with_interp(|i| evaluate_double_quote(i, &node)).unwrap();
        assert_eq!(result.stdout, vec!["<x>"]);
    }

    #[test]
    fn test_double_quote_collects_failure() {
        let node = AST::double_quote(vec![DoubleQuotePart::Substitution(AST::substitution(
            "_cat /no/such/file",
        ))]);
        let result = with_interp(|i| evaluate_double_quote(i, &node)).unwrap();
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr.len(), 1);
    }

    #[test]
    fn test_expand_word_concatenates() {
        let word = AST::word(vec![
            WordPart::Substitution(AST::substitution("echo cat")),
            WordPart::Literal("hello.txt".to_string()),
            WordPart::SingleQuote(AST::single_quote("abc")),
        ]);
        let expanded = with_interp(|i| expand_word(i, &word)).unwrap();
        assert_eq!(expanded.text, "cathello.txtabc");
        assert!(!expanded.is_glob_site());
    }

    #[test]
    fn test_expand_word_glob_site_escapes_quoted_parts() {
        let word = AST::word(vec![
            WordPart::SingleQuote(AST::single_quote("a*")),
            WordPart::Literal("*.txt".to_string()),
        ]);
        let expanded = with_interp(|i| expand_word(i, &word)).unwrap();
        assert_eq!(expanded.text, "a**.txt");
        assert_eq!(expanded.pattern.as_deref(), Some("a[*]*.txt"));
    }

    #[test]
    fn test_quoted_star_is_not_a_glob_site() {
        let word = AST::word(vec![WordPart::SingleQuote(AST::single_quote("*.txt"))]);
        let expanded = with_interp(|i| expand_word(i, &word)).unwrap();
        assert_eq!(expanded.pattern, None);
    }

    #[test]
    fn test_expand_word_failing_fragment_aborts() {
        let word = AST::word(vec![WordPart::Substitution(AST::substitution(
            "_cat /no/such/file",
        ))]);
        let err = with_interp(|i| expand_word(i, &word)).unwrap_err();
        assert!(matches!(err, ShellError::SubstitutionFailure { .. }));
    }

    #[test]
    fn test_resolve_app_name() {
        let name = with_interp(|i| {
            resolve_app_name(i, &AppName::Substitution(AST::substitution("echo echo")))
        })
        .unwrap();
        assert_eq!(name, "echo");

        let quoted = AppName::DoubleQuote(AST::double_quote(vec![DoubleQuotePart::Literal(
            "echo".to_string(),
        )]));
        assert_eq!(with_interp(|i| resolve_app_name(i, &quoted)).unwrap(), "echo");
    }

    #[test]
    fn test_failing_app_name_substitution() {
        let err = with_interp(|i| {
            resolve_app_name(i, &AppName::Substitution(AST::substitution("_ls /no/dir")))
        })
        .unwrap_err();
        match err {
            ShellError::SubstitutionFailure { command, .. } => {
                assert_eq!(command, "Cannot substitute `_ls /no/dir` as app name")
            }
            other => panic!("expected SubstitutionFailure, got {:?}", other),
        }
    }
}
