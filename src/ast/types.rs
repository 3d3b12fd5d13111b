//! Abstract Syntax Tree (AST) Types for the command language
//!
//! A parsed command line is one [`Node`]. The node set is closed: every
//! variant is listed here and the interpreter matches on all of them.

use std::fmt;

// =============================================================================
// QUOTES & SUBSTITUTION
// =============================================================================

/// Single-quoted text: 'literal'
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleQuoteNode {
    pub text: String,
}

/// Double-quoted text: "literal `substitution` literal"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleQuoteNode {
    pub parts: Vec<DoubleQuotePart>,
    /// Set when any part is a substitution, so evaluation can skip the
    /// splice path for plain strings.
    pub has_substitution: bool,
}

/// Fragments inside a double-quoted string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoubleQuotePart {
    Literal(String),
    Substitution(SubstitutionNode),
}

/// Backquoted command: `raw text`
///
/// The inner text is kept raw and only parsed when evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionNode {
    pub raw: String,
}

// =============================================================================
// REDIRECTIONS
// =============================================================================

/// Input redirection: < pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectInNode {
    pub target: String,
}

/// Output redirection: > pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectOutNode {
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectionNode {
    In(RedirectInNode),
    Out(RedirectOutNode),
}

// =============================================================================
// WORDS
// =============================================================================

/// One argument word. Adjoining fragments with no whitespace between them
/// belong to the same word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNode {
    pub parts: Vec<WordPart>,
}

/// Parts that can make up a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPart {
    Literal(String),
    SingleQuote(SingleQuoteNode),
    DoubleQuote(DoubleQuoteNode),
    Substitution(SubstitutionNode),
}

/// Application name of a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppName {
    Literal(String),
    DoubleQuote(DoubleQuoteNode),
    Substitution(SubstitutionNode),
}

// =============================================================================
// COMMANDS
// =============================================================================

/// One application invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNode {
    /// All redirections of the call, in source order
    pub redirects: Vec<RedirectionNode>,
    pub app_name: AppName,
    pub args: Vec<WordNode>,
}

/// left ; right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqNode {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// left | right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeNode {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Union of all node types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    SingleQuote(SingleQuoteNode),
    DoubleQuote(DoubleQuoteNode),
    Substitution(SubstitutionNode),
    RedirectIn(RedirectInNode),
    RedirectOut(RedirectOutNode),
    Call(CallNode),
    Seq(SeqNode),
    Pipe(PipeNode),
}

// =============================================================================
// DISPLAY
// =============================================================================

impl fmt::Display for DoubleQuoteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for part in &self.parts {
            match part {
                DoubleQuotePart::Literal(s) => write!(f, "{}", s)?,
                DoubleQuotePart::Substitution(sub) => write!(f, "{}", sub)?,
            }
        }
        write!(f, "\"")
    }
}

impl fmt::Display for SubstitutionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.raw)
    }
}

impl fmt::Display for WordNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                WordPart::Literal(s) => write!(f, "{}", s)?,
                WordPart::SingleQuote(q) => write!(f, "'{}'", q.text)?,
                WordPart::DoubleQuote(q) => write!(f, "{}", q)?,
                WordPart::Substitution(sub) => write!(f, "{}", sub)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppName::Literal(s) => write!(f, "{}", s),
            AppName::DoubleQuote(q) => write!(f, "{}", q),
            AppName::Substitution(sub) => write!(f, "{}", sub),
        }
    }
}

impl fmt::Display for RedirectionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectionNode::In(r) => write!(f, "< {}", r.target),
            RedirectionNode::Out(r) => write!(f, "> {}", r.target),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::SingleQuote(q) => write!(f, "'{}'", q.text),
            Node::DoubleQuote(q) => write!(f, "{}", q),
            Node::Substitution(sub) => write!(f, "{}", sub),
            Node::RedirectIn(r) => write!(f, "< {}", r.target),
            Node::RedirectOut(r) => write!(f, "> {}", r.target),
            Node::Call(call) => {
                write!(f, "{}", call.app_name)?;
                for arg in &call.args {
                    write!(f, " {}", arg)?;
                }
                for redirect in &call.redirects {
                    write!(f, " {}", redirect)?;
                }
                Ok(())
            }
            Node::Seq(seq) => write!(f, "{}; {}", seq.left, seq.right),
            Node::Pipe(pipe) => write!(f, "{} | {}", pipe.left, pipe.right),
        }
    }
}

// =============================================================================
// FACTORY FUNCTIONS
// =============================================================================

/// Helper struct for creating AST nodes
pub struct AST;

impl AST {
    pub fn single_quote(text: impl Into<String>) -> SingleQuoteNode {
        SingleQuoteNode { text: text.into() }
    }

    /// Build a double-quoted node, deriving the substitution flag from the parts.
    pub fn double_quote(parts: Vec<DoubleQuotePart>) -> DoubleQuoteNode {
        let has_substitution = parts
            .iter()
            .any(|p| matches!(p, DoubleQuotePart::Substitution(_)));
        DoubleQuoteNode {
            parts,
            has_substitution,
        }
    }

    pub fn substitution(raw: impl Into<String>) -> SubstitutionNode {
        SubstitutionNode { raw: raw.into() }
    }

    pub fn redirect_in(target: impl Into<String>) -> RedirectionNode {
        RedirectionNode::In(RedirectInNode {
            target: target.into(),
        })
    }

    pub fn redirect_out(target: impl Into<String>) -> RedirectionNode {
        RedirectionNode::Out(RedirectOutNode {
            target: target.into(),
        })
    }

    pub fn word(parts: Vec<WordPart>) -> WordNode {
        WordNode { parts }
    }

    /// A word made of a single unquoted literal.
    pub fn literal_word(value: impl Into<String>) -> WordNode {
        WordNode {
            parts: vec![WordPart::Literal(value.into())],
        }
    }

    pub fn call(redirects: Vec<RedirectionNode>, app_name: AppName, args: Vec<WordNode>) -> Node {
        Node::Call(CallNode {
            redirects,
            app_name,
            args,
        })
    }

    /// Shorthand for a call with a literal name and literal arguments.
    pub fn simple_call(app_name: &str, args: &[&str]) -> Node {
        AST::call(
            vec![],
            AppName::Literal(app_name.to_string()),
            args.iter().map(|a| AST::literal_word(*a)).collect(),
        )
    }

    pub fn seq(left: Node, right: Node) -> Node {
        Node::Seq(SeqNode {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn pipe(left: Node, right: Node) -> Node {
        Node::Pipe(PipeNode {
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
