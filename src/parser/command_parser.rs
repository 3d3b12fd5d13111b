//! Command Parser
//!
//! Handles parsing of calls, application names and redirections.

use crate::ast::types::{AppName, Node, RedirectionNode, WordNode, AST};
use crate::parser::parser::Parser;
use crate::parser::types::{
    is_redirection_start, is_reserved, ParseException, BACKQUOTE, DOUBLE_QUOTE,
    LESS_THAN,
};
use crate::parser::word_parser::{
    is_argument_start, parse_argument, parse_back_quoted, parse_double_quoted, parse_unquoted,
};

/// One item after the application name
enum Atom {
    Redirection(RedirectionNode),
    Argument(WordNode),
}

/// Parse a call. Redirections may appear before the application name or
/// anywhere among the arguments; all of them end up in `redirects`.
pub fn parse_call(p: &mut Parser) -> Result<Node, ParseException> {
    p.skip_whitespace();

    let mut redirects = Vec::new();
    while p.current().is_some_and(is_redirection_start) {
        redirects.push(parse_redirection(p)?);
        p.skip_whitespace();
    }

    let app_name = parse_app_name(p)?;

    let mut args = Vec::new();
    loop {
        let before = p.position();
        p.skip_whitespace();
        match parse_atom(p)? {
            Some(Atom::Redirection(r)) => redirects.push(r),
            Some(Atom::Argument(word)) => args.push(word),
            None => {
                p.reset_to(before);
                break;
            }
        }
    }
    p.skip_whitespace();

    Ok(AST::call(redirects, app_name, args))
}

/// Parse a redirection or an argument. Returns None when the cursor is at
/// neither (end of input or an operator).
fn parse_atom(p: &mut Parser) -> Result<Option<Atom>, ParseException> {
    match p.current() {
        Some(c) if is_redirection_start(c) => Ok(Some(Atom::Redirection(parse_redirection(p)?))),
        Some(c) if is_argument_start(c) => Ok(Some(Atom::Argument(parse_argument(p)?))),
        _ => Ok(None),
    }
}

/// Parse `< target` or `> target`. The target is exactly one unquoted run.
pub fn parse_redirection(p: &mut Parser) -> Result<RedirectionNode, ParseException> {
    let start = p.position();
    let sign = p
        .advance()
        .ok_or_else(|| p.error("expected redirection operator"))?;
    p.skip_whitespace();

    if !p.current().is_some_and(|c| !is_reserved(c)) {
        return Err(p.error_at(start, format!("missing target for redirection '{}'", sign)));
    }
    let target = parse_unquoted(p)?;

    Ok(if sign == LESS_THAN {
        AST::redirect_in(target)
    } else {
        AST::redirect_out(target)
    })
}

/// Parse the application name: a backquoted substitution, an unquoted run
/// or a double-quoted string.
pub fn parse_app_name(p: &mut Parser) -> Result<AppName, ParseException> {
    match p.current() {
        Some(BACKQUOTE) => Ok(AppName::Substitution(parse_back_quoted(p)?)),
        Some(DOUBLE_QUOTE) => Ok(AppName::DoubleQuote(parse_double_quoted(p)?)),
        Some(c) if !is_reserved(c) => Ok(AppName::Literal(parse_unquoted(p)?)),
        Some(c) => Err(p.error(format!("expected application name, found '{}'", c))),
        None => Err(p.error("expected application name")),
    }
}
