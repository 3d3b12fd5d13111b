//! Word Parser
//!
//! Quoted fragments, unquoted runs and the argument words built from them.

use crate::ast::types::{
    DoubleQuoteNode, DoubleQuotePart, SingleQuoteNode, SubstitutionNode, WordNode, WordPart, AST,
};
use crate::parser::parser::Parser;
use crate::parser::types::{
    is_quote_start, is_reserved, ParseException, BACKQUOTE, DOUBLE_QUOTE, SINGLE_QUOTE,
};

/// Parse an argument: one or more adjoining quoted or unquoted fragments.
pub fn parse_argument(p: &mut Parser) -> Result<WordNode, ParseException> {
    let mut parts = Vec::new();

    while let Some(c) = p.current() {
        let part = match c {
            SINGLE_QUOTE => WordPart::SingleQuote(parse_single_quoted(p)?),
            DOUBLE_QUOTE => WordPart::DoubleQuote(parse_double_quoted(p)?),
            BACKQUOTE => WordPart::Substitution(parse_back_quoted(p)?),
            c if !is_reserved(c) => WordPart::Literal(parse_unquoted(p)?),
            _ => break,
        };
        parts.push(part);
    }

    if parts.is_empty() {
        return Err(p.error("expected argument"));
    }
    Ok(AST::word(parts))
}

/// Parse a maximal run of non-reserved characters.
pub fn parse_unquoted(p: &mut Parser) -> Result<String, ParseException> {
    let mut value = String::new();
    while let Some(c) = p.current() {
        if is_reserved(c) {
            break;
        }
        value.push(c);
        p.advance();
    }
    if value.is_empty() {
        return Err(p.error("expected unquoted word"));
    }
    Ok(value)
}

/// Parse 'text'. Nothing inside is special.
pub fn parse_single_quoted(p: &mut Parser) -> Result<SingleQuoteNode, ParseException> {
    let text = read_delimited(p, SINGLE_QUOTE, "single quote")?;
    Ok(AST::single_quote(text))
}

/// Parse `text`, keeping the inner text raw.
pub fn parse_back_quoted(p: &mut Parser) -> Result<SubstitutionNode, ParseException> {
    let raw = read_delimited(p, BACKQUOTE, "backquote")?;
    Ok(AST::substitution(raw))
}

/// Parse "text", which may embed backquoted substitutions.
pub fn parse_double_quoted(p: &mut Parser) -> Result<DoubleQuoteNode, ParseException> {
    let start = p.position();
    expect_char(p, DOUBLE_QUOTE)?;

    let mut parts = Vec::new();
    let mut literal = String::new();

    loop {
        match p.current() {
            Some(DOUBLE_QUOTE) => {
                p.advance();
                break;
            }
            Some(BACKQUOTE) => {
                if !literal.is_empty() {
                    parts.push(DoubleQuotePart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(DoubleQuotePart::Substitution(parse_back_quoted(p)?));
            }
            Some('\n') | None => {
                return Err(p.error_at(start, "unterminated double quote"));
            }
            Some(c) => {
                literal.push(c);
                p.advance();
            }
        }
    }

    if !literal.is_empty() {
        parts.push(DoubleQuotePart::Literal(literal));
    }
    Ok(AST::double_quote(parts))
}

/// Read text between two `delim` characters on a single line.
fn read_delimited(p: &mut Parser, delim: char, what: &str) -> Result<String, ParseException> {
    let start = p.position();
    expect_char(p, delim)?;

    let mut text = String::new();
    loop {
        match p.advance() {
            Some(c) if c == delim => return Ok(text),
            Some('\n') | None => {
                return Err(p.error_at(start, format!("unterminated {}", what)));
            }
            Some(c) => text.push(c),
        }
    }
}

fn expect_char(p: &mut Parser, expected: char) -> Result<(), ParseException> {
    match p.current() {
        Some(c) if c == expected => {
            p.advance();
            Ok(())
        }
        Some(c) => Err(p.error(format!("expected '{}', found '{}'", expected, c))),
        None => Err(p.error(format!("expected '{}'", expected))),
    }
}

/// Check whether the cursor is at the start of an argument
pub fn is_argument_start(c: char) -> bool {
    is_quote_start(c) || !is_reserved(c)
}
