use std::sync::OnceLock;

use regex::Regex;

use super::{Document, Position};
use crate::error::ResolveError;

static QUOTED_LITERAL: OnceLock<Regex> = OnceLock::new();

fn quoted_literal_regex() -> &'static Regex {
    // Greedy: with more than two quotes on a line the match runs from the
    // first quote to the last one.
    QUOTED_LITERAL.get_or_init(|| Regex::new(r#"".*""#).expect("static regex compiles"))
}

/// Position of the first match of `pattern` in the document.
///
/// A match at offset zero is a regular result.
pub fn locate(document: &Document, pattern: &Regex) -> Result<Position, ResolveError> {
    pattern
        .find(document.text())
        .map(|m| document.position_at(m.start()))
        .ok_or_else(|| ResolveError::pattern_not_found(pattern.as_str()))
}

/// Like [`locate`], treating `needle` as literal text rather than a regex.
pub fn locate_literal(document: &Document, needle: &str) -> Result<Position, ResolveError> {
    document
        .text()
        .find(needle)
        .map(|offset| document.position_at(offset))
        .ok_or_else(|| ResolveError::pattern_not_found(needle))
}

/// The double-quoted span on `line_text`, quotes included.
///
/// `line` is the zero-based line number, used only for error reporting.
pub fn quoted_literal_on_line(line_text: &str, line: usize) -> Result<&str, ResolveError> {
    if line_text.trim().is_empty() {
        return Err(ResolveError::EmptyLine { line: line + 1 });
    }
    quoted_literal_regex()
        .find(line_text)
        .map(|m| m.as_str())
        .ok_or(ResolveError::NoQuotedLiteral { line: line + 1 })
}
