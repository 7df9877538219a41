//! Tokenizer for predicate text.
//!
//! All offsets are byte offsets into the scanned `&str`. Structural
//! characters are ASCII, so every split point lands on a char boundary.

pub mod nesting;

use std::ops::Range;

use crate::ast::Token;
use nesting::NestingState;

/// True iff `text` starts with `{` and ends with `}`.
pub fn is_bracketed_expression(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => {
            Token::classify(first) == Token::ExpressionStart
                && Token::classify(last) == Token::ExpressionEnd
        }
        _ => false,
    }
}

/// True iff `text` starts with the variable marker.
pub fn is_variable_reference(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|ch| Token::classify(ch) == Token::VariableMarker)
}

/// Removes one pair of outer braces.
///
/// Text that is not bracketed once whitespace is trimmed comes back
/// untouched, surrounding whitespace included.
pub fn trim_outer_brackets(text: &str) -> &str {
    let trimmed = text.trim();
    if is_bracketed_expression(trimmed) {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        text
    }
}

/// Returns the top-level argument starting at byte `start`.
///
/// Scanning stops at the first separator outside any braces that is not
/// escaped. An empty result means `start` is at or past the end.
pub fn next_top_level_argument(text: &str, start: usize) -> &str {
    if start >= text.len() {
        return "";
    }

    let rest = &text[start..];
    let mut state = NestingState::new();
    let mut escaped = false;

    for (offset, ch) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match Token::classify(ch) {
            Token::Escape => escaped = true,
            Token::ArgumentSeparator if state.is_top_level() => return &rest[..offset],
            token => state.update(token),
        }
    }

    rest
}

/// Name part of a variable reference: after `$`, before the first `[`.
pub fn extract_variable_name(text: &str) -> &str {
    let body = match text.chars().next() {
        Some(ch) if Token::classify(ch) == Token::VariableMarker => &text[ch.len_utf8()..],
        _ => text,
    };
    match body.find(|ch: char| Token::classify(ch) == Token::IndexStart) {
        Some(end) => &body[..end],
        None => body,
    }
}

/// Content of the next `[...]` pair at or after `start`; empty if none.
pub fn next_index_token(text: &str, start: usize) -> &str {
    match index_token_range(text, start) {
        Some(range) => &text[range],
        None => "",
    }
}

/// Byte range of the content of the next `[...]` pair at or after `start`.
pub(crate) fn index_token_range(text: &str, start: usize) -> Option<Range<usize>> {
    let rest = text.get(start..)?;
    let open = rest.find(|ch: char| Token::classify(ch) == Token::IndexStart)?;
    let content = open + 1;
    let close = rest[content..].find(|ch: char| Token::classify(ch) == Token::IndexEnd)?;
    Some(start + content..start + content + close)
}

/// Drops escape characters that precede a structural character.
///
/// A backslash before an ordinary character is kept as written.
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if Token::classify(ch) == Token::Escape {
            if let Some(&next) = chars.peek() {
                if Token::classify(next).is_structural() {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(ch);
    }

    result
}

/// Iterator over the top-level pieces of a predicate.
///
/// The first piece is the operation. A trailing separator yields one empty
/// piece, so `n` top-level separators always give `n + 1` pieces.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, position: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.position > self.input.len() {
            return None;
        }
        let piece = next_top_level_argument(self.input, self.position);
        // skip the separator as well
        self.position += piece.len() + 1;
        Some(piece)
    }
}

#[test]
fn test_split_respects_braces() {
    let pieces: Vec<&str> = Lexer::new("OR, {=, 11, 21}, {<, 11, 21}").collect();
    assert_eq!(pieces, vec!["OR", " {=, 11, 21}", " {<, 11, 21}"]);
}

#[test]
fn test_split_respects_escapes() {
    let pieces: Vec<&str> = Lexer::new(r"=, a\,b, \{c").collect();
    assert_eq!(pieces, vec!["=", r" a\,b", r" \{c"]);
}

#[test]
fn test_trailing_separator() {
    let pieces: Vec<&str> = Lexer::new("NOT,").collect();
    assert_eq!(pieces, vec!["NOT", ""]);
}
