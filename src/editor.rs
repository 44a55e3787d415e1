//! JSON text helpers for the schema editor
//!
//! Tokenizing for the highlight overlay, line counting for the gutter and
//! pretty-printing for the Format action.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::iter::Peekable;
use std::str::CharIndices;

/// Highlight class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    Key,
    String,
    Number,
    Boolean,
    Null,
    Brace,
    Bracket,
    Colon,
    Comma,
    Error,
}

impl TokenKind {
    /// CSS class used by the editor overlay; whitespace is left unstyled
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "",
            TokenKind::Key => "json-key",
            TokenKind::String => "json-string",
            TokenKind::Number => "json-number",
            TokenKind::Boolean => "json-boolean",
            TokenKind::Null => "json-null",
            TokenKind::Brace => "json-brace",
            TokenKind::Bracket => "json-bracket",
            TokenKind::Colon => "json-colon",
            TokenKind::Comma => "json-comma",
            TokenKind::Error => "json-error",
        }
    }
}

/// A slice of the source text with its highlight class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

type Cursor<'a> = Peekable<CharIndices<'a>>;

fn eat_while(chars: &mut Cursor<'_>, pred: impl Fn(char) -> bool) {
    while let Some(&(_, c)) = chars.peek() {
        if pred(c) {
            chars.next();
        } else {
            break;
        }
    }
}

fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Tokenize JSON for syntax highlighting. Never fails: anything that is not
/// a JSON token comes back as [`TokenKind::Error`].
pub fn tokenize_json(json: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = json.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        let kind = match ch {
            c if is_json_whitespace(c) => {
                eat_while(&mut chars, is_json_whitespace);
                TokenKind::Whitespace
            }
            '"' => {
                chars.next();
                let mut escaped = false;
                for (_, c) in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    }
                }
                // A string followed by a colon on the same line is a key
                let mut ahead = chars.clone();
                eat_while(&mut ahead, |c| c == ' ' || c == '\t');
                if matches!(ahead.peek(), Some(&(_, ':'))) {
                    TokenKind::Key
                } else {
                    TokenKind::String
                }
            }
            '0'..='9' | '-' => {
                chars.next();
                eat_while(&mut chars, |c| c.is_ascii_digit());
                if matches!(chars.peek(), Some(&(_, '.'))) {
                    chars.next();
                    eat_while(&mut chars, |c| c.is_ascii_digit());
                }
                if matches!(chars.peek(), Some(&(_, 'e' | 'E'))) {
                    chars.next();
                    if matches!(chars.peek(), Some(&(_, '+' | '-'))) {
                        chars.next();
                    }
                    eat_while(&mut chars, |c| c.is_ascii_digit());
                }
                TokenKind::Number
            }
            c if c.is_ascii_alphabetic() => {
                eat_while(&mut chars, |c| c.is_ascii_alphabetic());
                let end = chars.peek().map(|&(i, _)| i).unwrap_or(json.len());
                match &json[start..end] {
                    "true" | "false" => TokenKind::Boolean,
                    "null" => TokenKind::Null,
                    _ => TokenKind::Error,
                }
            }
            '{' | '}' => {
                chars.next();
                TokenKind::Brace
            }
            '[' | ']' => {
                chars.next();
                TokenKind::Bracket
            }
            ':' => {
                chars.next();
                TokenKind::Colon
            }
            ',' => {
                chars.next();
                TokenKind::Comma
            }
            _ => {
                chars.next();
                TokenKind::Error
            }
        };

        let end = chars.peek().map(|&(i, _)| i).unwrap_or(json.len());
        tokens.push(Token {
            text: &json[start..end],
            kind,
        });
    }

    tokens
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Generate syntax-highlighted HTML from JSON
pub fn highlight_json(json: &str) -> String {
    let mut html = String::with_capacity(json.len() * 2);

    for token in tokenize_json(json) {
        let escaped = escape_html(token.text);
        match token.kind.css_class() {
            "" => html.push_str(&escaped),
            class => html.push_str(&format!(r#"<span class="{}">{}</span>"#, class, escaped)),
        }
    }

    // Keep a trailing newline visible in the overlay
    if json.ends_with('\n') {
        html.push(' ');
    }

    html
}

/// Count lines in text, never less than one
pub fn count_lines(text: &str) -> usize {
    let lines = text.lines().count().max(1);
    if text.ends_with('\n') {
        lines + 1
    } else {
        lines
    }
}

/// Byte offset of a UTF-16 offset, as reported by DOM selection APIs.
/// Offsets past the end clamp to the text length.
pub fn utf16_to_byte(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        if units >= offset {
            return idx;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// Replace the UTF-16 range `start..end` with `insert`; returns the new text
/// and the UTF-16 caret position just after the insertion
pub fn splice_utf16(text: &str, start: usize, end: usize, insert: &str) -> (String, usize) {
    let from = utf16_to_byte(text, start.min(end));
    let to = utf16_to_byte(text, end.max(start));

    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..from]);
    out.push_str(insert);
    out.push_str(&text[to..]);

    let caret = text[..from].encode_utf16().count() + insert.encode_utf16().count();
    (out, caret)
}

/// Serialize with `indent` spaces per level
pub fn pretty_print<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Re-indent JSON text; fails when the text does not parse
pub fn format_json(json: &str, indent: usize) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    pretty_print(&value, indent)
}
