//! CSS custom property parser
//!
//! Extracts `--name: value;` declarations from raw CSS text. This is a
//! best-effort scanner rather than a full CSS parser: declarations are found
//! anywhere in the text (not only inside `:root`), and fragments that do not
//! form a complete declaration are skipped without error.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::css::constants::{COMMENT_END, COMMENT_START};

/// A custom property declaration found in CSS text
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParsedProperty {
    /// Property name including the leading `--`
    pub name: String,
    /// Trimmed, whitespace-normalized value without comments
    pub value: String,
    /// 1-based line of the property name in the original text
    pub line: usize,
}

/// Resolution environment: property name to raw value
pub type PropertyMap = HashMap<String, String>;

fn property_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"--[A-Za-z0-9_-]+").expect("Failed to compile property name regex"))
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"))
}

fn comma_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*,\s*").expect("Failed to compile comma regex"))
}

fn nested_declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:^|\s)--[A-Za-z0-9_-]+\s*:").expect("Failed to compile nested declaration regex")
    })
}

/// Remove `/* ... */` comments, keeping the newlines they contained so that
/// line numbers still match the original text.
///
/// An unterminated comment swallows the rest of the input.
pub fn strip_comments(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(COMMENT_START) {
        output.push_str(&rest[..start]);
        let after_start = &rest[start + COMMENT_START.len()..];
        match after_start.find(COMMENT_END) {
            Some(end) => {
                let comment = &after_start[..end];
                output.extend(comment.chars().filter(|c| *c == '\n'));
                rest = &after_start[end + COMMENT_END.len()..];
            }
            None => {
                output.extend(after_start.chars().filter(|c| *c == '\n'));
                return output;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Collapse whitespace runs to single spaces and normalize comma spacing
/// to `", "`. Quoted strings are copied unchanged. The result is trimmed.
pub fn normalize_value(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for (segment, quoted) in quoted_segments(raw) {
        if quoted {
            normalized.push_str(segment);
        } else {
            let collapsed = whitespace_regex().replace_all(segment, " ");
            normalized.push_str(&comma_regex().replace_all(&collapsed, ", "));
        }
    }
    normalized.trim().to_string()
}

/// Split a value into runs of unquoted text and quoted strings (quotes
/// included). An unclosed quote runs to the end of the value.
fn quoted_segments(value: &str) -> Vec<(&str, bool)> {
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (offset, c) in value.char_indices() {
        match quote {
            Some(open) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == open {
                    segments.push((&value[segment_start..offset + 1], true));
                    segment_start = offset + 1;
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => {
                if offset > segment_start {
                    segments.push((&value[segment_start..offset], false));
                }
                segment_start = offset;
                quote = Some(c);
            }
            None => {}
        }
    }

    if segment_start < value.len() {
        segments.push((&value[segment_start..], quote.is_some()));
    }
    segments
}

/// Parse all custom property declarations in `text`, in source order.
///
/// Duplicate names are all kept; use [`build_property_map`] for last-wins lookup.
pub fn parse_css_properties(text: &str) -> Vec<ParsedProperty> {
    let stripped = strip_comments(text);
    let bytes = stripped.as_bytes();
    let mut properties = Vec::new();

    // Line bookkeeping is incremental so the whole scan stays linear
    let mut line = 1;
    let mut line_counted_to = 0;

    let mut search_from = 0;
    while let Some(name_match) = property_name_regex().find_at(&stripped, search_from) {
        let name_start = name_match.start();
        let name_end = name_match.end();
        search_from = name_end;

        if !starts_declaration(bytes, name_start) {
            continue;
        }

        let Some((raw_value, value_end)) = declaration_value(&stripped, name_end) else {
            continue;
        };
        search_from = value_end;

        let value = normalize_value(raw_value);
        if value.is_empty() {
            continue;
        }

        line += bytes[line_counted_to..name_start].iter().filter(|b| **b == b'\n').count();
        line_counted_to = name_start;

        properties.push(ParsedProperty {
            name: name_match.as_str().to_string(),
            value,
            line,
        });
    }

    properties
}

/// Build a lookup map from parsed properties; the last declaration of a name wins.
pub fn build_property_map(properties: &[ParsedProperty]) -> PropertyMap {
    properties
        .iter()
        .map(|property| (property.name.clone(), property.value.clone()))
        .collect()
}

/// A name only starts a declaration at the beginning of the text or after
/// whitespace, `{` or `;`. This rules out `var(--x)` and `a--b`.
fn starts_declaration(bytes: &[u8], name_start: usize) -> bool {
    match name_start.checked_sub(1).map(|i| bytes[i]) {
        None => true,
        Some(b) => b.is_ascii_whitespace() || b == b'{' || b == b';',
    }
}

/// Find the value following a property name. Returns the raw value text and
/// the offset just past the terminating `;`, or `None` when the colon or the
/// semicolon is missing.
///
/// `;`, `{` and `}` inside quotes or parentheses belong to the value, so
/// `url("data:image/svg+xml;base64,...")` stays whole.
fn declaration_value(text: &str, name_end: usize) -> Option<(&str, usize)> {
    let after_name = &text[name_end..];
    let trimmed = after_name.trim_start();
    let colon_offset = name_end + (after_name.len() - trimmed.len());
    if !trimmed.starts_with(':') {
        return None;
    }

    let value_start = colon_offset + 1;
    let rest = &text[value_start..];
    let terminator = find_value_terminator(rest)?;
    if rest.as_bytes()[terminator] != b';' {
        return None;
    }

    // Another declaration inside the value means this one lost its semicolon
    let raw_value = &rest[..terminator];
    if nested_declaration_regex().is_match(raw_value) {
        return None;
    }

    Some((raw_value, value_start + terminator + 1))
}

/// Offset of the first `;`, `{` or `}` outside quoted strings and
/// parentheses. `None` when the text ends first.
fn find_value_terminator(value: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut depth = 0usize;

    for (offset, c) in value.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' | '{' | '}' if depth == 0 => return Some(offset),
            _ => {}
        }
    }

    None
}
