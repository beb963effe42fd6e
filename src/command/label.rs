//! Label extraction from the verbatim command text
//!
//! Priority order: a quoted span, then the text after a connective word,
//! then the last whitespace token. Id-format substrings never survive
//! into a label. The extractor has no knowledge of the classified intent.

use crate::core::types::NodeId;

/// Connective words that introduce a trailing label
const CONNECTIVES: &[&str] = &["called", "named", "item", "for", "to"];

/// Derive a human-readable label from the verbatim text
pub fn extract_label(raw: &str) -> String {
    let candidate = match quoted_span(raw) {
        Some(span) if !span.is_empty() => span.to_string(),
        _ => match connective_tail(raw) {
            Some(tail) => tail,
            None => last_token_capitalized(raw),
        },
    };
    NodeId::strip_all(&candidate).trim().to_string()
}

/// First single- or double-quoted span, verbatim
///
/// Opening and closing quotes need not be the same character. An empty
/// pair of quotes does not count as a label.
fn quoted_span(raw: &str) -> Option<&str> {
    let is_quote = |c: char| c == '\'' || c == '"';
    let open = raw.find(is_quote)?;
    let body = &raw[open + 1..];
    let close = body.find(is_quote)?;
    Some(&body[..close])
}

/// Text after the earliest connective word followed by whitespace
///
/// The connective matches case-insensitively and needs no word boundary,
/// mirroring how the keyword tables match elsewhere in the pipeline.
fn connective_tail(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    for i in 0..bytes.len() {
        for word in CONNECTIVES {
            let end = i + word.len();
            if end >= bytes.len() {
                continue;
            }
            if bytes[i..end].eq_ignore_ascii_case(word.as_bytes())
                && bytes[end].is_ascii_whitespace()
            {
                let mut tail = end;
                while tail < bytes.len() && bytes[tail].is_ascii_whitespace() {
                    tail += 1;
                }
                return Some(raw[tail..].trim().to_string());
            }
        }
    }
    None
}

/// Last whitespace token, first letter raised and the rest lowered
fn last_token_capitalized(raw: &str) -> String {
    let token = raw.split_whitespace().last().unwrap_or("");
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
