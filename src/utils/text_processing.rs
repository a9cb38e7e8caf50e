//! Text processing utilities.
//!
//! This module contains utilities for preparing post text for display in a
//! single table row.

/// Collapse every run of whitespace, newlines included, into a single space.
///
/// Post bodies carry hard line breaks which would otherwise split a table
/// cell over several lines.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shorten text to at most `max_chars` characters, ending with "..." when cut.
///
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut result: String = text.chars().take(keep).collect();
    result.push_str("...");
    result
}
