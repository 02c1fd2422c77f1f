//! Line classification for environment files.
//!
//! Responsibilities:
//! - Decide whether a line is blank, a comment, malformed or an entry.
//! - Split entries at the first delimiter and trim both sides.
//!
//! Does NOT handle:
//! - Reading files or applying overrides (see builder.rs).
//!
//! Invariants:
//! - The comment test uses the raw line: only a `#` in the first column starts a comment.
//! - Everything after the first `=` belongs to the value.

use crate::constants::{COMMENT_PREFIX, KEY_VALUE_DELIMITER};

/// Classification of one line of an environment file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Empty line.
    Blank,
    /// Line whose first character is `#`.
    Comment,
    /// Non-empty line without a `=` delimiter, including whitespace-only lines.
    Malformed,
    /// A trimmed key/value pair.
    Entry { key: &'a str, value: &'a str },
}

/// Classify a single line, with its line terminator already removed.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    if line.is_empty() {
        return ParsedLine::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return ParsedLine::Comment;
    }
    match line.split_once(KEY_VALUE_DELIMITER) {
        Some((key, value)) => ParsedLine::Entry {
            key: key.trim(),
            value: value.trim(),
        },
        None => ParsedLine::Malformed,
    }
}
