// src/util/text.rs
use crate::constants::RUN_ID_PREFIX_LEN;

/// First `n` characters of `s`, or all of it when shorter.
///
/// Counts characters, not bytes, so multi-byte input never splits a code point.
///
/// # Examples
///
/// ```
/// use runboard::util::text::prefix_chars;
///
/// assert_eq!(prefix_chars("abcdef1234", 6), "abcdef");
/// assert_eq!(prefix_chars("ab", 6), "ab");
/// ```
pub fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Display form of a run identifier. Cosmetic only: never use as a key.
pub fn short_id(id: &str) -> &str {
    prefix_chars(id, RUN_ID_PREFIX_LEN)
}

/// Extract the first non-empty line of plain text, trimmed.
pub fn first_line(text: &str) -> &str {
    text.lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Upper-cased initials from a first and optional last name
pub fn initials(first: &str, last: Option<&str>) -> String {
    [Some(first), last]
        .into_iter()
        .flatten()
        .filter_map(|name| name.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
