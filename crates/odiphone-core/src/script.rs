//! Character-level classification for Odia input and Romanized keys.

/// Check the full Oriya block (U+0B00..U+0B7F). Unassigned points in the
/// block pass this check but match no table entry, so they are dropped later.
pub fn is_odia(c: char) -> bool {
    ('\u{0B00}'..='\u{0B7F}').contains(&c)
}

/// Remove every character outside the Oriya block.
pub fn strip_non_odia(s: &str) -> String {
    s.chars().filter(|&c| is_odia(c)).collect()
}

/// Characters allowed in an output key: `A-Z` and `0-9`.
pub fn is_key_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

pub fn retain_key_chars(s: &str) -> String {
    s.chars().filter(|&c| is_key_char(c)).collect()
}

/// Check that every char of a non-empty string is in the Oriya block.
pub fn is_odia_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_odia)
}
