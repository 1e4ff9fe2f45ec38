//! Word-delimited prefixes
//!
//! Names are split into "words" on any character that is not a letter or
//! digit. Letters cover ASCII plus the accented Latin range
//! (Latin-1 Supplement through Latin Extended-A, U+00C0..=U+017F).

/// First and last code point of the accented Latin letter range.
const LATIN_ACCENTED: std::ops::RangeInclusive<char> = '\u{00C0}'..='\u{017F}';

/// Whether `c` belongs to a word rather than separating words.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LATIN_ACCENTED.contains(&c)
}

/// Prefix of `s` up to (not including) its `level + 1`-th delimiter.
///
/// Returns `s` unchanged when it has `level` delimiters or fewer.
///
/// # Example
/// ```
/// use groop::prefix_delimited;
///
/// assert_eq!(prefix_delimited("agent_metrics_ha", 0), "agent");
/// assert_eq!(prefix_delimited("agent_metrics_ha", 1), "agent_metrics");
/// assert_eq!(prefix_delimited("agent_metrics_ha", 7), "agent_metrics_ha");
/// ```
pub fn prefix_delimited(s: &str, level: usize) -> &str {
    s.char_indices()
        .filter(|(_, c)| !is_word_char(*c))
        .nth(level)
        .map_or(s, |(idx, _)| &s[..idx])
}
