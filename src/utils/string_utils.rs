//! UTF-8-safe string truncation utilities
//!
//! Prompt builders cut article content down before sending it to the model.
//! Articles regularly contain multi-byte characters (curly quotes, emoji,
//! accented names), so cutting on a byte offset would panic.

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// This function respects UTF-8 character boundaries and will never panic,
/// even with multi-byte characters like emoji.
///
/// # Arguments
/// * `s` - String slice to truncate
/// * `max_chars` - Maximum number of Unicode characters (not bytes)
///
/// # Returns
/// * String slice containing at most `max_chars` characters, or the full string
///   if it's shorter than `max_chars`
///
/// # Examples
/// ```
/// # use autoblogger::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("“Quoted” text", 8), "“Quoted”");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(safe_truncate_chars("abcdef", 3), "abc");
        assert_eq!(safe_truncate_chars("abc", 3), "abc");
        assert_eq!(safe_truncate_chars("", 3), "");
    }

    #[test]
    fn test_truncate_multibyte_never_splits_char() {
        let text = "🎉🎊🎈 party";
        assert_eq!(safe_truncate_chars(text, 2), "🎉🎊");
        assert_eq!(safe_truncate_chars("café au lait", 4), "café");
    }

    #[test]
    fn test_truncate_zero() {
        assert_eq!(safe_truncate_chars("anything", 0), "");
    }
}
