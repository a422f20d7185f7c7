//! Markdown code fence stripping.
//!
//! Models asked for raw HTML still tend to answer inside a fenced block
//! (` ```html ... ``` `). Fences are removed wherever they appear; the
//! surrounding markup is kept byte for byte.

use crate::utils::FENCE_MARKER;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches a fence marker and an optional language tag glued to it
///
/// Captures: (1) the language tag, possibly empty
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```([A-Za-z0-9_+\-]*)").expect("FENCE_RE: hardcoded regex is valid")
});

/// Remove every markdown fence marker from `text` and trim the result.
///
/// Both the opening form (three backticks followed by an optional language
/// tag such as `html`) and the bare closing form are removed. A language tag
/// is only treated as part of the fence when it is followed by whitespace,
/// a tag opener or the end of input; otherwise the letters belong to the
/// content (`` ```Thanks `` keeps `Thanks`).
///
/// The pass is repeated while a marker remains; every pass strictly
/// shortens the text.
///
/// # Examples
///
/// ```rust
/// # use autoblogger::normalizer::strip_fences;
/// assert_eq!(strip_fences("```html\n<h2>Title</h2>\n```"), "<h2>Title</h2>");
/// assert_eq!(strip_fences("<p>plain</p>"), "<p>plain</p>");
/// ```
pub fn strip_fences(text: &str) -> String {
    let mut current = text.to_string();
    let mut passes = 0usize;

    while current.contains(FENCE_MARKER) {
        current = strip_fence_pass(&current);
        passes += 1;
    }

    if passes > 1 {
        tracing::debug!("Fence stripping needed {} passes", passes);
    }

    current.trim().to_string()
}

fn strip_fence_pass(text: &str) -> String {
    FENCE_RE
        .replace_all(text, |caps: &Captures| {
            let tag = caps.get(1).map_or("", |m| m.as_str());
            if tag.is_empty() {
                return String::new();
            }

            let end = caps.get(0).map_or(text.len(), |m| m.end());
            match text[end..].chars().next() {
                None => String::new(),
                Some(c) if c.is_whitespace() || c == '<' => String::new(),
                // Letters glued to the marker are content, not a language tag
                Some(_) => tag.to_string(),
            }
        })
        .into_owned()
}

/// Count the fence markers left in `text`
///
/// Used by callers that want to log how much cleanup a model answer needed.
pub fn count_fences(text: &str) -> usize {
    text.matches(FENCE_MARKER).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_fenced_block() {
        let raw = "```html\n<h1>Title</h1>\n<p>Body</p>\n```";
        assert_eq!(strip_fences(raw), "<h1>Title</h1>\n<p>Body</p>");
    }

    #[test]
    fn test_strip_bare_fences() {
        let raw = "```\n<p>Body</p>\n```";
        assert_eq!(strip_fences(raw), "<p>Body</p>");
    }

    #[test]
    fn test_strip_multiple_blocks() {
        let raw = "Intro\n```html\n<p>a</p>\n```\nmiddle\n```css\nb\n```";
        let result = strip_fences(raw);
        assert!(!result.contains("```"));
        assert_eq!(result, "Intro\n\n<p>a</p>\n\nmiddle\n\nb");
    }

    #[test]
    fn test_no_fences_is_noop_besides_trim() {
        assert_eq!(strip_fences("  <p>x</p>\n"), "<p>x</p>");
        assert_eq!(strip_fences(""), "");
    }

    #[test]
    fn test_tag_glued_to_markup() {
        assert_eq!(strip_fences("```html<h2>T</h2>```"), "<h2>T</h2>");
    }

    #[test]
    fn test_letters_after_closing_fence_are_kept() {
        assert_eq!(strip_fences("<p>a</p>```Thanks!"), "<p>a</p>Thanks!");
    }

    #[test]
    fn test_mixed_backtick_runs_leave_no_marker() {
        let raw = "`````html\n`` ```` <p>x</p> ```````";
        let result = strip_fences(raw);
        assert_eq!(count_fences(&result), 0);
        assert!(result.contains("<p>x</p>"));
    }

    #[test]
    fn test_long_backtick_runs() {
        assert_eq!(strip_fences("``````"), "");
        assert_eq!(strip_fences("````"), "`");
    }

    #[test]
    fn test_inline_code_backticks_survive() {
        assert_eq!(strip_fences("<p>Use `cargo` here</p>"), "<p>Use `cargo` here</p>");
    }
}
