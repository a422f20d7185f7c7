//! Style container wrapping and unwrapping.
//!
//! The wrapper is a fixed open/close markup pair that gives the article its
//! visual container. Matching is plain substring matching at the trimmed
//! boundaries of the text, never structural.

use serde::{Deserialize, Serialize};

/// Open/close markup pair surrounding a normalized document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapper {
    pub open: String,
    pub close: String,
}

impl Wrapper {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// See [`wrap`]
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        wrap(text, &self.open, &self.close)
    }

    /// See [`unwrap`]
    #[must_use]
    pub fn unwrap(&self, text: &str) -> String {
        unwrap(text, &self.open, &self.close)
    }

    /// See [`is_wrapped`]
    #[must_use]
    pub fn is_wrapped(&self, text: &str) -> bool {
        is_wrapped(text, &self.open, &self.close)
    }
}

/// Concatenate `open`, a newline, `text`, a newline and `close`.
///
/// `text` is expected to be fence-stripped and unwrapped already; this
/// function does no detection of its own.
///
/// # Examples
///
/// ```rust
/// # use autoblogger::normalizer::wrap;
/// assert_eq!(wrap("<p>x</p>", "<div>", "</div>"), "<div>\n<p>x</p>\n</div>");
/// ```
pub fn wrap(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(open.len() + text.len() + close.len() + 2);
    out.push_str(open);
    out.push('\n');
    out.push_str(text);
    out.push('\n');
    out.push_str(close);
    out
}

/// Remove at most one leading `open` and at most one trailing `close`.
///
/// Both markers are trimmed before matching and compared as exact
/// substrings against the trimmed text. The two boundaries are handled
/// independently, so a half wrapper (an answer that echoes the open marker
/// but was cut off before the close) is still removed. Occurrences anywhere
/// other than the very start or very end are never touched.
///
/// When a marker was removed the remaining body is trimmed. When neither
/// boundary carries a marker, `text` is returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use autoblogger::normalizer::unwrap;
/// assert_eq!(unwrap("<div>\n<p>x</p>\n</div>", "<div>", "</div>"), "<p>x</p>");
/// assert_eq!(unwrap("<div>\n<p>cut off", "<div>", "</div>"), "<p>cut off");
/// assert_eq!(unwrap(" <p>x</p>\n", "<div>", "</div>"), " <p>x</p>\n");
/// ```
pub fn unwrap(text: &str, open: &str, close: &str) -> String {
    let open = open.trim();
    let close = close.trim();
    let body = text.trim();

    let (body, had_open) = match body.strip_prefix(open) {
        Some(rest) if !open.is_empty() => (rest, true),
        _ => (body, false),
    };
    let (body, had_close) = match body.strip_suffix(close) {
        Some(rest) if !close.is_empty() => (rest, true),
        _ => (body, false),
    };

    if !had_open && !had_close {
        return text.to_string();
    }

    if had_open != had_close {
        tracing::debug!(
            "Removed half wrapper (open: {}, close: {})",
            had_open,
            had_close
        );
    }
    body.trim().to_string()
}

/// True when the trimmed text starts with the trimmed `open` marker and
/// ends with the trimmed `close` marker.
///
/// A text consisting of a single marker that serves as both ends (for
/// example `<hr>` with `open == close == "<hr>"`) does not count: each
/// marker must own its own bytes.
pub fn is_wrapped(text: &str, open: &str, close: &str) -> bool {
    let open = open.trim();
    let close = close.trim();
    let body = text.trim();

    body.len() >= open.len() + close.len() && body.starts_with(open) && body.ends_with(close)
}
