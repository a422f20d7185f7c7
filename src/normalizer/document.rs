//! The article document value owned by the caller.

use super::pipeline::Normalizer;
use super::wrapper::Wrapper;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current markup of an article.
///
/// Created raw by the generation step and rewritten by the normalizer.
/// Wrapping is all-or-nothing: a document is either raw or carries exactly
/// one wrapper pair after [`Document::normalize_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    body: String,
}

impl Document {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Whether the body currently starts and ends with the wrapper markers
    #[must_use]
    pub fn is_wrapped(&self, wrapper: &Wrapper) -> bool {
        wrapper.is_wrapped(&self.body)
    }

    /// Body with any wrapper and fences removed, for handing to an editor
    #[must_use]
    pub fn editable_body(&self, normalizer: &Normalizer) -> String {
        normalizer.body_of(&self.body)
    }

    /// Re-render the body in place. Safe to call on every turn.
    pub fn normalize_with(&mut self, normalizer: &Normalizer) {
        self.body = normalizer.render(&self.body);
    }

    /// Replace the body with fresh raw content and render it
    pub fn replace_with(&mut self, raw: &str, normalizer: &Normalizer) {
        self.body = normalizer.render(raw);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

impl From<String> for Document {
    fn from(body: String) -> Self {
        Self { body }
    }
}

impl From<&str> for Document {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}
