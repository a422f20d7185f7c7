//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use crate::normalizer::{CalloutStyle, StyleTable};
use crate::utils::{DEFAULT_CALLOUT_MARKER, DEFAULT_CALLOUT_STYLE};

use super::builder::NormalizerConfigBuilder;
use super::types::NormalizerConfig;

impl<State> NormalizerConfigBuilder<State> {
    /// Set the inline style for one tag, replacing any earlier value
    ///
    /// Tag names are matched case-insensitively and stored lowercase.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use autoblogger::config::NormalizerConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = NormalizerConfig::builder()
    ///     .wrapper("<div class=card>", "</div>")
    ///     .tag_style("h2", "color:red;")
    ///     .build()?;
    /// assert_eq!(config.styles().style_for("H2"), Some("color:red;"));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn tag_style(mut self, tag: &str, style: impl Into<String>) -> Self {
        self.styles = self.styles.with_tag(tag, style);
        self
    }

    /// Replace a placeholder opening tag with a styled container
    #[must_use]
    pub fn callout(mut self, marker: impl Into<String>, style: impl Into<String>) -> Self {
        self.styles = self.styles.with_callout(CalloutStyle::new(marker, style));
        self
    }

    /// The "Key Takeaways" callout used by the article prompt
    #[must_use]
    pub fn key_takeaways_callout(self) -> Self {
        self.callout(DEFAULT_CALLOUT_MARKER, DEFAULT_CALLOUT_STYLE)
    }

    #[must_use]
    pub fn without_callout(mut self) -> Self {
        self.styles.callout = None;
        self
    }

    /// Replace the whole style table
    #[must_use]
    pub fn styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Start from the blog preset's style table
    #[must_use]
    pub fn blog_styles(mut self) -> Self {
        self.styles = NormalizerConfig::default().styles;
        self
    }
}
