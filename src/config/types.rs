//! Core configuration types
//!
//! `NormalizerConfig` carries the constants every normalization call shares
//! read-only: the wrapper pair and the style table. `ModelConfig` describes
//! the completion endpoint used by the generation step.

use crate::normalizer::{CalloutStyle, StyleTable, Wrapper};
use crate::utils::{
    DEFAULT_ARTICLE_MODEL, DEFAULT_CALLOUT_MARKER, DEFAULT_CALLOUT_STYLE, DEFAULT_ENDPOINT,
    DEFAULT_SEO_MODEL, DEFAULT_TIMEOUT_SECS, DEFAULT_WRAPPER_CLOSE, DEFAULT_WRAPPER_OPEN,
};
use serde::{Deserialize, Serialize};

/// Wrapper and inline-style settings for the normalizer
///
/// **INVARIANT:** a value obtained from the builder or the loaders has been
/// validated: the open marker is non-empty, neither marker contains a fence
/// marker, and the style table passes [`StyleTable::validate`]. Those rules
/// are what keep normalization idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    pub(crate) wrapper: Wrapper,
    #[serde(default)]
    pub(crate) styles: StyleTable,
}

impl Default for NormalizerConfig {
    /// Blog preset: article card, typographic styles for the tags the
    /// article prompt asks for, and the "Key Takeaways" callout box.
    fn default() -> Self {
        let styles = StyleTable::new()
            .with_tag(
                "h1",
                "font-size: 2.2em; line-height: 1.2; margin: 0 0 0.6em; color: #102a43;",
            )
            .with_tag(
                "h2",
                "font-size: 1.6em; margin: 1.6em 0 0.6em; color: #102a43; border-bottom: 2px solid #e4e7eb; padding-bottom: 0.3em;",
            )
            .with_tag("h3", "font-size: 1.25em; margin: 1.3em 0 0.5em; color: #243b53;")
            .with_tag("p", "margin: 0 0 1.1em;")
            .with_tag("ul", "margin: 0 0 1.1em; padding-left: 1.4em;")
            .with_tag("li", "margin-bottom: 0.4em;")
            .with_tag("strong", "color: #102a43;")
            .with_tag("a", "color: #007bff; text-decoration: underline;")
            .with_callout(CalloutStyle::new(
                DEFAULT_CALLOUT_MARKER,
                DEFAULT_CALLOUT_STYLE,
            ));

        Self {
            wrapper: Wrapper::new(DEFAULT_WRAPPER_OPEN, DEFAULT_WRAPPER_CLOSE),
            styles,
        }
    }
}

/// Completion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Base URL of an OpenAI-compatible API (no trailing `/v1`)
    pub endpoint: String,
    /// Model used to draft and refine articles
    pub article_model: String,
    /// Model used for SEO metadata
    pub seo_model: String,
    /// Bearer token; never serialized
    #[serde(skip)]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            article_model: DEFAULT_ARTICLE_MODEL.to_string(),
            seo_model: DEFAULT_SEO_MODEL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
