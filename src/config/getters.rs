//! Getter methods for the configuration types

use crate::normalizer::{StyleTable, Wrapper};

use super::types::{ModelConfig, NormalizerConfig};

impl NormalizerConfig {
    #[must_use]
    pub fn wrapper(&self) -> &Wrapper {
        &self.wrapper
    }

    #[must_use]
    pub fn wrapper_open(&self) -> &str {
        &self.wrapper.open
    }

    #[must_use]
    pub fn wrapper_close(&self) -> &str {
        &self.wrapper.close
    }

    #[must_use]
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Marker the article prompt should use to open the callout box, if any
    #[must_use]
    pub fn callout_marker(&self) -> Option<&str> {
        self.styles
            .callout
            .as_ref()
            .map(|callout| callout.marker.trim())
    }
}

impl ModelConfig {
    #[must_use]
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}
