//! Loading configuration from JSON files and the environment

use anyhow::{Context, Result};
use std::path::Path;

use super::builder::validate_config;
use super::types::{ModelConfig, NormalizerConfig};
use crate::utils::{API_KEY_ENV, ENDPOINT_ENV, TIMEOUT_ENV};

impl NormalizerConfig {
    /// Parse and validate a JSON configuration
    ///
    /// ```json
    /// {
    ///   "wrapper": { "open": "<div class=\"card\">", "close": "</div>" },
    ///   "styles": {
    ///     "tags": { "h2": "color: #102a43;" },
    ///     "callout": { "marker": "<div class=\"key-takeaways\">", "style": "padding: 20px;" }
    ///   }
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or a configuration that fails
    /// validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: NormalizerConfig =
            serde_json::from_str(json).context("Failed to parse normalizer config JSON")?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is rejected
    /// by [`NormalizerConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = Self::from_json_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!("Loaded normalizer config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise the blog preset
    ///
    /// # Errors
    ///
    /// See [`NormalizerConfig::from_json_file`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }
}

impl ModelConfig {
    /// Defaults overridden by `OPENAI_API_KEY`, `AUTOBLOGGER_ENDPOINT` and
    /// `AUTOBLOGGER_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout variable is not a positive integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ModelConfig::from_env`] with an explicit variable source
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout variable is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(key) = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
            config.api_key = Some(key.trim().to_string());
        }

        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_ENV} must be a number of seconds, got '{raw}'"))?;
            anyhow::ensure!(secs > 0, "{TIMEOUT_ENV} must be greater than zero");
            config.timeout_secs = secs;
        }

        Ok(config)
    }
}
