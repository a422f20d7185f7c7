//! Type-safe builder for `NormalizerConfig` using the typestate pattern
//!
//! A wrapper pair is mandatory; `build()` only exists once it has been set.

use crate::normalizer::{StyleTable, Wrapper};
use crate::utils::FENCE_MARKER;
use anyhow::{Context, Result, bail};
use std::marker::PhantomData;

use super::types::NormalizerConfig;

// Type states for the builder
pub struct WithWrapper;

pub struct NormalizerConfigBuilder<State = ()> {
    pub(crate) wrapper: Option<Wrapper>,
    pub(crate) styles: StyleTable,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for NormalizerConfigBuilder<()> {
    fn default() -> Self {
        Self {
            wrapper: None,
            styles: StyleTable::new(),
            _phantom: PhantomData,
        }
    }
}

impl NormalizerConfig {
    /// Create a builder for configuring a `NormalizerConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> NormalizerConfigBuilder<()> {
        NormalizerConfigBuilder::default()
    }
}

impl NormalizerConfigBuilder<()> {
    pub fn wrapper(
        self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> NormalizerConfigBuilder<WithWrapper> {
        NormalizerConfigBuilder {
            wrapper: Some(Wrapper::new(open, close)),
            styles: self.styles,
            _phantom: PhantomData,
        }
    }
}

impl NormalizerConfigBuilder<WithWrapper> {
    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// See [`validate_config`].
    pub fn build(self) -> Result<NormalizerConfig> {
        let Some(wrapper) = self.wrapper else {
            bail!("Wrapper is required");
        };

        let config = NormalizerConfig {
            wrapper,
            styles: self.styles,
        };
        validate_config(&config)?;
        Ok(config)
    }
}

/// Check the invariants `NormalizerConfig` promises
///
/// # Errors
///
/// - the trimmed open marker is empty
/// - either marker contains a fence marker (fence stripping would eat part
///   of the wrapper and the next turn would nest a second container)
/// - the style table is invalid (see [`StyleTable::validate`])
pub fn validate_config(config: &NormalizerConfig) -> Result<()> {
    let wrapper = &config.wrapper;

    if wrapper.open.trim().is_empty() {
        bail!("Wrapper open marker must not be empty");
    }
    if wrapper.open.contains(FENCE_MARKER) || wrapper.close.contains(FENCE_MARKER) {
        bail!("Wrapper markers must not contain a code fence marker");
    }

    config
        .styles
        .validate()
        .context("Invalid style table")?;

    Ok(())
}
