//! Configuration module
//!
//! This module provides `NormalizerConfig` with its type-safe builder and
//! JSON loader, plus `ModelConfig` for the completion endpoint.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod loader;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{NormalizerConfigBuilder, WithWrapper, validate_config};
pub use types::{ModelConfig, NormalizerConfig};
