//! Article request inputs

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::GenerationError;

/// Persona used when the caller does not describe the writer
pub const DEFAULT_PERSONA: &str = "You are the Lead Growth Architect at 'Sharp Human'. You are an expert in AI Automation and Revenue Operations. You focus on efficiency, systems, and scaling revenue.";

/// Tone of voice for the article
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    ProfessionalCorporate,
    #[default]
    DirectBold,
    EmpatheticStorytelling,
    TechnicalEducational,
    WittyFastPaced,
}

impl Tone {
    /// Label as written into the prompt
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tone::ProfessionalCorporate => "Professional & Corporate",
            Tone::DirectBold => "Direct & Bold",
            Tone::EmpatheticStorytelling => "Empathetic & Storytelling",
            Tone::TechnicalEducational => "Technical & Educational",
            Tone::WittyFastPaced => "Witty & Fast-Paced",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the article prompt is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRequest {
    pub topic: String,
    pub persona: String,
    /// Facts, stories or products the article must mention; may be empty
    #[serde(default)]
    pub key_points: String,
    #[serde(default)]
    pub tone: Tone,
}

impl BlogRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            persona: DEFAULT_PERSONA.to_string(),
            key_points: String::new(),
            tone: Tone::default(),
        }
    }

    #[must_use]
    pub fn persona(mut self, persona: impl Into<String>) -> Self {
        let persona = persona.into();
        if !persona.trim().is_empty() {
            self.persona = persona;
        }
        self
    }

    #[must_use]
    pub fn key_points(mut self, key_points: impl Into<String>) -> Self {
        self.key_points = key_points.into();
        self
    }

    #[must_use]
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Reject requests that cannot produce an article
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyTopic`] for a blank topic.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.topic.trim().is_empty() {
            return Err(GenerationError::EmptyTopic);
        }
        Ok(())
    }
}
