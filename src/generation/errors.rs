//! Error types for the generation step
//!
//! These never cross the normalizer boundary: the writer turns them into an
//! `Error: <cause>` sentinel body (or empty SEO metadata) before returning.

/// Failures talking to the completion endpoint
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    /// The request has no topic to write about
    #[error("A blog topic is required")]
    EmptyTopic,

    /// No API key was configured for the endpoint
    #[error("Missing API key (set OPENAI_API_KEY)")]
    MissingApiKey,

    /// Connection or transport failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Endpoint answered with a non-success status
    #[error("HTTP {status} from completion endpoint: {body}")]
    Status { status: u16, body: String },

    /// No response within the configured timeout
    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    /// Response body was not the expected JSON shape
    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    /// Response had no message content
    #[error("Model returned an empty response")]
    EmptyResponse,
}

impl GenerationError {
    /// Sentinel body shown in place of an article when generation fails
    #[must_use]
    pub fn to_sentinel(&self) -> String {
        format!("{}{}", crate::utils::ERROR_SENTINEL_PREFIX, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_format() {
        assert_eq!(
            GenerationError::Timeout(30).to_sentinel(),
            "Error: Request timeout after 30 seconds"
        );
        assert_eq!(
            GenerationError::Status {
                status: 429,
                body: "slow down".to_string()
            }
            .to_sentinel(),
            "Error: HTTP 429 from completion endpoint: slow down"
        );
    }
}
