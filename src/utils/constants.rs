//! Shared configuration constants for autoblogger
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Literal fence delimiter used by language models to denote a code block
pub const FENCE_MARKER: &str = "```";

/// Prefix of the sentinel text substituted for a document body when a
/// generation step fails.
///
/// The full sentinel reads `Error: <cause>` and is normalized like any other
/// text so the failure shows up inside the rendered container.
pub const ERROR_SENTINEL_PREFIX: &str = "Error: ";

/// Default container the article is wrapped in
pub const DEFAULT_WRAPPER_OPEN: &str = r#"<div class="autoblog-article" style="max-width: 760px; margin: 0 auto; font-family: Georgia, 'Times New Roman', serif; line-height: 1.7; color: #1f2933;">"#;

/// Closing fragment matching [`DEFAULT_WRAPPER_OPEN`]
pub const DEFAULT_WRAPPER_CLOSE: &str = "</div>";

/// Placeholder the model is asked to emit for the "Key Takeaways" box
pub const DEFAULT_CALLOUT_MARKER: &str = r#"<div class="key-takeaways">"#;

/// Style of the "Key Takeaways" box
pub const DEFAULT_CALLOUT_STYLE: &str =
    "background-color: #f0f4f8; padding: 20px; border-left: 5px solid #007bff; margin-bottom: 20px;";

/// Characters of article content sent along with the SEO prompt
///
/// Keeps the metadata request small; the opening of an article carries
/// the title, the takeaways box and the first sections.
pub const SEO_CONTENT_CHAR_LIMIT: usize = 3000;

/// Upper bound for the meta description requested from the model
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// Number of SEO keywords requested from the model
pub const SEO_KEYWORD_COUNT: usize = 5;

/// Default OpenAI-compatible API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Model used to draft and refine articles
pub const DEFAULT_ARTICLE_MODEL: &str = "gpt-4o";

/// Cheaper model used for SEO metadata
pub const DEFAULT_SEO_MODEL: &str = "gpt-4o-mini";

/// Default request timeout: 120 seconds
///
/// Long-form completions of ~1000 words routinely take 30-60 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding [`DEFAULT_ENDPOINT`]
pub const ENDPOINT_ENV: &str = "AUTOBLOGGER_ENDPOINT";

/// Environment variable overriding [`DEFAULT_TIMEOUT_SECS`]
pub const TIMEOUT_ENV: &str = "AUTOBLOGGER_TIMEOUT_SECS";

/// Steps shown next to the copyable source for pasting into the CMS editor
pub const PASTE_INSTRUCTIONS: &str =
    "Step 1: Copy this code. Step 2: In the blog editor, click the `< >` (source) icon. Step 3: Paste.";
