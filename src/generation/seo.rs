//! SEO metadata returned by the model

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Matches a labelled answer line, tolerating list numbering and bold markers
///
/// Captures: (1) label, (2) value
static SEO_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^\s*(?:\d+[.)]\s*)?[*_]*\s*(meta description|url slug|slug|seo keywords|keywords)\s*[*_]*\s*:\s*[*_]*\s*(.*?)\s*$",
    )
    .expect("SEO_LINE_RE: hardcoded regex is valid")
});

/// Meta description, slug and keywords for the article
///
/// The model answers in free text. `raw` always keeps that answer; the
/// structured fields are filled on a best-effort basis and stay empty when
/// a line cannot be recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetadata {
    pub raw: String,
    pub meta_description: Option<String>,
    pub slug: Option<String>,
    pub keywords: Vec<String>,
}

impl SeoMetadata {
    /// Parse the model's free-text answer
    pub fn parse(raw: &str) -> Self {
        let mut meta = SeoMetadata {
            raw: raw.trim().to_string(),
            ..Default::default()
        };

        for caps in SEO_LINE_RE.captures_iter(raw) {
            let label = caps.get(1).map_or("", |m| m.as_str()).to_ascii_lowercase();
            let value = clean_value(caps.get(2).map_or("", |m| m.as_str()));
            if value.is_empty() {
                continue;
            }

            match label.as_str() {
                "meta description" => {
                    meta.meta_description.get_or_insert(value);
                }
                "url slug" | "slug" => {
                    meta.slug.get_or_insert(value.trim_matches('/').to_string());
                }
                _ => {
                    if meta.keywords.is_empty() {
                        meta.keywords = value
                            .split(',')
                            .map(clean_value)
                            .filter(|k| !k.is_empty())
                            .collect();
                    }
                }
            }
        }

        meta
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

fn clean_value(value: &str) -> String {
    value
        .trim()
        .trim_matches(|c: char| c == '"' || c == '*' || c == '`' || c == '_')
        .trim()
        .to_string()
}
