//! Presentation bundle for a finished article.
//!
//! The same normalized markup is handed out twice: once to be rendered as
//! live HTML and once escaped, to be shown as literal source in a code box
//! and pasted into the CMS source editor. Nothing here normalizes again.

use html_escape::encode_text;
use serde::Serialize;

use crate::generation::SeoMetadata;
use crate::normalizer::Document;
use crate::utils::PASTE_INSTRUCTIONS;

#[derive(Debug, Clone, Serialize)]
pub struct PublishBundle {
    /// Normalized markup for the reading view
    pub live_html: String,
    /// The same markup escaped for display inside `<pre><code>`
    pub source_listing: String,
    pub paste_instructions: &'static str,
    pub seo: SeoMetadata,
}

impl PublishBundle {
    /// Build the bundle from an already normalized document
    pub fn from_document(document: &Document, seo: SeoMetadata) -> Self {
        let live_html = document.body().to_string();
        let source_listing = source_listing(&live_html);

        Self {
            live_html,
            source_listing,
            paste_instructions: PASTE_INSTRUCTIONS,
            seo,
        }
    }

    /// Plain-text report for terminals: markup first, then SEO data
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.live_html.len() + self.seo.raw.len() + 64);
        out.push_str(&self.live_html);
        out.push('\n');

        if !self.seo.is_empty() {
            out.push_str("\n--- SEO ---\n");
            if let Some(description) = &self.seo.meta_description {
                out.push_str(&format!("Meta Description: {description}\n"));
            }
            if let Some(slug) = &self.seo.slug {
                out.push_str(&format!("URL Slug: {slug}\n"));
            }
            if !self.seo.keywords.is_empty() {
                out.push_str(&format!("SEO Keywords: {}\n", self.seo.keywords.join(", ")));
            }
            if self.seo.meta_description.is_none() && self.seo.slug.is_none() {
                out.push_str(&self.seo.raw);
                out.push('\n');
            }
        }
        out
    }
}

/// Escape markup so it displays as source text instead of rendering
pub fn source_listing(markup: &str) -> String {
    encode_text(markup).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_listing_escapes_markup() {
        assert_eq!(
            source_listing(r#"<p class="x">a & b</p>"#),
            r#"&lt;p class="x"&gt;a &amp; b&lt;/p&gt;"#
        );
    }

    #[test]
    fn test_bundle_keeps_live_html_verbatim() {
        let doc = Document::new("<div>\n<h2>T</h2>\n</div>");
        let bundle = PublishBundle::from_document(&doc, SeoMetadata::default());

        assert_eq!(bundle.live_html, doc.body());
        assert!(bundle.source_listing.starts_with("&lt;div&gt;"));
        assert!(bundle.paste_instructions.contains("Paste"));
    }

    #[test]
    fn test_text_report_includes_seo_fields() {
        let doc = Document::new("<div>\nbody\n</div>");
        let seo = SeoMetadata::parse("Meta Description: d\nURL Slug: s\nSEO Keywords: a, b");
        let text = PublishBundle::from_document(&doc, seo).to_text();

        assert!(text.starts_with("<div>\nbody\n</div>\n"));
        assert!(text.contains("URL Slug: s\n"));
        assert!(text.contains("SEO Keywords: a, b\n"));
    }

    #[test]
    fn test_text_report_without_seo() {
        let doc = Document::new("x");
        let text = PublishBundle::from_document(&doc, SeoMetadata::default()).to_text();
        assert_eq!(text, "x\n");
    }
}
