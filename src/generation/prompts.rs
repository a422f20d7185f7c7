//! Prompt builders for drafting, SEO metadata and refine turns

use crate::config::NormalizerConfig;
use crate::utils::{
    META_DESCRIPTION_MAX_CHARS, SEO_CONTENT_CHAR_LIMIT, SEO_KEYWORD_COUNT, safe_truncate_chars,
};

use super::request::BlogRequest;

/// Build the article drafting prompt.
///
/// The model is asked for bare structural tags only; presentation is added
/// afterwards by style injection. When the config defines a callout marker,
/// the "Key Takeaways" box is requested with exactly that opening tag so
/// the injector can find it.
pub fn build_article_prompt(request: &BlogRequest, config: &NormalizerConfig) -> String {
    let key_points = if request.key_points.trim().is_empty() {
        "None specified. Use your own expertise."
    } else {
        request.key_points.trim()
    };

    let takeaways_rule = match config.callout_marker() {
        Some(marker) => format!(
            "Start with a \"Key Takeaways\" box: open it with exactly {marker} and close it with </div>."
        ),
        None => "Start with a short \"Key Takeaways\" bullet list.".to_string(),
    };

    format!(
        r#"IDENTITY & PERSONA:
{persona}

TASK:
Write a high-value, authoritative blog post (approx 800-1000 words) about: "{topic}"

TONE: {tone}

CRITICAL DETAILS TO INCLUDE:
{key_points}

FORMATTING RULES:
1. Output strictly in HTML (use <h2>, <h3>, <p>, <ul>, <li>, <strong>). Do not add style attributes.
2. Do NOT use <html>, <head>, or <body> tags. Start directly with the content.
3. Put a catchy, SEO-friendly title in an <h1> tag at the top.
4. {takeaways_rule}
5. Use short paragraphs, bullet points, and bold text for readability.
6. Do not wrap the answer in markdown code fences.

ENDING:
Conclude with a strong Call to Action relevant to the persona described above."#,
        persona = request.persona.trim(),
        topic = request.topic.trim(),
        tone = request.tone,
    )
}

/// Build the SEO metadata prompt over the opening of the article
pub fn build_seo_prompt(content: &str) -> String {
    let excerpt = safe_truncate_chars(content, SEO_CONTENT_CHAR_LIMIT);

    format!(
        r#"Read this blog post HTML and generate:
1. A Meta Description (max {META_DESCRIPTION_MAX_CHARS} chars).
2. A URL Slug (e.g. topic-name-here).
3. {SEO_KEYWORD_COUNT} SEO Keywords.

Answer with one item per line, labelled "Meta Description:", "URL Slug:" and "SEO Keywords:" (keywords comma-separated).

BLOG CONTENT:
{excerpt}"#
    )
}

/// Build the prompt for one refine turn over an unwrapped body
pub fn build_refine_prompt(body: &str, instruction: &str) -> String {
    format!(
        r#"You are editing an existing blog post written in HTML.

EDIT INSTRUCTION:
{instruction}

RULES:
1. Return the COMPLETE revised post, not just the changed parts.
2. Keep the existing HTML structure and any style attributes unless the instruction says otherwise.
3. Do NOT use <html>, <head>, or <body> tags and do not wrap the answer in markdown code fences.

CURRENT POST:
{body}"#,
        instruction = instruction.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Tone;

    #[test]
    fn test_article_prompt_carries_request_fields() {
        let request = BlogRequest::new("Why candidates ignore spam-flagged calls")
            .key_points("- Mention A2P 10DLC compliance.")
            .tone(Tone::TechnicalEducational);
        let prompt = build_article_prompt(&request, &NormalizerConfig::default());

        assert!(prompt.contains("\"Why candidates ignore spam-flagged calls\""));
        assert!(prompt.contains("TONE: Technical & Educational"));
        assert!(prompt.contains("A2P 10DLC"));
        assert!(prompt.contains("Lead Growth Architect"));
    }

    #[test]
    fn test_article_prompt_requests_callout_marker() {
        let request = BlogRequest::new("Topic");
        let prompt = build_article_prompt(&request, &NormalizerConfig::default());
        assert!(prompt.contains(r#"open it with exactly <div class="key-takeaways">"#));
    }

    #[test]
    fn test_article_prompt_without_callout() {
        let config = NormalizerConfig::builder()
            .wrapper("<div>", "</div>")
            .build()
            .expect("valid config");
        let prompt = build_article_prompt(&BlogRequest::new("Topic"), &config);
        assert!(prompt.contains("bullet list"));
        assert!(prompt.contains("None specified"));
    }

    #[test]
    fn test_seo_prompt_truncates_content() {
        let content = "é".repeat(SEO_CONTENT_CHAR_LIMIT + 500);
        let prompt = build_seo_prompt(&content);
        assert_eq!(prompt.matches('é').count(), SEO_CONTENT_CHAR_LIMIT);
        assert!(prompt.contains("max 160 chars"));
    }

    #[test]
    fn test_refine_prompt_embeds_body() {
        let prompt = build_refine_prompt("<h2>Old</h2>", "  Make the title punchier ");
        assert!(prompt.contains("Make the title punchier\n"));
        assert!(prompt.ends_with("<h2>Old</h2>"));
    }
}
