//! Tests for the type-safe configuration builder and the loaders

use autoblogger::config::{ModelConfig, NormalizerConfig};
use autoblogger::normalizer::StyleTable;
use std::io::Write;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_builder_requires_wrapper() {
    // This should not compile if uncommented - build() needs a wrapper
    // let config = NormalizerConfig::builder().build();

    let config = NormalizerConfig::builder()
        .wrapper(common::OPEN, common::CLOSE)
        .build()
        .unwrap();

    assert_eq!(config.wrapper_open(), common::OPEN);
    assert_eq!(config.wrapper_close(), common::CLOSE);
    assert!(config.styles().is_empty());
    assert_eq!(config.callout_marker(), None);
}

#[test]
fn test_builder_methods_work_in_any_state() {
    // Style methods can come before the wrapper is set
    let config = NormalizerConfig::builder()
        .tag_style("H2", "color:red;")
        .key_takeaways_callout()
        .wrapper("<section>", "</section>")
        .tag_style("p", "margin: 0;")
        .build()
        .unwrap();

    assert_eq!(config.styles().style_for("h2"), Some("color:red;"));
    assert_eq!(config.styles().style_for("p"), Some("margin: 0;"));
    assert_eq!(
        config.callout_marker(),
        Some(r#"<div class="key-takeaways">"#)
    );
}

#[test]
fn test_builder_blog_styles_and_without_callout() {
    let config = NormalizerConfig::builder()
        .wrapper(common::OPEN, common::CLOSE)
        .blog_styles()
        .without_callout()
        .build()
        .unwrap();

    assert!(config.styles().style_for("h2").is_some());
    assert_eq!(config.callout_marker(), None);
}

#[test]
fn test_builder_rejects_empty_open_marker() {
    let err = NormalizerConfig::builder()
        .wrapper("   ", "</div>")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("open marker"));
}

#[test]
fn test_builder_rejects_fence_in_wrapper() {
    let result = NormalizerConfig::builder()
        .wrapper("<div>```", "</div>")
        .build();
    assert!(result.is_err());

    let result = NormalizerConfig::builder()
        .wrapper("<div>", "```</div>")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_builder_rejects_unsafe_styles() {
    let quoted = NormalizerConfig::builder()
        .wrapper(common::OPEN, common::CLOSE)
        .tag_style("p", r#"font-family: "Serif";"#)
        .build();
    assert!(quoted.is_err());

    let bad_name = NormalizerConfig::builder()
        .wrapper(common::OPEN, common::CLOSE)
        .styles(StyleTable::new().with_tag("h 2", "x:y;"))
        .build();
    assert!(bad_name.is_err());
}

#[test]
fn test_builder_rejects_styled_callout_marker() {
    let err = NormalizerConfig::builder()
        .wrapper(common::OPEN, common::CLOSE)
        .callout(r#"<div style="a:b;">"#, "padding: 1em;")
        .build()
        .unwrap_err();
    assert!(format!("{err:#}").contains("style attribute"));

    let not_a_tag = NormalizerConfig::builder()
        .wrapper(common::OPEN, common::CLOSE)
        .callout("KEY TAKEAWAYS", "padding: 1em;")
        .build();
    assert!(not_a_tag.is_err());
}

#[test]
fn test_default_preset_is_valid() {
    let config = NormalizerConfig::default();
    autoblogger::config::validate_config(&config).unwrap();

    assert!(config.wrapper_open().starts_with("<div"));
    assert_eq!(config.wrapper_close(), "</div>");
    assert!(config.callout_marker().is_some());
}

#[test]
fn test_from_json_str_lowercases_tags() {
    let json = r#"{
        "wrapper": { "open": "<article>", "close": "</article>" },
        "styles": {
            "tags": { "H2": "color: navy;" },
            "callout": { "marker": "<div class=\"tip\">", "style": "padding: 8px;" }
        }
    }"#;
    let config = NormalizerConfig::from_json_str(json).unwrap();

    assert_eq!(config.wrapper_open(), "<article>");
    assert_eq!(config.styles().style_for("h2"), Some("color: navy;"));
    assert_eq!(config.callout_marker(), Some(r#"<div class="tip">"#));
    assert_eq!(
        config.styles().callout.as_ref().map(|c| c.tag.as_str()),
        Some("div")
    );
}

#[test]
fn test_from_json_str_styles_optional() {
    let config =
        NormalizerConfig::from_json_str(r#"{"wrapper": {"open": "<main>", "close": "</main>"}}"#)
            .unwrap();
    assert!(config.styles().is_empty());
}

#[test]
fn test_from_json_str_rejects_invalid() {
    assert!(NormalizerConfig::from_json_str("not json").is_err());
    assert!(NormalizerConfig::from_json_str(r#"{"styles": {}}"#).is_err());
    assert!(
        NormalizerConfig::from_json_str(r#"{"wrapper": {"open": "", "close": "</x>"}}"#).is_err()
    );
}

#[test]
fn test_from_json_file_roundtrip() {
    let original = NormalizerConfig::builder()
        .wrapper(common::OPEN, common::CLOSE)
        .tag_style("h2", "color:red;")
        .key_takeaways_callout()
        .build()
        .unwrap();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&original).unwrap().as_bytes())
        .unwrap();

    let loaded = NormalizerConfig::from_json_file(file.path()).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_from_json_file_reports_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ broken").unwrap();

    let err = NormalizerConfig::from_json_file(file.path()).unwrap_err();
    assert!(err.to_string().contains(&file.path().display().to_string()));

    let missing = NormalizerConfig::from_json_file("/nonexistent/autoblogger.json");
    assert!(missing.is_err());
}

#[test]
fn test_load_or_default() {
    let config = NormalizerConfig::load_or_default(None).unwrap();
    assert_eq!(config, NormalizerConfig::default());
}

#[test]
fn test_model_config_defaults() {
    let config = ModelConfig::from_lookup(|_| None).unwrap();

    assert!(!config.has_api_key());
    assert_eq!(config.article_model, "gpt-4o");
    assert_eq!(config.seo_model, "gpt-4o-mini");
    assert!(config.chat_completions_url().ends_with("/v1/chat/completions"));
}

#[test]
fn test_model_config_from_lookup() {
    let config = ModelConfig::from_lookup(|name| match name {
        "OPENAI_API_KEY" => Some(" sk-test ".to_string()),
        "AUTOBLOGGER_ENDPOINT" => Some("http://localhost:8080/".to_string()),
        "AUTOBLOGGER_TIMEOUT_SECS" => Some("30".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    assert_eq!(
        config.chat_completions_url(),
        "http://localhost:8080/v1/chat/completions"
    );
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_model_config_blank_key_is_missing() {
    let config = ModelConfig::from_lookup(|name| {
        (name == "OPENAI_API_KEY").then(|| "   ".to_string())
    })
    .unwrap();
    assert!(!config.has_api_key());
}

#[test]
fn test_model_config_rejects_bad_timeout() {
    let not_a_number = ModelConfig::from_lookup(|name| {
        (name == "AUTOBLOGGER_TIMEOUT_SECS").then(|| "soon".to_string())
    });
    assert!(not_a_number.is_err());

    let zero = ModelConfig::from_lookup(|name| {
        (name == "AUTOBLOGGER_TIMEOUT_SECS").then(|| "0".to_string())
    });
    assert!(zero.is_err());
}

#[test]
fn test_model_config_never_serializes_key() {
    let config = common::model_config("http://localhost", Some("sk-secret"));
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("sk-secret"));
}
