//! Inline style injection for bare structural tags.
//!
//! CMS blog editors strip `<style>` blocks, so presentation has to travel as
//! `style` attributes on the tags themselves. The model writes plain tags
//! (`<h2>`, `<p>`, `<ul>` ...) and this pass decorates them from a fixed
//! table. A tag that already carries a `style` attribute is never touched,
//! which makes the pass a no-op on its own output.

use anyhow::{Result, bail};
use html_escape::encode_double_quoted_attribute;
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Matches an opening tag
///
/// Captures: (1) tag name, (2) attribute text including its leading whitespace
static OPENING_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z][A-Za-z0-9]*)(\s[^<>]*)?>")
        .expect("OPENING_TAG_RE: hardcoded regex is valid")
});

/// Matches an existing style attribute inside attribute text
static STYLE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s)style\s*=").expect("STYLE_ATTR_RE: hardcoded regex is valid")
});

/// Matches a quoted style attribute with its leading whitespace
static STYLE_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+style\s*=\s*(?:"[^"]*"|'[^']*')"#)
        .expect("STYLE_VALUE_RE: hardcoded regex is valid")
});

static TAG_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*$").expect("TAG_NAME_RE: hardcoded regex is valid")
});

/// Placeholder container replaced by a fully styled opening fragment
///
/// The model is told to open the "Key Takeaways" box with `marker`; the
/// injector swaps it for `<{tag} style="{style}">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutStyle {
    pub marker: String,
    #[serde(default = "default_callout_tag")]
    pub tag: String,
    pub style: String,
}

fn default_callout_tag() -> String {
    "div".to_string()
}

impl CalloutStyle {
    pub fn new(marker: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            tag: default_callout_tag(),
            style: style.into(),
        }
    }

    /// Styled opening fragment that replaces the marker
    #[must_use]
    pub fn replacement(&self) -> String {
        format!(
            r#"<{} style="{}">"#,
            self.tag,
            encode_double_quoted_attribute(&self.style)
        )
    }
}

/// Tag name -> inline style mapping plus the optional callout rule
///
/// Tag names are always stored lowercase, whether they come from
/// [`StyleTable::with_tag`] or from deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTable {
    #[serde(default, deserialize_with = "deserialize_lowercase_tags")]
    pub(crate) tags: BTreeMap<String, String>,
    #[serde(default)]
    pub callout: Option<CalloutStyle>,
}

impl StyleTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the style for `tag` (stored lowercase)
    #[must_use]
    pub fn with_tag(mut self, tag: &str, style: impl Into<String>) -> Self {
        self.tags.insert(tag.to_ascii_lowercase(), style.into());
        self
    }

    #[must_use]
    pub fn with_callout(mut self, callout: CalloutStyle) -> Self {
        self.callout = Some(callout);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.callout.is_none()
    }

    /// Styled tag names (lowercase) and their inline styles
    #[must_use]
    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    #[must_use]
    pub fn style_for(&self, tag: &str) -> Option<&str> {
        self.tags
            .get(&tag.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Check the table can be applied repeatedly without changing its output.
    ///
    /// # Errors
    ///
    /// - a tag name that is not a lowercase ASCII element name
    /// - a style containing `"`, `<`, `>` or a backtick
    /// - a callout marker that does not look like a single opening tag
    ///   (`<...>`) or that already carries a `style`
    pub fn validate(&self) -> Result<()> {
        for (tag, style) in &self.tags {
            if !TAG_NAME_RE.is_match(tag) {
                bail!("Invalid tag name '{tag}' in style table");
            }
            validate_style(tag, style)?;
        }

        if let Some(callout) = &self.callout {
            let marker = callout.marker.trim();
            if !marker.starts_with('<') || !marker.ends_with('>') {
                bail!("Callout marker '{marker}' must be a single opening tag");
            }
            if marker.to_ascii_lowercase().contains("style") {
                bail!("Callout marker '{marker}' must not carry a style attribute");
            }
            if !TAG_NAME_RE.is_match(&callout.tag) {
                bail!("Invalid callout tag name '{}'", callout.tag);
            }
            validate_style("callout", &callout.style)?;
        }

        Ok(())
    }
}

fn deserialize_lowercase_tags<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(tag, style)| (tag.to_ascii_lowercase(), style))
        .collect())
}

fn validate_style(owner: &str, style: &str) -> Result<()> {
    if style.contains(['"', '<', '>', '`']) {
        bail!("Style for '{owner}' must not contain '\"', '<', '>' or '`': {style}");
    }
    Ok(())
}

/// Decorate bare opening tags with the inline styles from `table`.
///
/// 1. Every occurrence of the callout marker is replaced by the styled
///    container fragment.
/// 2. Every opening tag whose name is in the table and which has no `style`
///    attribute gets `style="..."` inserted right after the tag name. Other
///    attributes are kept as they are.
///
/// Tags not in the table, closing tags and already styled tags are left
/// untouched. Self-closing tags written without a space (`<br/>`) are not
/// recognized as opening tags.
///
/// # Examples
///
/// ```rust
/// # use autoblogger::normalizer::{inject_tag_styles, StyleTable};
/// let table = StyleTable::new().with_tag("h2", "color:red;");
/// let once = inject_tag_styles("<h2>Title</h2>", &table);
/// assert_eq!(once, r#"<h2 style="color:red;">Title</h2>"#);
/// assert_eq!(inject_tag_styles(&once, &table), once);
/// ```
pub fn inject_tag_styles(raw: &str, table: &StyleTable) -> String {
    if table.is_empty() {
        return raw.to_string();
    }

    let text = match &table.callout {
        Some(callout) => replace_callout_markers(raw, callout),
        None => raw.to_string(),
    };

    if table.tags.is_empty() {
        return text;
    }

    let mut decorated = 0usize;
    let result = OPENING_TAG_RE.replace_all(&text, |caps: &Captures| {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let name = caps.get(1).map_or("", |m| m.as_str());
        let attrs = caps.get(2).map_or("", |m| m.as_str());

        let Some(style) = table.style_for(name) else {
            return whole.to_string();
        };
        if STYLE_ATTR_RE.is_match(attrs) {
            return whole.to_string();
        }

        decorated += 1;
        format!(
            r#"<{name} style="{}"{attrs}>"#,
            encode_double_quoted_attribute(style)
        )
    });

    tracing::debug!("Injected inline styles into {} tags", decorated);
    result.into_owned()
}

/// Drop quoted `style` attributes from every opening tag.
///
/// Used where the markup is read for its content only (the SEO excerpt),
/// so inline CSS does not eat into a character budget. Text outside tags is
/// never changed.
pub fn strip_inline_styles(text: &str) -> String {
    OPENING_TAG_RE
        .replace_all(text, |caps: &Captures| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let name = caps.get(1).map_or("", |m| m.as_str());
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            if !STYLE_ATTR_RE.is_match(attrs) {
                return whole.to_string();
            }
            format!("<{name}{}>", STYLE_VALUE_RE.replace_all(attrs, ""))
        })
        .into_owned()
}

fn replace_callout_markers(text: &str, callout: &CalloutStyle) -> String {
    let marker = callout.marker.trim();
    if marker.is_empty() {
        return text.to_string();
    }

    let count = text.matches(marker).count();
    if count == 0 {
        return text.to_string();
    }

    tracing::debug!("Replacing {} callout marker(s)", count);
    text.replace(marker, &callout.replacement())
}
