//! Refine session - owns one article across draft and edit turns
//!
//! Each turn follows the same sequence: take the editable (unwrapped) body,
//! let the model produce new raw text, then render it through the
//! normalizer. The document therefore carries exactly one wrapper no
//! matter how many turns run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::generation::{BlogRequest, BlogWriter, CompletionClient, GenerationError, SeoMetadata};
use crate::normalizer::{Document, Normalizer, strip_inline_styles};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    Draft,
    Refine,
    Import,
}

/// One entry of the session history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    pub kind: TurnKind,
    pub at: DateTime<Utc>,
    pub instruction: Option<String>,
    /// The model call failed and the body holds the error sentinel
    pub failed: bool,
}

pub struct RefineSession<C> {
    id: Uuid,
    created_at: DateTime<Utc>,
    writer: BlogWriter<C>,
    normalizer: Normalizer,
    request: Option<BlogRequest>,
    document: Document,
    seo: SeoMetadata,
    history: Vec<TurnRecord>,
}

impl<C: CompletionClient> RefineSession<C> {
    /// Draft a new article and, when `with_seo` is set, compute its metadata
    pub async fn draft(
        writer: BlogWriter<C>,
        normalizer: Normalizer,
        request: BlogRequest,
        with_seo: bool,
    ) -> Self {
        let result = writer.try_draft_article(&request, normalizer.config()).await;
        let (raw, failed) = settle(result, "Article generation");

        let mut session = Self::with_body(writer, normalizer, Some(request), &raw);
        session.record(TurnKind::Draft, None, failed);

        tracing::info!(
            "Session {} drafted article ({} chars, failed: {})",
            session.id,
            session.document.body().len(),
            failed
        );

        if with_seo && !failed {
            session.refresh_seo().await;
        }
        session
    }

    /// Continue from an existing document, wrapped or not
    pub fn import(writer: BlogWriter<C>, normalizer: Normalizer, existing: &str) -> Self {
        let mut session = Self::with_body(writer, normalizer, None, existing);
        session.record(TurnKind::Import, None, false);
        session
    }

    fn with_body(
        writer: BlogWriter<C>,
        normalizer: Normalizer,
        request: Option<BlogRequest>,
        raw: &str,
    ) -> Self {
        let mut document = Document::default();
        document.replace_with(raw, &normalizer);

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            writer,
            normalizer,
            request,
            document,
            seo: SeoMetadata::default(),
            history: Vec::new(),
        }
    }

    /// Run one edit turn
    ///
    /// A failed model call replaces the body with the error sentinel, the
    /// same way a failed draft does; the previous body is not kept.
    pub async fn refine(&mut self, instruction: &str) -> &Document {
        let editable = self.document.editable_body(&self.normalizer);
        let result = self.writer.try_refine_article(&editable, instruction).await;
        let (raw, failed) = settle(result, "Article refinement");

        self.document.replace_with(&raw, &self.normalizer);
        self.record(TurnKind::Refine, Some(instruction.to_string()), failed);

        tracing::info!(
            "Session {} refine turn {} applied (failed: {})",
            self.id,
            self.history.len(),
            failed
        );
        &self.document
    }

    /// Recompute SEO metadata for the current body
    ///
    /// The model sees the body without inline styles so the excerpt budget
    /// is spent on content.
    pub async fn refresh_seo(&mut self) -> &SeoMetadata {
        let body = strip_inline_styles(&self.document.editable_body(&self.normalizer));
        self.seo = self.writer.seo_metadata(&body).await;
        &self.seo
    }
}

/// Model text for the turn and whether the call failed
///
/// A failure becomes the `Error: <cause>` sentinel body. The flag comes from
/// the call itself, so an article that happens to start with "Error:" is not
/// mistaken for one.
fn settle(result: Result<String, GenerationError>, what: &str) -> (String, bool) {
    match result {
        Ok(content) => (content, false),
        Err(e) => {
            tracing::warn!("{} failed: {}", what, e);
            (e.to_sentinel(), true)
        }
    }
}

impl<C> RefineSession<C> {
    fn record(&mut self, kind: TurnKind, instruction: Option<String>, failed: bool) {
        self.history.push(TurnRecord {
            kind,
            at: Utc::now(),
            instruction,
            failed,
        });
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn request(&self) -> Option<&BlogRequest> {
        self.request.as_ref()
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn seo(&self) -> &SeoMetadata {
        &self.seo
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[must_use]
    pub fn writer(&self) -> &BlogWriter<C> {
        &self.writer
    }

    #[must_use]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Hand back the document and its metadata, ending the session
    #[must_use]
    pub fn finish(self) -> (Document, SeoMetadata) {
        (self.document, self.seo)
    }
}
