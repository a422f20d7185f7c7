//! Article writer on top of a completion client
//!
//! The writer is the boundary where generation failures stop being errors:
//! article calls degrade to an `Error: <cause>` sentinel body and SEO calls
//! degrade to empty metadata, so callers always get something displayable.

use crate::config::{ModelConfig, NormalizerConfig};

use super::client::CompletionClient;
use super::errors::GenerationError;
use super::prompts::{build_article_prompt, build_refine_prompt, build_seo_prompt};
use super::request::BlogRequest;
use super::seo::SeoMetadata;

pub struct BlogWriter<C> {
    client: C,
    article_model: String,
    seo_model: String,
}

impl<C: CompletionClient> BlogWriter<C> {
    pub fn new(client: C, models: &ModelConfig) -> Self {
        Self {
            client,
            article_model: models.article_model.clone(),
            seo_model: models.seo_model.clone(),
        }
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Draft an article, surfacing failures as errors
    ///
    /// # Errors
    ///
    /// Returns the request validation error or the client failure.
    pub async fn try_draft_article(
        &self,
        request: &BlogRequest,
        config: &NormalizerConfig,
    ) -> Result<String, GenerationError> {
        request.validate()?;
        let prompt = build_article_prompt(request, config);
        self.client.complete(&self.article_model, &prompt).await
    }

    /// Draft an article; a failure becomes the `Error: <cause>` sentinel
    pub async fn draft_article(&self, request: &BlogRequest, config: &NormalizerConfig) -> String {
        match self.try_draft_article(request, config).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Article generation failed: {}", e);
                e.to_sentinel()
            }
        }
    }

    /// Ask for meta description, slug and keywords; empty on failure
    pub async fn seo_metadata(&self, content: &str) -> SeoMetadata {
        let prompt = build_seo_prompt(content);
        match self.client.complete(&self.seo_model, &prompt).await {
            Ok(raw) => SeoMetadata::parse(&raw),
            Err(e) => {
                tracing::warn!("SEO metadata generation failed: {}", e);
                SeoMetadata::default()
            }
        }
    }

    /// Apply an edit instruction to an unwrapped body
    ///
    /// # Errors
    ///
    /// Returns the client failure.
    pub async fn try_refine_article(
        &self,
        body: &str,
        instruction: &str,
    ) -> Result<String, GenerationError> {
        let prompt = build_refine_prompt(body, instruction);
        self.client.complete(&self.article_model, &prompt).await
    }

    /// Apply an edit instruction; a failure becomes the sentinel body
    pub async fn refine_article(&self, body: &str, instruction: &str) -> String {
        match self.try_refine_article(body, instruction).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Article refinement failed: {}", e);
                e.to_sentinel()
            }
        }
    }
}
