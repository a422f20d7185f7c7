//! Article generation through a hosted completion endpoint.
//!
//! This is the upstream collaborator of the normalizer: it produces raw
//! text (possibly fenced, possibly echoing an earlier wrapper) or an
//! `Error: <cause>` sentinel, never an error past the writer.

mod client;
mod errors;
mod prompts;
mod request;
mod seo;
mod writer;

pub use client::{CompletionClient, OpenAiClient};
pub use errors::GenerationError;
pub use prompts::{build_article_prompt, build_refine_prompt, build_seo_prompt};
pub use request::{BlogRequest, DEFAULT_PERSONA, Tone};
pub use seo::SeoMetadata;
pub use writer::BlogWriter;
