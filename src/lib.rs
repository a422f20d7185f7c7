pub mod config;
pub mod generation;
pub mod normalizer;
pub mod render;
pub mod session;
pub mod utils;

pub use config::{ModelConfig, NormalizerConfig};
pub use generation::{
    BlogRequest, BlogWriter, CompletionClient, GenerationError, OpenAiClient, SeoMetadata, Tone,
};
pub use normalizer::{
    Document, Normalizer, StyleTable, Wrapper, inject_tag_styles, normalize, strip_fences, unwrap,
    wrap,
};
pub use render::PublishBundle;
pub use session::{RefineSession, TurnKind, TurnRecord};
