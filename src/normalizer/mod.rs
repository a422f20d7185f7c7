//! Content normalization for model-generated article markup.
//!
//! Turns whatever the model returned into canonical markup that can be
//! re-processed on every refine turn:
//! 1. Strip markdown code fences
//! 2. Remove a wrapper left over from an earlier turn
//! 3. Decorate bare structural tags with inline styles (optional)
//! 4. Wrap the body in exactly one style container
//!
//! Everything here is substring based and infallible. Malformed input
//! (stray fences, half a wrapper, pre-styled tags) is handled by the no-op
//! rules of each step, never reported as an error.

mod document;
mod fences;
mod pipeline;
mod tag_styles;
mod wrapper;


pub use document::Document;
pub use fences::{count_fences, strip_fences};
pub use pipeline::{Normalizer, normalize};
pub use tag_styles::{CalloutStyle, StyleTable, inject_tag_styles, strip_inline_styles};
pub use wrapper::{Wrapper, is_wrapped, unwrap, wrap};
