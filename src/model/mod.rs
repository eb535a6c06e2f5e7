//! Data model for the extraction pipeline.
//!
//! Two ordered, depth-two structures move through the pipeline: a
//! [`RawLayout`] of raw paragraph text produced by acquisition, and a
//! [`WordTree`] of filtered content words produced by assembly. Both are
//! Vec-backed so page and paragraph order is structural rather than an
//! ordered-map property.

mod layout;
mod tree;

pub use layout::{PageText, RawLayout, SourceType};
pub use tree::{PageWords, ParagraphWords, WordTree};
