//! # lexpdf
//!
//! Extract content-bearing vocabulary from PDF documents.
//!
//! lexpdf ingests a PDF of unknown provenance, acquires its text either
//! from the embedded text layer or, failing that, by rasterizing pages
//! and running OCR, then filters each paragraph down to the sorted set
//! of distinct content words (open-class, alphabetic, non-stop). The
//! result is a page → paragraph → word-list tree, serializable as
//! `{"Page N": {"Paragraph M": ["word1", ...]}}`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lexpdf::{extract_file, JsonFormat};
//!
//! fn main() -> lexpdf::Result<()> {
//!     let output = extract_file("document.pdf")?;
//!
//!     println!("classified as {}", output.source);
//!     let json = output.to_json(JsonFormat::Pretty)?;
//!     std::fs::write("filtered_words.json", json)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Acquisition**: text layer first; any failure or an all-blank text
//!   layer falls back to 300 DPI rasterization + per-page OCR. The
//!   document is tagged `digital` or `scanned` accordingly.
//! - **Filtering**: a shared, lazily-initialized lexicon tags tokens
//!   with a grammatical category and a stop-word flag; only open-class,
//!   fully alphabetic, non-stop tokens survive.
//! - **Assembly**: paragraphs that filter to nothing are omitted; pages
//!   are always kept, empty or not.

pub mod acquire;
pub mod assemble;
pub mod detect;
pub mod error;
pub mod filter;
pub mod model;
pub mod options;
pub mod render;

// Re-export commonly used types
pub use acquire::{acquire, acquire_with_options};
pub use assemble::{build_word_tree, build_word_tree_with_options};
pub use error::{Error, Result};
pub use filter::content_words;
pub use model::{PageText, PageWords, ParagraphWords, RawLayout, SourceType, WordTree};
pub use options::PipelineOptions;
pub use render::{to_json, JsonFormat, ARTIFACT_FILE_NAME, ARTIFACT_MIME_TYPE};

use std::path::Path;

/// Run the whole pipeline on PDF bytes with default options.
pub fn extract_bytes(data: &[u8]) -> Result<PipelineOutput> {
    Pipeline::new().run_bytes(data)
}

/// Run the whole pipeline on a PDF file with default options.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<PipelineOutput> {
    Pipeline::new().run_file(path)
}

/// Builder for running the extraction pipeline with custom options.
///
/// # Example
///
/// ```no_run
/// use lexpdf::Pipeline;
///
/// let output = Pipeline::new()
///     .with_dpi(150)
///     .with_ocr_language("deu")
///     .sequential()
///     .run_file("scan.pdf")?;
/// # Ok::<(), lexpdf::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    /// Create a new pipeline with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rasterization resolution for the OCR path.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.options = self.options.with_dpi(dpi);
        self
    }

    /// Set the OCR language code.
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.options = self.options.with_ocr_language(language);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Run the pipeline on PDF bytes.
    pub fn run_bytes(&self, data: &[u8]) -> Result<PipelineOutput> {
        let (layout, source) = acquire::acquire_with_options(data, &self.options)?;
        let tree = assemble::build_word_tree_with_options(&layout, &self.options);
        Ok(PipelineOutput {
            layout,
            tree,
            source,
        })
    }

    /// Run the pipeline on a PDF file.
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<PipelineOutput> {
        let data = std::fs::read(path)?;
        self.run_bytes(&data)
    }
}

/// Result of running the pipeline on one document.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Raw page → paragraph → text layout from acquisition.
    pub layout: RawLayout,

    /// Filtered page → paragraph → word-list tree.
    pub tree: WordTree,

    /// Which acquisition path produced the layout.
    pub source: SourceType,
}

impl PipelineOutput {
    /// Serialize the word tree as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.tree, format)
    }

    /// Whether no content words were found anywhere in the document.
    ///
    /// Not a failure; collaborators should surface this as a notice.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
