//! Text acquisition: decide between the PDF text layer and OCR.
//!
//! The strategy choice is an explicit two-branch decision. The digital
//! branch wins when text-layer extraction succeeds without error AND at
//! least one page carries non-whitespace text; any other outcome falls
//! back to rasterization + OCR. Classification is per document, not per
//! page: a mixed digital/scanned document with at least one text-layer
//! page is treated as fully digital, and its image-only pages simply
//! yield zero paragraphs. That cost trade-off (skip rasterization for
//! anything that looks digital) is intentional.
//!
//! Paragraph granularity differs by branch and is part of the contract:
//! a digital paragraph is one non-blank physical line; a scanned
//! paragraph is a blank-line-delimited OCR block.

mod ocr;
mod text_layer;

use crate::error::Result;
use crate::model::{PageText, RawLayout, SourceType};
use crate::options::PipelineOptions;

/// Acquire the raw per-page, per-paragraph layout of a document.
///
/// Text-layer failures are swallowed into the OCR fallback and never
/// surface. Errors from the OCR path itself (unreadable input that also
/// fails rasterization, missing OCR tools) do surface: there is no
/// further recovery.
pub fn acquire(data: &[u8]) -> Result<(RawLayout, SourceType)> {
    acquire_with_options(data, &PipelineOptions::default())
}

/// [`acquire`] with explicit options (DPI, OCR language, parallelism).
pub fn acquire_with_options(
    data: &[u8],
    options: &PipelineOptions,
) -> Result<(RawLayout, SourceType)> {
    match text_layer::extract_pages(data) {
        // A readable document with zero pages is vacuously digital;
        // there is nothing to rasterize.
        Ok(pages) if pages.is_empty() => Ok((RawLayout::new(), SourceType::Digital)),
        Ok(pages) if text_layer::has_text(&pages) => {
            Ok((digital_layout(&pages), SourceType::Digital))
        }
        Ok(_) => {
            log::debug!("text layer present but empty on every page, falling back to OCR");
            Ok((ocr::acquire_scanned(data, options)?, SourceType::Scanned))
        }
        Err(err) => {
            log::debug!("text layer extraction failed ({}), falling back to OCR", err);
            Ok((ocr::acquire_scanned(data, options)?, SourceType::Scanned))
        }
    }
}

/// Segment extracted page texts into line paragraphs.
fn digital_layout(pages: &[String]) -> RawLayout {
    pages
        .iter()
        .enumerate()
        .map(|(i, text)| PageText::new(i as u32 + 1, split_lines(text)))
        .collect()
}

/// Keep non-blank physical lines. The trim only decides keep/drop; kept
/// lines are stored as extracted.
fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
