//! Direct text-layer extraction via lopdf.

use lopdf::Document as LopdfDocument;

use crate::error::{Error, Result};

/// Extract the text layer of every page, in document order.
///
/// All-or-nothing: any failure, whether loading the document or
/// extracting a single page, errors the whole attempt. The caller treats
/// that error as the signal to fall back to OCR; no partial result is
/// kept.
pub fn extract_pages(data: &[u8]) -> Result<Vec<String>> {
    let doc = LopdfDocument::load_mem(data)?;

    let page_ids = doc.get_pages();
    let mut pages = Vec::with_capacity(page_ids.len());
    for page_num in page_ids.keys() {
        let text = doc
            .extract_text(&[*page_num])
            .map_err(|e| Error::TextExtract(format!("page {}: {}", page_num, e)))?;
        pages.push(text);
    }

    Ok(pages)
}

/// Success predicate for the digital strategy: at least one page carries
/// non-whitespace text.
pub fn has_text(pages: &[String]) -> bool {
    pages.iter().any(|text| !text.trim().is_empty())
}
