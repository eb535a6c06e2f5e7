//! Raw layout types produced by text acquisition.

use serde::Serialize;
use std::fmt;

/// Which acquisition path produced a [`RawLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Text was read directly from the PDF text layer.
    Digital,
    /// Text was recognized from rasterized page images.
    Scanned,
}

impl SourceType {
    /// Lowercase tag string (`"digital"` or `"scanned"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Digital => "digital",
            SourceType::Scanned => "scanned",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw paragraph text for one page.
///
/// Paragraph ordinals are implicit: the paragraph at index `i` has
/// ordinal `i + 1`. Acquisition only pushes paragraphs that survived the
/// mode-specific blank filter, so ordinals are contiguous from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Page number (1-indexed, document order).
    pub number: u32,

    /// Raw paragraph text, in reading order.
    pub paragraphs: Vec<String>,
}

impl PageText {
    /// Create a page with the given paragraphs.
    pub fn new(number: u32, paragraphs: Vec<String>) -> Self {
        Self { number, paragraphs }
    }

    /// Check if the page has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Iterate paragraphs with their 1-based ordinals.
    pub fn numbered_paragraphs(&self) -> impl Iterator<Item = (u32, &str)> {
        self.paragraphs
            .iter()
            .enumerate()
            .map(|(i, text)| (i as u32 + 1, text.as_str()))
    }
}

/// Ordered page → paragraph → raw text mapping for one document.
///
/// Built once per document by [`crate::acquire::acquire`]; immutable
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLayout {
    pages: Vec<PageText>,
}

impl RawLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page. Pages must be pushed in document order.
    pub fn push_page(&mut self, page: PageText) {
        self.pages.push(page);
    }

    /// Pages in document order.
    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&PageText> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Number of pages in the layout.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Check if the layout has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of paragraphs across all pages.
    pub fn paragraph_count(&self) -> usize {
        self.pages.iter().map(|p| p.paragraphs.len()).sum()
    }
}

impl FromIterator<PageText> for RawLayout {
    fn from_iter<I: IntoIterator<Item = PageText>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_tags() {
        assert_eq!(SourceType::Digital.as_str(), "digital");
        assert_eq!(SourceType::Scanned.to_string(), "scanned");
        assert_eq!(
            serde_json::to_string(&SourceType::Scanned).unwrap(),
            "\"scanned\""
        );
    }

    #[test]
    fn test_numbered_paragraphs() {
        let page = PageText::new(3, vec!["first".into(), "second".into()]);
        let numbered: Vec<_> = page.numbered_paragraphs().collect();
        assert_eq!(numbered, vec![(1, "first"), (2, "second")]);
    }

    #[test]
    fn test_layout_accessors() {
        let mut layout = RawLayout::new();
        assert!(layout.is_empty());

        layout.push_page(PageText::new(1, vec!["a".into()]));
        layout.push_page(PageText::new(2, vec![]));

        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.paragraph_count(), 1);
        assert_eq!(layout.get_page(1).unwrap().paragraphs, vec!["a"]);
        assert!(layout.get_page(2).unwrap().is_empty());
        assert!(layout.get_page(0).is_none());
        assert!(layout.get_page(3).is_none());
    }
}
