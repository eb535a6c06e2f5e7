//! Word tree types produced by assembly.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Filtered content words for one paragraph.
///
/// Unlike [`crate::model::PageText`], the paragraph ordinal is explicit:
/// the tree is a filtered projection of the raw layout and keeps the raw
/// ordinal of each surviving paragraph, so the sequence may have gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphWords {
    /// Paragraph number within its page (1-indexed, from the raw layout).
    pub number: u32,

    /// Distinct lowercase content words, in ascending lexicographic order.
    pub words: Vec<String>,
}

impl ParagraphWords {
    /// Create a paragraph entry. The word list must be non-empty.
    pub fn new(number: u32, words: Vec<String>) -> Self {
        debug_assert!(!words.is_empty(), "empty paragraphs are omitted, not stored");
        Self { number, words }
    }
}

/// Surviving paragraphs for one page.
///
/// A page whose paragraphs were all filtered out still appears in the
/// tree, with an empty paragraph list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWords {
    /// Page number (1-indexed, from the raw layout).
    pub number: u32,

    /// Paragraphs with at least one surviving word, in paragraph order.
    pub paragraphs: Vec<ParagraphWords>,
}

impl PageWords {
    /// Create a page entry with no paragraphs.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            paragraphs: Vec::new(),
        }
    }

    /// Append a surviving paragraph. Must be pushed in paragraph order.
    pub fn push_paragraph(&mut self, paragraph: ParagraphWords) {
        self.paragraphs.push(paragraph);
    }

    /// Check if every paragraph on this page was filtered out.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Page → paragraph → word-list projection of a raw layout.
///
/// Serializes as `{"Page N": {"Paragraph M": ["word1", ...]}}` with keys
/// in insertion (document) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTree {
    pages: Vec<PageWords>,
}

impl WordTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page entry. Pages must be pushed in document order.
    pub fn push_page(&mut self, page: PageWords) {
        self.pages.push(page);
    }

    /// Pages in document order.
    pub fn pages(&self) -> &[PageWords] {
        &self.pages
    }

    /// Number of page entries (equals the raw layout's page count).
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Total number of surviving paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.pages.iter().map(|p| p.paragraphs.len()).sum()
    }

    /// Total number of words across all paragraphs.
    pub fn word_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.paragraphs)
            .map(|p| p.words.len())
            .sum()
    }

    /// Check if no paragraph anywhere survived filtering.
    ///
    /// This is the "no valid words found" condition a collaborator should
    /// surface as a notice; it is not an error.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.is_empty())
    }
}

impl Serialize for WordTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pages.len()))?;
        for page in &self.pages {
            map.serialize_entry(&format!("Page {}", page.number), &PageEntry(page))?;
        }
        map.end()
    }
}

struct PageEntry<'a>(&'a PageWords);

impl Serialize for PageEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.paragraphs.len()))?;
        for paragraph in &self.0.paragraphs {
            map.serialize_entry(
                &format!("Paragraph {}", paragraph.number),
                &paragraph.words,
            )?;
        }
        map.end()
    }
}
