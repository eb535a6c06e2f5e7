//! Tree assembly: project a raw layout through the lexical filter.

use rayon::prelude::*;

use crate::filter::content_words;
use crate::model::{PageWords, ParagraphWords, RawLayout, WordTree};
use crate::options::PipelineOptions;

/// Build the word tree for a raw layout.
///
/// Every page appears in the tree, in document order, even when all of
/// its paragraphs filter to nothing. A paragraph appears only when its
/// filtered word list is non-empty, under its raw ordinal.
pub fn build_word_tree(layout: &RawLayout) -> WordTree {
    build_word_tree_with_options(layout, &PipelineOptions::default())
}

/// [`build_word_tree`] with explicit options (parallelism).
pub fn build_word_tree_with_options(layout: &RawLayout, options: &PipelineOptions) -> WordTree {
    let mut tree = WordTree::new();
    for page in layout.pages() {
        let filtered: Vec<(u32, Vec<String>)> = if options.parallel {
            page.paragraphs
                .par_iter()
                .enumerate()
                .map(|(i, text)| (i as u32 + 1, content_words(text)))
                .collect()
        } else {
            page.numbered_paragraphs()
                .map(|(number, text)| (number, content_words(text)))
                .collect()
        };

        let mut page_words = PageWords::new(page.number);
        for (number, words) in filtered {
            if !words.is_empty() {
                page_words.push_paragraph(ParagraphWords::new(number, words));
            }
        }
        tree.push_page(page_words);
    }
    tree
}
