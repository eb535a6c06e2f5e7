//! Lexical filtering: reduce raw text to content words.
//!
//! A token survives only if its grammatical category is open-class, it
//! consists solely of alphabetic characters, and it is not a stop word.
//! Survivors are lowercased, deduplicated, and returned in ascending
//! lexicographic order.

mod lexicon;
mod tagger;

pub use lexicon::Lexicon;
pub use tagger::{tag_tokens, tokenize, PosTag, Token};

use std::collections::BTreeSet;

/// Extract the sorted set of distinct lowercase content words from text.
///
/// Pure function of the input and the fixed shared lexicon; never fails.
/// Empty input yields empty output.
pub fn content_words(text: &str) -> Vec<String> {
    let words: BTreeSet<String> = tag_tokens(text)
        .into_iter()
        .filter(|token| !token.tag.is_excluded() && token.is_alphabetic() && !token.is_stop)
        .map(|token| token.text.to_lowercase())
        .collect();

    words.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_fox_scenario() {
        let words = content_words("The quick fox jumps. It ran fast.");
        assert_eq!(words, vec!["fast", "fox", "jumps", "quick", "ran"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(content_words("").is_empty());
        assert!(content_words("   \n\t").is_empty());
    }

    #[test]
    fn test_function_words_only() {
        assert!(content_words("the of and it was not very").is_empty());
    }

    #[test]
    fn test_punctuation_and_numbers_dropped() {
        assert!(content_words("... 42 !! 3.14").is_empty());
        assert!(content_words("abc123 v2").is_empty());
    }

    #[test]
    fn test_lowercase_and_dedup() {
        let words = content_words("Fox fox FOX");
        assert_eq!(words, vec!["fox"]);
    }

    #[test]
    fn test_sorted_ascending() {
        let words = content_words("zebra apple mango");
        assert_eq!(words, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_idempotent() {
        let text = "Paragraphs are filtered deterministically, always.";
        assert_eq!(content_words(text), content_words(text));
    }

    #[test]
    fn test_output_invariants() {
        let words = content_words("Mixed CASE words, some repeated words; 7 numbers.");
        for pair in words.windows(2) {
            assert!(pair[0] < pair[1], "sorted and distinct: {:?}", words);
        }
        for word in &words {
            assert_eq!(word, &word.to_lowercase());
            assert!(word.chars().all(char::is_alphabetic));
        }
    }
}
