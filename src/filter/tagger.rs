//! Tokenization and part-of-speech tagging.
//!
//! Tokens are maximal runs of alphanumeric characters (word tokens) or
//! of other non-whitespace characters (punctuation tokens). Word tokens
//! are tagged by lexicon lookup; words outside the closed-class lexicon
//! default to [`PosTag::Open`], the content category.

use super::lexicon::Lexicon;

/// Grammatical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    /// Pronoun (he, them, anything, ...)
    Pronoun,
    /// Determiner (the, every, those, ...)
    Determiner,
    /// Adposition (of, in, between, ...)
    Adposition,
    /// Coordinating conjunction (and, but, or, ...)
    CoordConj,
    /// Subordinating conjunction (because, while, if, ...)
    SubordConj,
    /// Auxiliary verb (is, have, would, ...)
    Auxiliary,
    /// Particle (not, possessive s, ...)
    Particle,
    /// Interjection (oh, hello, alas, ...)
    Interjection,
    /// Functional adverb (very, always, therefore, ...)
    Adverb,
    /// Punctuation and symbol runs
    Punct,
    /// Open-class token, presumed to carry content
    Open,
}

impl PosTag {
    /// Whether this category is in the content-word exclusion set.
    ///
    /// The set targets function words and structural tokens; only
    /// open-class tokens survive it.
    pub fn is_excluded(&self) -> bool {
        !matches!(self, PosTag::Open)
    }
}

/// A tagged token borrowed from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text as it appears in the input.
    pub text: &'a str,

    /// Grammatical category.
    pub tag: PosTag,

    /// Whether the lexicon flags this token as a stop word.
    pub is_stop: bool,
}

impl Token<'_> {
    /// Whether the token consists solely of alphabetic characters.
    pub fn is_alphabetic(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }
}

/// Split text into word and punctuation tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    #[derive(PartialEq)]
    enum Class {
        Word,
        Punct,
    }

    let mut tokens = Vec::new();
    let mut start = None;
    let mut class = Class::Word;

    for (i, ch) in text.char_indices() {
        let ch_class = if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(&text[s..i]);
            }
            continue;
        } else if ch.is_alphanumeric() {
            Class::Word
        } else {
            Class::Punct
        };

        match start {
            Some(s) if class != ch_class => {
                tokens.push(&text[s..i]);
                start = Some(i);
            }
            Some(_) => {}
            None => start = Some(i),
        }
        class = ch_class;
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }

    tokens
}

/// Tokenize and tag text against the shared lexicon.
pub fn tag_tokens(text: &str) -> Vec<Token<'_>> {
    let lexicon = Lexicon::shared();

    tokenize(text)
        .into_iter()
        .map(|token| {
            let is_word = token.chars().next().is_some_and(char::is_alphanumeric);
            if !is_word {
                return Token {
                    text: token,
                    tag: PosTag::Punct,
                    is_stop: false,
                };
            }

            let lower = token.to_lowercase();
            Token {
                text: token,
                tag: lexicon.tag(&lower),
                is_stop: lexicon.is_stop(&lower),
            }
        })
        .collect()
}
