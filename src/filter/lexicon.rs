//! Embedded English lexicon: closed-class words and stop words.
//!
//! This is the process-wide linguistic model. It is built once, on first
//! use, behind an immutable shared handle; there is no mutation API.
//! Closed grammatical classes are finite word lists in English, so the
//! lexicon maps each closed-class word to its category and any word not
//! listed is treated as open-class. Membership is tunable policy, not an
//! algorithmic necessity.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::tagger::PosTag;

const DETERMINERS: &[&str] = &[
    "a", "all", "an", "another", "any", "both", "each", "either", "enough", "every", "few",
    "half", "neither", "no", "several", "some", "such", "that", "the", "these", "this", "those",
    "what", "which", "whose",
];

const PRONOUNS: &[&str] = &[
    "anybody", "anyone", "anything", "everybody", "everyone", "everything", "he", "her", "hers",
    "herself", "him", "himself", "his", "i", "it", "its", "itself", "me", "mine", "my", "myself",
    "nobody", "nothing", "one", "oneself", "our", "ours", "ourselves", "she", "somebody",
    "someone", "something", "their", "theirs", "them", "themselves", "they", "us", "we", "who",
    "whoever", "whom", "you", "your", "yours", "yourself", "yourselves",
];

const ADPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "at",
    "before", "behind", "below", "beside", "besides", "between", "beyond", "by", "despite",
    "down", "during", "except", "for", "from", "in", "into", "near", "of", "off", "on", "onto",
    "over", "per", "through", "throughout", "to", "toward", "towards", "under", "underneath",
    "up", "upon", "via", "with", "within", "without",
];

const COORD_CONJUNCTIONS: &[&str] = &["and", "but", "nor", "or", "plus", "so", "yet"];

const SUBORD_CONJUNCTIONS: &[&str] = &[
    "although", "as", "because", "if", "lest", "once", "since", "than", "though", "unless",
    "until", "when", "whenever", "where", "whereas", "wherever", "whether", "while",
];

const AUXILIARIES: &[&str] = &[
    "am", "are", "be", "been", "being", "can", "could", "did", "do", "does", "done", "had",
    "has", "have", "having", "is", "may", "might", "must", "ought", "shall", "should", "was",
    "were", "will", "would",
];

const PARTICLES: &[&str] = &["not"];

const INTERJECTIONS: &[&str] = &[
    "ah", "alas", "hello", "hey", "hi", "hmm", "huh", "oh", "okay", "oops", "ouch", "wow",
    "yeah", "yes",
];

const ADVERBS: &[&str] = &[
    "again", "almost", "already", "also", "always", "anyway", "else", "ever", "furthermore",
    "hence", "here", "however", "indeed", "instead", "just", "maybe", "meanwhile", "moreover",
    "never", "nevertheless", "nonetheless", "now", "often", "only", "otherwise", "perhaps",
    "quite", "rather", "sometimes", "soon", "still", "then", "there", "therefore", "thus",
    "too", "usually", "very",
];

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "don", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s",
    "same", "she", "should", "so", "some", "such", "t", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "you", "your",
    "yours", "yourself", "yourselves",
];

/// The shared linguistic model: closed-class categories plus a stop-word
/// flag, keyed by lowercase word.
pub struct Lexicon {
    closed: HashMap<&'static str, PosTag>,
    stop: HashSet<&'static str>,
}

static ENGLISH: Lazy<Lexicon> = Lazy::new(Lexicon::english);

impl Lexicon {
    /// The process-wide English lexicon, initialized on first use.
    pub fn shared() -> &'static Lexicon {
        &ENGLISH
    }

    fn english() -> Self {
        let classes: &[(&[&str], PosTag)] = &[
            (DETERMINERS, PosTag::Determiner),
            (PRONOUNS, PosTag::Pronoun),
            (ADPOSITIONS, PosTag::Adposition),
            (COORD_CONJUNCTIONS, PosTag::CoordConj),
            (SUBORD_CONJUNCTIONS, PosTag::SubordConj),
            (AUXILIARIES, PosTag::Auxiliary),
            (PARTICLES, PosTag::Particle),
            (INTERJECTIONS, PosTag::Interjection),
            (ADVERBS, PosTag::Adverb),
        ];

        let mut closed = HashMap::new();
        for (words, tag) in classes {
            for word in *words {
                // Words in more than one closed class keep the first
                // assignment; every closed class is excluded anyway.
                closed.entry(*word).or_insert(*tag);
            }
        }

        Self {
            closed,
            stop: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Tag a lowercase word token.
    pub fn tag(&self, lower: &str) -> PosTag {
        self.closed.get(lower).copied().unwrap_or(PosTag::Open)
    }

    /// Stop-word flag for a lowercase word token.
    pub fn is_stop(&self, lower: &str) -> bool {
        self.stop.contains(lower)
    }
}
