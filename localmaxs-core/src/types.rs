//! Core types shared by the index and the extractor

use core::fmt;
use smallvec::SmallVec;

/// Dense integer identifier of a vocabulary entry
pub type TokenId = u32;

/// Reserved id marking the end of a sentence in the corpus
///
/// No vocabulary entry may ever be assigned this id.
pub const SEPARATOR: TokenId = 0;

/// Token-id sequence of one ngram
///
/// Ngrams are bounded by `max_ngram` (8 by default), so the common case
/// never touches the heap.
pub type NgramKey = SmallVec<[TokenId; 8]>;

/// Returns true if the id is the sentence separator
#[inline]
pub fn is_separator(id: TokenId) -> bool {
    id == SEPARATOR
}

/// Selected ngram before decoding, still expressed in token ids
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Token ids of the ngram
    pub key: NgramKey,
    /// Association strength of the ngram
    pub glue: f64,
}

impl Candidate {
    /// Create a new candidate
    pub fn new(key: NgramKey, glue: f64) -> Self {
        Self { key, glue }
    }

    /// Number of tokens in the ngram
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Whether the ngram has no tokens
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Selected ngram decoded back to its symbols
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DecodedCandidate {
    /// Symbols of the ngram, in order
    pub tokens: Vec<String>,
    /// Association strength of the ngram
    pub glue: f64,
}

impl DecodedCandidate {
    /// Space-joined surface of the ngram
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for DecodedCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (glue {:?})", self.text(), self.glue)
    }
}

/// All decoded candidates selected in one sentence
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SentenceCandidates {
    /// Zero-based index of the sentence in the corpus
    pub sentence_index: usize,
    /// Selected ngrams in emission order
    pub candidates: Vec<DecodedCandidate>,
}

impl SentenceCandidates {
    /// Create an empty result for a sentence
    pub fn empty(sentence_index: usize) -> Self {
        Self {
            sentence_index,
            candidates: Vec::new(),
        }
    }
}
