//! Occurrence counts and probabilities of arbitrary ngrams

use super::suffix::SuffixIndex;
use crate::types::{is_separator, TokenId};
use crate::vocabulary::Vocabulary;

/// Range-query front end over a [`SuffixIndex`]
///
/// Lookup misses are not errors: an ngram with any token that has no
/// vocabulary entry counts as zero without searching the index.
#[derive(Debug, Clone, Copy)]
pub struct NgramCounter<'a> {
    index: &'a SuffixIndex,
    vocabulary: &'a Vocabulary,
}

impl<'a> NgramCounter<'a> {
    /// Create a counter over an index and its vocabulary
    pub fn new(index: &'a SuffixIndex, vocabulary: &'a Vocabulary) -> Self {
        Self { index, vocabulary }
    }

    /// Number of occurrences of an ngram given as token ids
    pub fn count(&self, ngram: &[TokenId]) -> usize {
        let known = ngram
            .iter()
            .all(|&id| !is_separator(id) && self.vocabulary.contains_id(id));
        if !known {
            return 0;
        }
        self.index.count(ngram)
    }

    /// Number of occurrences of an ngram given as symbols
    pub fn count_symbols<S: AsRef<str>>(&self, symbols: &[S]) -> usize {
        match self.vocabulary.encode(symbols) {
            Some(ids) => self.index.count(&ids),
            None => 0,
        }
    }

    /// Relative frequency of an ngram, `count / corpus_size`
    ///
    /// Defined as zero for an empty corpus.
    pub fn probability(&self, ngram: &[TokenId]) -> f64 {
        probability(self.count(ngram), self.corpus_size())
    }

    /// Number of real tokens in the corpus
    pub fn corpus_size(&self) -> usize {
        self.index.corpus().corpus_size()
    }

    /// Vocabulary used for lookups
    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }
}

/// `count / corpus_size`, or zero when the corpus is empty
pub fn probability(count: usize, corpus_size: usize) -> f64 {
    if corpus_size == 0 {
        return 0.0;
    }
    count as f64 / corpus_size as f64
}
