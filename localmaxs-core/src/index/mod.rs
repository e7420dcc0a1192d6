//! Suffix-array ngram index
//!
//! [`SuffixIndex`] orders corpus positions by suffix, [`NgramCounter`] turns
//! that ordering into occurrence counts with two binary searches per query,
//! and [`IndexedCorpus`] bundles the index with the vocabulary it was built
//! against for the lifetime of a query session.

mod counter;
mod suffix;

pub use counter::{probability, NgramCounter};
pub use suffix::SuffixIndex;

use crate::corpus::Corpus;
use crate::error::Result;
use crate::vocabulary::Vocabulary;

/// Resident, immutable index and vocabulary of one corpus attribute
#[derive(Debug, Clone)]
pub struct IndexedCorpus {
    vocabulary: Vocabulary,
    index: SuffixIndex,
}

impl IndexedCorpus {
    /// Build the suffix index over `corpus`
    pub fn build(vocabulary: Vocabulary, corpus: Corpus) -> Result<Self> {
        let index = SuffixIndex::build(corpus)?;
        Ok(Self { vocabulary, index })
    }

    /// The vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The suffix index
    pub fn index(&self) -> &SuffixIndex {
        &self.index
    }

    /// The corpus owned by the index
    pub fn corpus(&self) -> &Corpus {
        self.index.corpus()
    }

    /// Counter borrowing this index
    pub fn counter(&self) -> NgramCounter<'_> {
        NgramCounter::new(&self.index, &self.vocabulary)
    }
}
