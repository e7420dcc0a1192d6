//! Corpus provider handles
//!
//! An index provider exposes one array per corpus attribute (surface form,
//! lemma, part of speech or a composite such as `lemma+pos`). Each array
//! carries its token sequence, its symbol table and the count of real
//! tokens. The JSON shape is:
//!
//! ```json
//! {
//!   "arrays": {
//!     "surface": {
//!       "corpus": [1, 2, 1, 2, 0],
//!       "symbols": { "A": 1, "B": 2 },
//!       "metadata": { "corpus_size": 4 }
//!     }
//!   }
//! }
//! ```

use crate::corpus::{count_real_tokens, Corpus};
use crate::error::Result;
use crate::index::IndexedCorpus;
use crate::types::{is_separator, TokenId};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source of named corpus arrays
pub trait CorpusProvider {
    /// Array stored under `name`
    fn array(&self, name: &str) -> Option<&ArrayHandle>;

    /// Names of every stored array
    fn names(&self) -> Vec<&str>;
}

/// Per-array metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayMetadata {
    /// Number of real tokens; derived from the corpus when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_size: Option<usize>,
}

/// One corpus attribute: token ids, symbol table and metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayHandle {
    /// Token ids with `0` separators
    pub corpus: Vec<TokenId>,
    /// Symbol table
    pub symbols: Vocabulary,
    /// Metadata
    #[serde(default)]
    pub metadata: ArrayMetadata,
}

impl ArrayHandle {
    /// Bundle a vocabulary and corpus into a handle
    pub fn new(symbols: Vocabulary, corpus: &Corpus) -> Self {
        Self {
            corpus: corpus.tokens().to_vec(),
            symbols,
            metadata: ArrayMetadata {
                corpus_size: Some(corpus.corpus_size()),
            },
        }
    }

    /// Count of real tokens, from metadata or from the corpus itself
    pub fn corpus_size(&self) -> usize {
        self.metadata
            .corpus_size
            .unwrap_or_else(|| count_real_tokens(&self.corpus))
    }

    /// Split into vocabulary and corpus
    pub fn into_parts(self) -> (Vocabulary, Corpus) {
        let corpus_size = self.corpus_size();
        (self.symbols, Corpus::new(self.corpus, corpus_size))
    }

    /// Build the suffix index over this array
    pub fn into_indexed(self) -> Result<IndexedCorpus> {
        let (vocabulary, corpus) = self.into_parts();
        IndexedCorpus::build(vocabulary, corpus)
    }

    /// Corpus ids (separator excluded) that have no vocabulary entry,
    /// with the position of their first occurrence
    pub fn unknown_ids(&self) -> BTreeMap<TokenId, usize> {
        let mut unknown = BTreeMap::new();
        for (position, &id) in self.corpus.iter().enumerate() {
            if !is_separator(id) && !self.symbols.contains_id(id) {
                unknown.entry(id).or_insert(position);
            }
        }
        unknown
    }
}

/// In-memory provider holding every array of one index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexHandle {
    /// Arrays by attribute name
    pub arrays: BTreeMap<String, ArrayHandle>,
}

impl IndexHandle {
    /// Create an empty handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an array under `name`, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, array: ArrayHandle) -> &mut Self {
        self.arrays.insert(name.into(), array);
        self
    }

    /// Remove and return the array stored under `name`
    pub fn take(&mut self, name: &str) -> Option<ArrayHandle> {
        self.arrays.remove(name)
    }
}

impl CorpusProvider for IndexHandle {
    fn array(&self, name: &str) -> Option<&ArrayHandle> {
        self.arrays.get(name)
    }

    fn names(&self) -> Vec<&str> {
        self.arrays.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusBuilder;

    const HANDLE: &str = r#"{
        "arrays": {
            "surface": {
                "corpus": [1, 2, 1, 2, 0],
                "symbols": { "A": 1, "B": 2 },
                "metadata": { "corpus_size": 4 }
            },
            "lemma": {
                "corpus": [1, 1, 0],
                "symbols": { "a": 1 }
            }
        }
    }"#;

    #[test]
    fn test_deserialize_handle() {
        let handle: IndexHandle = serde_json::from_str(HANDLE).unwrap();
        assert_eq!(handle.names(), vec!["lemma", "surface"]);

        let surface = handle.array("surface").unwrap();
        assert_eq!(surface.corpus_size(), 4);
        assert_eq!(surface.symbols.id_of("B"), Some(2));

        let lemma = handle.array("lemma").unwrap();
        assert_eq!(lemma.corpus_size(), 2);
        assert!(handle.array("pos").is_none());
    }

    #[test]
    fn test_into_indexed_counts() {
        let mut handle: IndexHandle = serde_json::from_str(HANDLE).unwrap();
        let indexed = handle.take("surface").unwrap().into_indexed().unwrap();
        assert_eq!(indexed.counter().count_symbols(&["A", "B"]), 2);
        assert_eq!(indexed.corpus().corpus_size(), 4);
    }

    #[test]
    fn test_reserved_id_in_symbols_fails_to_load() {
        let json = r#"{"arrays": {"x": {"corpus": [0], "symbols": {"<s>": 0}}}}"#;
        assert!(serde_json::from_str::<IndexHandle>(json).is_err());
    }

    #[test]
    fn test_unknown_ids_report_first_position() {
        let json = r#"{"corpus": [1, 5, 0, 5, 7], "symbols": {"a": 1}}"#;
        let array: ArrayHandle = serde_json::from_str(json).unwrap();
        let unknown = array.unknown_ids();
        assert_eq!(unknown.get(&5), Some(&1));
        assert_eq!(unknown.get(&7), Some(&4));
        assert_eq!(unknown.len(), 2);
    }

    #[test]
    fn test_builder_round_trip_through_json() {
        let mut builder = CorpusBuilder::new();
        builder.push_line("the cat sat").unwrap();
        let (vocab, corpus) = builder.build();

        let mut handle = IndexHandle::new();
        handle.insert("surface", ArrayHandle::new(vocab, &corpus));

        let json = serde_json::to_string(&handle).unwrap();
        let parsed: IndexHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, handle);
    }
}
