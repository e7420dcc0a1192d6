//! Core error types (deterministic only)
//!
//! Counting and glue anomalies never surface here: absent tokens and empty
//! ranges degrade to a zero count and zero denominators to a zero score.
//! Identity mismatches between corpus and vocabulary are escalated, and so
//! are invalid configuration and running out of token ids.

use crate::types::TokenId;
use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A corpus-resident id has no vocabulary entry at decoding time
    #[error("index inconsistency: token id {token_id} in sentence {sentence_index} has no vocabulary entry")]
    IndexInconsistency {
        /// The id read from the corpus
        token_id: TokenId,
        /// Zero-based index of the sentence being emitted
        sentence_index: usize,
    },

    /// Invalid extraction configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A vocabulary entry was mapped to the reserved separator id
    #[error("symbol '{symbol}' is mapped to the reserved separator id 0")]
    ReservedSeparatorId {
        /// The offending symbol
        symbol: String,
    },

    /// Two vocabulary entries share one id
    #[error("token id {token_id} is assigned to both '{first}' and '{second}'")]
    DuplicateTokenId {
        /// The shared id
        token_id: TokenId,
        /// First symbol seen with the id
        first: String,
        /// Second symbol seen with the id
        second: String,
    },

    /// Every id above the largest one in use is taken
    #[error("vocabulary is full: no token id left for symbol '{symbol}'")]
    VocabularyFull {
        /// The symbol that could not be interned
        symbol: String,
    },

    /// Corpus has more positions than the compact index can address
    #[error("corpus of {len} positions exceeds the index capacity of {max} positions")]
    CorpusTooLarge {
        /// Number of corpus positions
        len: usize,
        /// Largest addressable corpus length
        max: usize,
    },

    /// Unknown glue function name
    #[error("unknown glue function '{0}' (expected one of: scp, dice)")]
    UnknownGlue(String),
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_inconsistency_display() {
        let error = CoreError::IndexInconsistency {
            token_id: 42,
            sentence_index: 7,
        };
        let message = error.to_string();
        assert!(message.contains("42"));
        assert!(message.contains("sentence 7"));
    }

    #[test]
    fn test_configuration_display() {
        let error = CoreError::Configuration("max_ngram must be at least min_ngram".into());
        assert_eq!(
            error.to_string(),
            "invalid configuration: max_ngram must be at least min_ngram"
        );
    }

    #[test]
    fn test_duplicate_id_display() {
        let error = CoreError::DuplicateTokenId {
            token_id: 3,
            first: "cat".into(),
            second: "dog".into(),
        };
        assert_eq!(
            error.to_string(),
            "token id 3 is assigned to both 'cat' and 'dog'"
        );
    }

    #[test]
    fn test_vocabulary_full_display() {
        let error = CoreError::VocabularyFull {
            symbol: "zebra".into(),
        };
        assert_eq!(
            error.to_string(),
            "vocabulary is full: no token id left for symbol 'zebra'"
        );
    }
}
