//! Compact suffix-array ngram index and LocalMaxs multiword-expression extraction
//!
//! A corpus is encoded as one flat sequence of integer token ids with a
//! reserved separator id (`0`) between sentences. A suffix ordering of the
//! corpus positions answers "how often does this ngram occur?" with two
//! binary searches, and the LocalMaxs pass keeps the ngrams whose
//! association strength ("glue") is a local maximum relative to their
//! immediate sub-ngrams.
//!
//! # Architecture
//!
//! - **Data model**: [`Vocabulary`], [`Corpus`], [`CorpusBuilder`] and the
//!   provider handles in [`provider`]
//! - **Index**: [`SuffixIndex`] and [`NgramCounter`], bundled with the
//!   vocabulary as an [`IndexedCorpus`]
//! - **Scoring**: the [`GlueFunction`] trait with [`Scp`] and [`Dice`]
//! - **Selection**: [`LocalMaxsExtractor`] with per-sentence
//!   [`SentenceContext`] tables
//!
//! # Example
//!
//! ```rust
//! use localmaxs_core::{CorpusBuilder, ExtractionConfig, IndexedCorpus, LocalMaxsExtractor};
//!
//! let mut builder = CorpusBuilder::new();
//! builder.push_line("A B A B").unwrap();
//! let (vocabulary, corpus) = builder.build();
//!
//! let indexed = IndexedCorpus::build(vocabulary, corpus).unwrap();
//! let extractor = LocalMaxsExtractor::with_scp(ExtractionConfig::new(2, 3).unwrap()).unwrap();
//!
//! let sentence = indexed.corpus().sentences().next().unwrap();
//! let result = extractor.extract_sentence(&indexed, &sentence).unwrap();
//! assert_eq!(result.candidates[0].to_string(), "A B (glue 1.0)");
//! ```

pub mod corpus;
pub mod error;
pub mod glue;
pub mod index;
pub mod localmaxs;
pub mod provider;
pub mod types;
pub mod vocabulary;

pub use corpus::{Corpus, CorpusBuilder, Sentence, Sentences};
pub use error::{CoreError, Result};
pub use glue::{Dice, GlueFunction, GlueKind, ProbabilitySource, Scp};
pub use index::{IndexedCorpus, NgramCounter, SuffixIndex};
pub use localmaxs::{ExtractionConfig, LocalMaxsExtractor, SentenceContext, SentenceSelection};
pub use provider::{ArrayHandle, ArrayMetadata, CorpusProvider, IndexHandle};
pub use types::{
    Candidate, DecodedCandidate, NgramKey, SentenceCandidates, TokenId, SEPARATOR,
};
pub use vocabulary::Vocabulary;
