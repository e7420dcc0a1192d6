//! Orchestration for LocalMaxs extraction
//!
//! This crate drives [`LocalMaxsExtractor`](localmaxs_core::LocalMaxsExtractor)
//! over every sentence of an indexed corpus: it picks a sequential or
//! parallel execution strategy, delivers results to a [`ResultEmitter`] in
//! corpus order, reports progress and honours an abort flag.
//!
//! ```rust
//! use localmaxs_core::{CorpusBuilder, IndexedCorpus};
//! use localmaxs_engine::{ExtractionProcessorBuilder, TextEmitter};
//!
//! let mut builder = CorpusBuilder::new();
//! builder.push_line("A B A B").unwrap();
//! let (vocabulary, corpus) = builder.build();
//! let indexed = IndexedCorpus::build(vocabulary, corpus).unwrap();
//!
//! let processor = ExtractionProcessorBuilder::new().ngram_range(2, 3).build().unwrap();
//! let mut emitter = TextEmitter::new(Vec::new());
//! processor.process(&indexed, &mut emitter).unwrap();
//!
//! let output = String::from_utf8(emitter.into_inner()).unwrap();
//! assert_eq!(output, "A B (glue 1.0)\n---\n");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod executor;
pub mod processor;
pub mod progress;

// Re-export key types
pub use config::EngineConfig;
pub use emitter::{ResultEmitter, TextEmitter};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use processor::{ExtractionProcessor, ExtractionProcessorBuilder, ProcessingSummary};
pub use progress::ProgressObserver;

// Re-export from core for convenience
pub use localmaxs_core::{GlueKind, IndexedCorpus, SentenceCandidates};
