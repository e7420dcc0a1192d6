//! LocalMaxs multiword-expression extraction
//!
//! For each sentence every ngram up to `max_ngram` tokens is scored with a
//! [`GlueFunction`](crate::glue::GlueFunction). An ngram is kept when its glue
//! is not exceeded by either of its immediate sub-ngrams; an ngram that is at
//! least as strong as a sub-ngram absorbs it.

mod config;
mod context;
mod extractor;

pub use config::{defaults, ExtractionConfig};
pub use context::SentenceContext;
pub use extractor::{LocalMaxsExtractor, SentenceSelection};
