//! Extraction configuration

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Default configuration constants
pub mod defaults {
    /// Smallest ngram size to emit
    pub const MIN_NGRAM: usize = 2;

    /// Largest ngram size to evaluate
    pub const MAX_NGRAM: usize = 8;
}

/// Ngram size bounds of one extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Smallest ngram size to emit (unigrams are never emitted)
    pub min_ngram: usize,
    /// Largest ngram size to evaluate; ngrams of exactly this size are
    /// evaluated but never emitted
    pub max_ngram: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_ngram: defaults::MIN_NGRAM,
            max_ngram: defaults::MAX_NGRAM,
        }
    }
}

impl ExtractionConfig {
    /// Create a validated configuration
    pub fn new(min_ngram: usize, max_ngram: usize) -> Result<Self> {
        let config = Self {
            min_ngram,
            max_ngram,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds below one or inverted bounds
    pub fn validate(&self) -> Result<()> {
        if self.min_ngram < 1 {
            return Err(CoreError::Configuration(
                "min_ngram must be at least 1".into(),
            ));
        }
        if self.max_ngram < 1 {
            return Err(CoreError::Configuration(
                "max_ngram must be at least 1".into(),
            ));
        }
        if self.max_ngram < self.min_ngram {
            return Err(CoreError::Configuration(format!(
                "max_ngram ({}) must not be smaller than min_ngram ({})",
                self.max_ngram, self.min_ngram
            )));
        }
        Ok(())
    }

    /// Ngram sizes that may appear in the output
    ///
    /// Unigrams are a base case and `max_ngram`-sized ngrams were never
    /// compared against a larger neighbour, so neither is emitted.
    pub fn emitted_sizes(&self) -> Range<usize> {
        self.min_ngram.max(2)..self.max_ngram
    }
}
