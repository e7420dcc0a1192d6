//! Per-sentence memo tables
//!
//! A [`SentenceContext`] owns the glue and selection tables of one sentence
//! and is dropped once the sentence has been emitted. Nothing here outlives
//! the sentence.

use crate::glue::{GlueFunction, ProbabilitySource};
use crate::index::NgramCounter;
use crate::types::{NgramKey, TokenId};
use std::collections::HashMap;

/// Probability lookups memoized for the duration of one sentence
#[derive(Debug)]
struct MemoizedProbabilities<'c> {
    counter: NgramCounter<'c>,
    cache: HashMap<NgramKey, f64>,
}

impl ProbabilitySource for MemoizedProbabilities<'_> {
    fn probability(&mut self, ngram: &[TokenId]) -> f64 {
        if let Some(&p) = self.cache.get(ngram) {
            return p;
        }
        let p = self.counter.probability(ngram);
        self.cache.insert(NgramKey::from_slice(ngram), p);
        p
    }
}

/// Glue values and selection flags of every ngram seen in one sentence
#[derive(Debug)]
pub struct SentenceContext<'c> {
    probabilities: MemoizedProbabilities<'c>,
    glue: HashMap<NgramKey, f64>,
    selected: HashMap<NgramKey, bool>,
    order: Vec<NgramKey>,
}

impl<'c> SentenceContext<'c> {
    /// Create empty tables backed by `counter`
    pub fn new(counter: NgramCounter<'c>) -> Self {
        Self {
            probabilities: MemoizedProbabilities {
                counter,
                cache: HashMap::new(),
            },
            glue: HashMap::new(),
            selected: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Score `ngram` once and mark it selected; repeated keys are ignored
    pub fn record(&mut self, ngram: &[TokenId], glue: &dyn GlueFunction) -> f64 {
        if let Some(&value) = self.glue.get(ngram) {
            return value;
        }

        let value = glue.score(ngram, &mut self.probabilities);
        let key = NgramKey::from_slice(ngram);
        self.glue.insert(key.clone(), value);
        self.selected.insert(key.clone(), true);
        self.order.push(key);
        value
    }

    /// Clear the selection flag of `ngram`; flags are never set back
    pub fn deselect(&mut self, ngram: &[TokenId]) {
        if let Some(flag) = self.selected.get_mut(ngram) {
            *flag = false;
        }
    }

    /// Glue value of a recorded ngram
    pub fn glue_of(&self, ngram: &[TokenId]) -> Option<f64> {
        self.glue.get(ngram).copied()
    }

    /// Selection flag of a recorded ngram
    pub fn is_selected(&self, ngram: &[TokenId]) -> Option<bool> {
        self.selected.get(ngram).copied()
    }

    /// Recorded keys, by size then first start offset
    pub fn keys(&self) -> &[NgramKey] {
        &self.order
    }

    /// Number of distinct ngrams recorded
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
