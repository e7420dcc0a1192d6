//! LocalMaxs selection over one sentence

use super::config::ExtractionConfig;
use super::context::SentenceContext;
use crate::corpus::Sentence;
use crate::error::{CoreError, Result};
use crate::glue::{GlueFunction, Scp};
use crate::index::{IndexedCorpus, NgramCounter};
use crate::types::{Candidate, DecodedCandidate, NgramKey, SentenceCandidates, TokenId};
use crate::vocabulary::Vocabulary;
use std::sync::Arc;

/// Selects ngrams whose glue is a local maximum among their neighbours
///
/// Holds no per-sentence state, so one extractor can serve many sentences
/// concurrently.
#[derive(Debug, Clone)]
pub struct LocalMaxsExtractor {
    config: ExtractionConfig,
    glue: Arc<dyn GlueFunction>,
}

impl LocalMaxsExtractor {
    /// Create an extractor; the configuration is validated eagerly
    pub fn new(config: ExtractionConfig, glue: Arc<dyn GlueFunction>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, glue })
    }

    /// Create an extractor scoring with symmetric conditional probability
    pub fn with_scp(config: ExtractionConfig) -> Result<Self> {
        Self::new(config, Arc::new(Scp))
    }

    /// The ngram size bounds
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// The glue measure
    pub fn glue(&self) -> &dyn GlueFunction {
        self.glue.as_ref()
    }

    /// Score every ngram of the sentence and run the absorption rule
    ///
    /// Glue is computed for all sizes `1..=max_ngram` before any comparison,
    /// so both immediate sub-ngrams of a key are always already recorded.
    /// Each key of size two or more is then compared with its
    /// drop-last-token prefix and drop-first-token suffix: a key weaker than
    /// a neighbour loses its flag, otherwise the neighbour loses its flag.
    pub fn select<'c>(&self, counter: NgramCounter<'c>, tokens: &[TokenId]) -> SentenceContext<'c> {
        let mut context = SentenceContext::new(counter);
        let glue = self.glue.as_ref();

        for size in 1..=self.config.max_ngram.min(tokens.len()) {
            for window in tokens.windows(size) {
                context.record(window, glue);
            }
        }

        let keys: Vec<NgramKey> = context
            .keys()
            .iter()
            .filter(|key| key.len() >= 2)
            .cloned()
            .collect();

        for key in &keys {
            let Some(value) = context.glue_of(key) else {
                continue;
            };
            let prefix = &key[..key.len() - 1];
            let suffix = &key[1..];

            for neighbour in [prefix, suffix] {
                let Some(neighbour_value) = context.glue_of(neighbour) else {
                    continue;
                };
                if value < neighbour_value {
                    context.deselect(key);
                } else {
                    context.deselect(neighbour);
                }
            }
        }

        context
    }

    /// Selected ngrams of one sentence, still as token ids
    pub fn extract(
        &self,
        counter: NgramCounter<'_>,
        sentence_index: usize,
        tokens: &[TokenId],
    ) -> SentenceSelection {
        let context = self.select(counter, tokens);
        let sizes = self.config.emitted_sizes();

        let candidates = context
            .keys()
            .iter()
            .filter(|key| sizes.contains(&key.len()))
            .filter(|key| context.is_selected(key) == Some(true))
            .filter_map(|key| {
                context
                    .glue_of(key)
                    .map(|glue| Candidate::new(key.clone(), glue))
            })
            .collect();

        SentenceSelection {
            sentence_index,
            candidates,
        }
    }

    /// Extract and decode one sentence of an indexed corpus
    ///
    /// Every token of the sentence must have a vocabulary entry. The first
    /// one that does not is reported as [`CoreError::IndexInconsistency`]
    /// before any scoring, whether or not it would have been selected.
    pub fn extract_sentence(
        &self,
        corpus: &IndexedCorpus,
        sentence: &Sentence<'_>,
    ) -> Result<SentenceCandidates> {
        let vocabulary = corpus.vocabulary();
        if let Some(&token_id) = sentence
            .tokens
            .iter()
            .find(|&&id| !vocabulary.contains_id(id))
        {
            return Err(CoreError::IndexInconsistency {
                token_id,
                sentence_index: sentence.index,
            });
        }

        self.extract(corpus.counter(), sentence.index, sentence.tokens)
            .decode(vocabulary)
    }
}

/// Selected ngrams of one sentence before decoding
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceSelection {
    /// Zero-based sentence index
    pub sentence_index: usize,
    /// Selected ngrams, by size then first start offset
    pub candidates: Vec<Candidate>,
}

impl SentenceSelection {
    /// Map every token id back to its symbol
    ///
    /// An id without a vocabulary entry means the corpus and vocabulary were
    /// built inconsistently and is reported rather than skipped.
    pub fn decode(&self, vocabulary: &Vocabulary) -> Result<SentenceCandidates> {
        let candidates = self
            .candidates
            .iter()
            .map(|candidate| {
                let tokens = candidate
                    .key
                    .iter()
                    .map(|&id| {
                        vocabulary
                            .symbol_of(id)
                            .map(str::to_string)
                            .ok_or(CoreError::IndexInconsistency {
                                token_id: id,
                                sentence_index: self.sentence_index,
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(DecodedCandidate {
                    tokens,
                    glue: candidate.glue,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SentenceCandidates {
            sentence_index: self.sentence_index,
            candidates,
        })
    }
}
