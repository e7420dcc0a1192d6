//! Dice coefficient with fair dispersion

use super::{average_over_splits, GlueFunction, ProbabilitySource};
use crate::types::TokenId;

/// Dice coefficient generalised to ngrams by fair dispersion
///
/// `2 p(g) / avg(p(prefix) + p(suffix))`. Probabilities stand in for raw
/// frequencies since the corpus size cancels out. A unigram has no split and
/// scores zero, so it never outranks a bigram built on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dice;

impl GlueFunction for Dice {
    fn name(&self) -> &'static str {
        "dice"
    }

    fn score(&self, ngram: &[TokenId], probabilities: &mut dyn ProbabilitySource) -> f64 {
        if ngram.len() < 2 {
            return 0.0;
        }

        let joint = probabilities.probability(ngram);
        let dispersion =
            average_over_splits(ngram, probabilities, |prefix, suffix| prefix + suffix);
        if dispersion > 0.0 {
            2.0 * joint / dispersion
        } else {
            0.0
        }
    }
}
