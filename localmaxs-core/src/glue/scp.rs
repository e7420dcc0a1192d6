//! Symmetric conditional probability

use super::{average_over_splits, GlueFunction, ProbabilitySource};
use crate::types::TokenId;

/// Symmetric conditional probability, the reference LocalMaxs glue
///
/// `p(g)^2` for a unigram; otherwise `p(g)^2 / avp` where `avp` is the mean of
/// `p(prefix) * p(suffix)` over the `n - 1` binary splits, and zero when
/// `avp` is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scp;

impl GlueFunction for Scp {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn score(&self, ngram: &[TokenId], probabilities: &mut dyn ProbabilitySource) -> f64 {
        if ngram.is_empty() {
            return 0.0;
        }

        let main = probabilities.probability(ngram).powi(2);
        if ngram.len() == 1 {
            return main;
        }

        let avp = average_over_splits(ngram, probabilities, |prefix, suffix| prefix * suffix);
        if avp > 0.0 {
            main / avp
        } else {
            0.0
        }
    }
}
