//! Association-strength ("glue") measures
//!
//! The extractor only relies on [`GlueFunction`]: given an ngram, return a
//! non-negative score where higher means more cohesive. Measures read ngram
//! probabilities through [`ProbabilitySource`], which lets the per-sentence
//! context memoize every sub-ngram lookup.

mod dice;
mod scp;

pub use dice::Dice;
pub use scp::Scp;

use crate::error::CoreError;
use crate::index::NgramCounter;
use crate::types::TokenId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Source of ngram probabilities
pub trait ProbabilitySource {
    /// Relative frequency of the ngram in the corpus
    fn probability(&mut self, ngram: &[TokenId]) -> f64;
}

impl ProbabilitySource for NgramCounter<'_> {
    fn probability(&mut self, ngram: &[TokenId]) -> f64 {
        NgramCounter::probability(self, ngram)
    }
}

/// Pluggable association-strength measure
pub trait GlueFunction: Send + Sync + fmt::Debug {
    /// Short identifier of the measure
    fn name(&self) -> &'static str;

    /// Score an ngram; non-negative, higher means more cohesive
    fn score(&self, ngram: &[TokenId], probabilities: &mut dyn ProbabilitySource) -> f64;
}

/// Average of `combine(p(prefix), p(suffix))` over every binary split
///
/// This is the "fair dispersion" normalisation shared by the LocalMaxs
/// measures. Returns zero for ngrams shorter than two tokens.
pub fn average_over_splits<F>(
    ngram: &[TokenId],
    probabilities: &mut dyn ProbabilitySource,
    mut combine: F,
) -> f64
where
    F: FnMut(f64, f64) -> f64,
{
    let n = ngram.len();
    if n < 2 {
        return 0.0;
    }

    let total: f64 = (1..n)
        .map(|i| {
            let prefix = probabilities.probability(&ngram[..i]);
            let suffix = probabilities.probability(&ngram[i..]);
            combine(prefix, suffix)
        })
        .sum();
    total / (n - 1) as f64
}

/// Built-in glue measures, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlueKind {
    /// Symmetric conditional probability
    #[default]
    Scp,
    /// Dice coefficient with fair dispersion
    Dice,
}

impl GlueKind {
    /// Every built-in measure
    pub const ALL: [GlueKind; 2] = [GlueKind::Scp, GlueKind::Dice];

    /// Name used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            GlueKind::Scp => "scp",
            GlueKind::Dice => "dice",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            GlueKind::Scp => "symmetric conditional probability (default)",
            GlueKind::Dice => "Dice coefficient with fair dispersion",
        }
    }

    /// Instantiate the measure
    pub fn build(&self) -> Arc<dyn GlueFunction> {
        match self {
            GlueKind::Scp => Arc::new(Scp),
            GlueKind::Dice => Arc::new(Dice),
        }
    }
}

impl fmt::Display for GlueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlueKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scp" => Ok(GlueKind::Scp),
            "dice" => Ok(GlueKind::Dice),
            _ => Err(CoreError::UnknownGlue(s.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::ProbabilitySource;
    use crate::types::TokenId;
    use std::collections::HashMap;

    /// Fixed probability table; unknown ngrams have probability zero
    #[derive(Default)]
    pub struct TableSource {
        pub table: HashMap<Vec<TokenId>, f64>,
        pub lookups: usize,
    }

    impl TableSource {
        pub fn with(entries: Vec<(Vec<TokenId>, f64)>) -> Self {
            Self {
                table: entries.into_iter().collect(),
                lookups: 0,
            }
        }
    }

    impl ProbabilitySource for TableSource {
        fn probability(&mut self, ngram: &[TokenId]) -> f64 {
            self.lookups += 1;
            self.table.get(ngram).copied().unwrap_or(0.0)
        }
    }
}
