//! Suffix ordering of corpus positions
//!
//! Positions are sorted by the token-id suffix starting at each of them.
//! Comparison stops at the first separator both suffixes share at the same
//! offset (or at the end of the corpus), and such ties are broken by the
//! position itself, which makes the order total and the build deterministic.
//!
//! Missing positions past the end of the corpus compare below the separator,
//! and the separator compares below every real token. Because a query ngram
//! never contains the separator, all suffixes starting with that ngram form
//! one contiguous block of the ordering.

use crate::corpus::Corpus;
use crate::error::{CoreError, Result};
use crate::types::{TokenId, SEPARATOR};
use std::cmp::Ordering;
use std::ops::Range;

/// Suffix array over a corpus
///
/// Owns the corpus for the lifetime of the query session. Positions are
/// stored as `u32`, half the footprint of `usize` on 64-bit targets.
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    corpus: Corpus,
    suffixes: Vec<u32>,
}

impl SuffixIndex {
    /// Largest number of corpus positions the index can address
    pub const MAX_POSITIONS: usize = u32::MAX as usize;

    /// Sort every corpus position by its suffix
    ///
    /// This is the one expensive setup step; it runs once per corpus and the
    /// index is read-only afterwards.
    pub fn build(corpus: Corpus) -> Result<Self> {
        let len = corpus.len();
        if len > Self::MAX_POSITIONS {
            return Err(CoreError::CorpusTooLarge {
                len,
                max: Self::MAX_POSITIONS,
            });
        }

        let tokens = corpus.tokens();
        let mut suffixes: Vec<u32> = (0..len as u32).collect();

        #[cfg(feature = "parallel")]
        {
            use rayon::slice::ParallelSliceMut;
            suffixes.par_sort_unstable_by(|&a, &b| compare_suffixes(tokens, a as usize, b as usize));
        }

        #[cfg(not(feature = "parallel"))]
        suffixes.sort_unstable_by(|&a, &b| compare_suffixes(tokens, a as usize, b as usize));

        Ok(Self { corpus, suffixes })
    }

    /// The indexed corpus
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Sorted corpus positions
    pub fn suffixes(&self) -> &[u32] {
        &self.suffixes
    }

    /// Number of indexed positions
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Half-open block of index entries whose suffix starts with `ngram`
    ///
    /// Two binary searches: the lower bound is the first entry not ordered
    /// before the ngram, the upper bound the first entry ordered after it.
    /// An absent ngram yields an empty range.
    pub fn range(&self, ngram: &[TokenId]) -> Range<usize> {
        if ngram.is_empty() || ngram.contains(&SEPARATOR) {
            return 0..0;
        }

        let tokens = self.corpus.tokens();
        let lower = self
            .suffixes
            .partition_point(|&p| compare_prefix(tokens, p as usize, ngram) == Ordering::Less);
        let upper = lower
            + self.suffixes[lower..]
                .partition_point(|&p| compare_prefix(tokens, p as usize, ngram) != Ordering::Greater);

        lower..upper
    }

    /// Number of occurrences of `ngram` in the corpus
    pub fn count(&self, ngram: &[TokenId]) -> usize {
        self.range(ngram).len()
    }

    /// Corpus positions where `ngram` starts, in suffix order
    pub fn occurrences(&self, ngram: &[TokenId]) -> impl Iterator<Item = usize> + '_ {
        let range = self.range(ngram);
        self.suffixes[range].iter().map(|&p| p as usize)
    }
}

/// Total order over suffixes bounded by the first shared separator
fn compare_suffixes(tokens: &[TokenId], a: usize, b: usize) -> Ordering {
    let mut offset = 0;
    loop {
        let x = tokens.get(a + offset).copied();
        let y = tokens.get(b + offset).copied();
        match x.cmp(&y) {
            Ordering::Equal => match x {
                None | Some(SEPARATOR) => return a.cmp(&b),
                Some(_) => offset += 1,
            },
            other => return other,
        }
    }
}

/// Compare the suffix at `position`, truncated to `ngram.len()` tokens, with `ngram`
///
/// A suffix that runs out of corpus compares as smaller, and one that
/// matches all of the ngram's tokens compares equal even if it is longer.
fn compare_prefix(tokens: &[TokenId], position: usize, ngram: &[TokenId]) -> Ordering {
    for (offset, &expected) in ngram.iter().enumerate() {
        match tokens.get(position + offset) {
            None => return Ordering::Less,
            Some(&actual) if actual != expected => return actual.cmp(&expected),
            Some(_) => {}
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(tokens: Vec<TokenId>) -> SuffixIndex {
        SuffixIndex::build(Corpus::from_tokens(tokens)).unwrap()
    }

    /// Occurrences of `ngram` as a contiguous subsequence, by scanning
    fn brute_force_count(tokens: &[TokenId], ngram: &[TokenId]) -> usize {
        if ngram.is_empty() || ngram.len() > tokens.len() {
            return 0;
        }
        tokens.windows(ngram.len()).filter(|w| *w == ngram).count()
    }

    #[test]
    fn test_suffix_order_for_abab() {
        // A=1 B=2: suffixes "0"@4, "ABAB0"@0, "AB0"@2, "BAB0"@1, "B0"@3
        let idx = index(vec![1, 2, 1, 2, 0]);
        assert_eq!(idx.suffixes(), &[4, 2, 0, 3, 1]);
    }

    #[test]
    fn test_counts_for_abab() {
        let idx = index(vec![1, 2, 1, 2, 0]);
        assert_eq!(idx.count(&[1, 2]), 2);
        assert_eq!(idx.count(&[2, 1]), 1);
        assert_eq!(idx.count(&[1, 2, 1]), 1);
        assert_eq!(idx.count(&[1]), 2);
        assert_eq!(idx.count(&[2]), 2);
        assert_eq!(idx.count(&[2, 2]), 0);
    }

    #[test]
    fn test_range_boundaries_are_half_open() {
        let idx = index(vec![1, 2, 1, 2, 0]);
        // "AB0"@2 and "ABAB0"@0 sit at entries 1 and 2
        assert_eq!(idx.range(&[1, 2]), 1..3);
        // "BAB0"@1 is entry 4, the last one
        assert_eq!(idx.range(&[2, 1]), 4..5);
        // absent ngrams collapse to an empty range at their insertion point
        let absent = idx.range(&[1, 1]);
        assert!(absent.is_empty());
        assert_eq!(absent.start, 1);
        // an ngram sorting after every suffix lands at the end
        let past_end = idx.range(&[9]);
        assert_eq!(past_end, 5..5);
    }

    #[test]
    fn test_separator_and_empty_queries_count_zero() {
        let idx = index(vec![1, 2, 0, 1, 2, 0]);
        assert_eq!(idx.count(&[]), 0);
        assert_eq!(idx.count(&[0]), 0);
        assert_eq!(idx.count(&[2, 0]), 0);
    }

    #[test]
    fn test_ngrams_do_not_cross_sentences() {
        // "B A" only spans the separator, so it never occurs
        let idx = index(vec![1, 2, 0, 1, 2, 0]);
        assert_eq!(idx.count(&[2, 1]), 0);
        assert_eq!(idx.count(&[1, 2]), 2);
    }

    #[test]
    fn test_suffix_running_off_the_end() {
        // No trailing separator: the last suffix is a bare "B"
        let idx = index(vec![1, 2, 0, 2]);
        assert_eq!(idx.count(&[2]), 2);
        assert_eq!(idx.count(&[2, 1]), 0);
        assert_eq!(idx.count(&[1, 2]), 1);
    }

    #[test]
    fn test_occurrences_report_positions() {
        let idx = index(vec![3, 1, 2, 0, 1, 2, 1, 2, 0]);
        let mut positions: Vec<usize> = idx.occurrences(&[1, 2]).collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![1, 4, 6]);
    }

    #[test]
    fn test_matches_brute_force_on_hand_built_corpus() {
        let tokens = vec![
            1, 2, 3, 1, 2, 0, 2, 3, 1, 2, 3, 0, 3, 3, 3, 0, 1, 0, 2, 1, 2, 3, 1,
        ];
        let idx = index(tokens.clone());

        for a in 1..=3 {
            assert_eq!(idx.count(&[a]), brute_force_count(&tokens, &[a]));
            for b in 1..=3 {
                assert_eq!(idx.count(&[a, b]), brute_force_count(&tokens, &[a, b]));
                for c in 1..=3 {
                    let ngram = [a, b, c];
                    assert_eq!(idx.count(&ngram), brute_force_count(&tokens, &ngram));
                }
            }
        }
    }

    #[test]
    fn test_empty_corpus_index() {
        let idx = index(Vec::new());
        assert!(idx.is_empty());
        assert_eq!(idx.count(&[1]), 0);
    }
}
