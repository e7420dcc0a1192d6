//! Property tests for suffix-index counting

use localmaxs_core::{Corpus, IndexedCorpus, TokenId, Vocabulary, SEPARATOR};
use proptest::prelude::*;

const ALPHABET: TokenId = 4;

fn vocabulary() -> Vocabulary {
    Vocabulary::from_entries((1..=ALPHABET).map(|id| (format!("t{id}"), id))).unwrap()
}

fn flatten(sentences: &[Vec<TokenId>]) -> Vec<TokenId> {
    let mut tokens = Vec::new();
    for sentence in sentences {
        tokens.extend_from_slice(sentence);
        tokens.push(SEPARATOR);
    }
    tokens
}

/// Occurrences of `ngram` inside sentences, by scanning every window
fn brute_force_count(sentences: &[Vec<TokenId>], ngram: &[TokenId]) -> usize {
    sentences
        .iter()
        .filter(|s| s.len() >= ngram.len())
        .map(|s| s.windows(ngram.len()).filter(|w| *w == ngram).count())
        .sum()
}

fn sentences_strategy() -> impl Strategy<Value = Vec<Vec<TokenId>>> {
    prop::collection::vec(prop::collection::vec(1..=ALPHABET, 0..10), 0..12)
}

fn ngram_strategy() -> impl Strategy<Value = Vec<TokenId>> {
    prop::collection::vec(1..=ALPHABET, 1..5)
}

proptest! {
    #[test]
    fn count_matches_brute_force(sentences in sentences_strategy(), ngram in ngram_strategy()) {
        let indexed = IndexedCorpus::build(vocabulary(), Corpus::from_tokens(flatten(&sentences))).unwrap();
        prop_assert_eq!(indexed.counter().count(&ngram), brute_force_count(&sentences, &ngram));
    }

    #[test]
    fn appending_a_token_never_increases_count(
        sentences in sentences_strategy(),
        ngram in ngram_strategy(),
        extra in 1..=ALPHABET,
    ) {
        let indexed = IndexedCorpus::build(vocabulary(), Corpus::from_tokens(flatten(&sentences))).unwrap();
        let counter = indexed.counter();

        let mut longer = ngram.clone();
        longer.push(extra);
        prop_assert!(counter.count(&longer) <= counter.count(&ngram));
    }

    #[test]
    fn unknown_token_counts_zero(sentences in sentences_strategy(), ngram in ngram_strategy(), at in 0usize..5) {
        let indexed = IndexedCorpus::build(vocabulary(), Corpus::from_tokens(flatten(&sentences))).unwrap();

        let mut with_unknown = ngram.clone();
        let at = at.min(with_unknown.len());
        with_unknown.insert(at, ALPHABET + 10);
        prop_assert_eq!(indexed.counter().count(&with_unknown), 0);
    }

    #[test]
    fn occurrences_start_with_the_ngram(sentences in sentences_strategy(), ngram in ngram_strategy()) {
        let tokens = flatten(&sentences);
        let indexed = IndexedCorpus::build(vocabulary(), Corpus::from_tokens(tokens.clone())).unwrap();

        for position in indexed.index().occurrences(&ngram) {
            prop_assert_eq!(&tokens[position..position + ngram.len()], ngram.as_slice());
        }
    }
}

#[test]
fn test_alternating_example_counts() {
    let vocab = Vocabulary::from_entries([("A", 1), ("B", 2)]).unwrap();
    let indexed = IndexedCorpus::build(vocab, Corpus::new(vec![1, 2, 1, 2, 0], 4)).unwrap();
    let counter = indexed.counter();

    assert_eq!(counter.count(&[1, 2]), 2);
    assert_eq!(counter.count(&[2, 1]), 1);
    assert_eq!(counter.count(&[1, 2, 1]), 1);
}

#[test]
fn test_suffix_order_is_sorted() {
    let tokens = vec![3, 1, 2, 0, 1, 2, 1, 0, 2, 2, 3, 0, 1];
    let indexed = IndexedCorpus::build(vocabulary(), Corpus::from_tokens(tokens.clone())).unwrap();

    // Suffixes truncated after their first separator must be non-decreasing
    let truncated = |p: u32| -> Vec<Option<TokenId>> {
        let mut out = Vec::new();
        for &t in &tokens[p as usize..] {
            out.push(Some(t));
            if t == SEPARATOR {
                return out;
            }
        }
        out.push(None);
        out
    };

    let suffixes = indexed.index().suffixes();
    assert_eq!(suffixes.len(), tokens.len());
    for pair in suffixes.windows(2) {
        assert!(truncated(pair[0]) <= truncated(pair[1]));
    }
}
