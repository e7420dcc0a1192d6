//! Corpus encoded as one flat token-id sequence
//!
//! Sentences are separated by [`SEPARATOR`]. Every separator terminates
//! exactly one sentence, so two consecutive separators enclose an empty
//! sentence. Tokens after the last separator form a final sentence.

use crate::error::Result;
use crate::types::{is_separator, TokenId, SEPARATOR};
use crate::vocabulary::Vocabulary;

/// Immutable token-id sequence with interspersed separators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    tokens: Vec<TokenId>,
    corpus_size: usize,
}

impl Corpus {
    /// Create a corpus with an explicit count of real tokens
    ///
    /// `corpus_size` is the probability denominator and normally equals the
    /// number of non-separator positions, but providers may supply their own.
    pub fn new(tokens: Vec<TokenId>, corpus_size: usize) -> Self {
        Self {
            tokens,
            corpus_size,
        }
    }

    /// Create a corpus whose size is the number of non-separator positions
    pub fn from_tokens(tokens: Vec<TokenId>) -> Self {
        let corpus_size = count_real_tokens(&tokens);
        Self::new(tokens, corpus_size)
    }

    /// All positions, separators included
    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }

    /// Number of real tokens, the denominator of every probability
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of positions, separators included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the corpus has no positions at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over sentences in corpus order
    pub fn sentences(&self) -> Sentences<'_> {
        Sentences {
            tokens: &self.tokens,
            cursor: 0,
            index: 0,
        }
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        let separators = self.tokens.iter().filter(|&&t| is_separator(t)).count();
        let trailing = matches!(self.tokens.last(), Some(&t) if !is_separator(t));
        separators + usize::from(trailing)
    }
}

/// Count the non-separator positions of a token sequence
pub fn count_real_tokens(tokens: &[TokenId]) -> usize {
    tokens.iter().filter(|&&t| !is_separator(t)).count()
}

/// One sentence of the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Zero-based sentence index
    pub index: usize,
    /// Corpus position of the first token
    pub start: usize,
    /// Token ids, separator excluded
    pub tokens: &'a [TokenId],
}

impl Sentence<'_> {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Iterator over the sentences of a corpus
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    tokens: &'a [TokenId],
    cursor: usize,
    index: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.tokens.len() {
            return None;
        }

        let start = self.cursor;
        let rest = &self.tokens[start..];
        let (end, next_cursor) = match rest.iter().position(|&t| is_separator(t)) {
            Some(offset) => (start + offset, start + offset + 1),
            None => (self.tokens.len(), self.tokens.len()),
        };

        let sentence = Sentence {
            index: self.index,
            start,
            tokens: &self.tokens[start..end],
        };
        self.cursor = next_cursor;
        self.index += 1;
        Some(sentence)
    }
}

/// In-memory corpus provider
///
/// Interns already-tokenized sentences and appends a separator after each.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    vocabulary: Vocabulary,
    tokens: Vec<TokenId>,
}

impl CorpusBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sentence of symbols
    ///
    /// On error the sentence is not appended.
    pub fn push_sentence<I, S>(&mut self, symbols: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = self.tokens.len();
        for symbol in symbols {
            match self.vocabulary.intern(symbol.as_ref()) {
                Ok(id) => self.tokens.push(id),
                Err(err) => {
                    self.tokens.truncate(start);
                    return Err(err);
                }
            }
        }
        self.tokens.push(SEPARATOR);
        Ok(self)
    }

    /// Append one sentence given as whitespace-separated symbols
    pub fn push_line(&mut self, line: &str) -> Result<&mut Self> {
        self.push_sentence(line.split_whitespace())
    }

    /// Finish building
    pub fn build(self) -> (Vocabulary, Corpus) {
        (self.vocabulary, Corpus::from_tokens(self.tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(corpus: &Corpus) -> Vec<Vec<TokenId>> {
        corpus.sentences().map(|s| s.tokens.to_vec()).collect()
    }

    #[test]
    fn test_sentences_split_on_separator() {
        let corpus = Corpus::from_tokens(vec![1, 2, 0, 3, 0]);
        assert_eq!(collect(&corpus), vec![vec![1, 2], vec![3]]);
        assert_eq!(corpus.sentence_count(), 2);
        assert_eq!(corpus.corpus_size(), 3);
    }

    #[test]
    fn test_trailing_tokens_form_a_sentence() {
        let corpus = Corpus::from_tokens(vec![1, 0, 2, 3]);
        assert_eq!(collect(&corpus), vec![vec![1], vec![2, 3]]);
        assert_eq!(corpus.sentence_count(), 2);
    }

    #[test]
    fn test_consecutive_separators_yield_empty_sentence() {
        let corpus = Corpus::from_tokens(vec![1, 0, 0, 2, 0]);
        let sentences: Vec<_> = corpus.sentences().collect();
        assert_eq!(sentences.len(), 3);
        assert!(sentences[1].is_empty());
        assert_eq!(sentences[2].index, 2);
        assert_eq!(sentences[2].start, 3);
        assert_eq!(corpus.sentence_count(), 3);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::from_tokens(Vec::new());
        assert!(corpus.is_empty());
        assert_eq!(corpus.sentences().count(), 0);
        assert_eq!(corpus.sentence_count(), 0);
    }

    #[test]
    fn test_builder_interns_and_separates() {
        let mut builder = CorpusBuilder::new();
        builder
            .push_line("A B A B")
            .unwrap()
            .push_sentence(["B", "C"])
            .unwrap();
        let (vocab, corpus) = builder.build();

        assert_eq!(corpus.tokens(), &[1, 2, 1, 2, 0, 2, 3, 0]);
        assert_eq!(corpus.corpus_size(), 6);
        assert_eq!(vocab.id_of("C"), Some(3));
    }
}
