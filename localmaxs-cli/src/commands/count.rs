//! Count command implementation

use crate::input::HandleReader;
use anyhow::{Context, Result};
use clap::Args;
use localmaxs_core::{GlueKind, IndexedCorpus};
use std::path::PathBuf;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Index handle file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Corpus array to read
    #[arg(short, long, value_name = "NAME", default_value = "surface")]
    pub array: String,

    /// Glue measure used for the reported glue value
    #[arg(short, long, value_name = "GLUE", default_value = "scp")]
    pub glue: GlueKind,

    /// Whitespace-separated symbols of the ngram
    #[arg(value_name = "NGRAM", required = true, num_args = 1..)]
    pub ngram: Vec<String>,
}

/// Statistics of one ngram
#[derive(Debug, Clone, PartialEq)]
pub struct NgramReport {
    /// Occurrences inside sentences
    pub count: usize,
    /// Count over corpus size
    pub probability: f64,
    /// Glue under the chosen measure
    pub glue: f64,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        let array = HandleReader::read_array(&self.input, &self.array)?;
        let indexed = array
            .into_indexed()
            .with_context(|| format!("Failed to index {}", self.input.display()))?;

        let symbols = self.symbols();
        let report = ngram_report(&indexed, &symbols, self.glue);

        println!("ngram:       {}", symbols.join(" "));
        println!("count:       {}", report.count);
        println!("probability: {:?}", report.probability);
        println!("glue ({}):  {:?}", self.glue, report.glue);
        Ok(())
    }

    /// Ngram symbols, splitting arguments that contain whitespace
    pub fn symbols(&self) -> Vec<&str> {
        self.ngram
            .iter()
            .flat_map(|arg| arg.split_whitespace())
            .collect()
    }
}

/// Count, probability and glue of a symbol ngram
///
/// A symbol missing from the vocabulary yields zero for all three.
pub fn ngram_report(indexed: &IndexedCorpus, symbols: &[&str], glue: GlueKind) -> NgramReport {
    let mut counter = indexed.counter();
    match indexed.vocabulary().encode(symbols) {
        Some(ids) => NgramReport {
            count: counter.count(&ids),
            probability: counter.probability(&ids),
            glue: glue.build().score(&ids, &mut counter),
        },
        None => NgramReport {
            count: 0,
            probability: 0.0,
            glue: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localmaxs_core::{Corpus, Vocabulary};

    fn indexed() -> IndexedCorpus {
        let vocab = Vocabulary::from_entries([("A", 1), ("B", 2)]).unwrap();
        IndexedCorpus::build(vocab, Corpus::new(vec![1, 2, 1, 2, 0], 4)).unwrap()
    }

    #[test]
    fn test_report_for_known_ngram() {
        let report = ngram_report(&indexed(), &["A", "B"], GlueKind::Scp);
        assert_eq!(report.count, 2);
        assert_eq!(report.probability, 0.5);
        assert_eq!(report.glue, 1.0);
    }

    #[test]
    fn test_report_for_unknown_symbol() {
        let report = ngram_report(&indexed(), &["A", "Z"], GlueKind::Dice);
        assert_eq!(
            report,
            NgramReport {
                count: 0,
                probability: 0.0,
                glue: 0.0
            }
        );
    }

    #[test]
    fn test_symbols_split_whitespace() {
        let args = CountArgs {
            input: PathBuf::from("corpus.json"),
            array: "surface".to_string(),
            glue: GlueKind::Scp,
            ngram: vec!["new york".to_string(), "city".to_string()],
        };
        assert_eq!(args.symbols(), vec!["new", "york", "city"]);
    }
}
