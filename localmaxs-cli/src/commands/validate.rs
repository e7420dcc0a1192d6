//! Validate command implementation

use crate::error::CliError;
use crate::input::HandleReader;
use anyhow::Result;
use clap::Args;
use localmaxs_core::{corpus::count_real_tokens, ArrayHandle, CorpusProvider, TokenId};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Index handle file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,
}

/// Consistency findings for one array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayReport {
    /// Corpus ids without a symbol, with their first position
    pub unknown_ids: BTreeMap<TokenId, usize>,
    /// Declared corpus size, when it disagrees with the real token count
    pub size_mismatch: Option<(usize, usize)>,
    /// Sentences in the corpus
    pub sentences: usize,
}

impl ArrayReport {
    /// Check one array
    pub fn check(array: &ArrayHandle) -> Self {
        let real = count_real_tokens(&array.corpus);
        let size_mismatch = match array.metadata.corpus_size {
            Some(declared) if declared != real => Some((declared, real)),
            _ => None,
        };
        let (_, corpus) = array.clone().into_parts();

        Self {
            unknown_ids: array.unknown_ids(),
            size_mismatch,
            sentences: corpus.sentence_count(),
        }
    }

    /// Whether the array can be extracted from safely
    pub fn is_valid(&self) -> bool {
        self.unknown_ids.is_empty()
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating index handle: {}", self.input.display());

        let handle = HandleReader::read(&self.input)?;
        let mut invalid = Vec::new();

        for name in handle.names() {
            let Some(array) = handle.array(name) else {
                continue;
            };
            let report = ArrayReport::check(array);

            println!(
                "  {name}: {} tokens, {} sentences, {} symbols",
                array.corpus.len(),
                report.sentences,
                array.symbols.len()
            );
            if let Some((declared, real)) = report.size_mismatch {
                println!("    warning: corpus_size is {declared} but the corpus has {real} tokens");
            }
            for (id, position) in &report.unknown_ids {
                println!("    error: token id {id} at position {position} has no symbol");
            }
            if !report.is_valid() {
                invalid.push(name.to_string());
            }
        }

        if invalid.is_empty() {
            println!("✓ Index handle is valid!");
            Ok(())
        } else {
            println!("✗ Index handle is invalid!");
            Err(CliError::ValidationFailed(format!(
                "inconsistent arrays: {}",
                invalid.join(", ")
            ))
            .into())
        }
    }
}
