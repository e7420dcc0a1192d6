//! Configuration module
//!
//! Values given on the command line override the configuration file, which
//! overrides the built-in defaults.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use localmaxs_core::{localmaxs::defaults, GlueKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceSection,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        Ok(config)
    }
}

/// Extraction-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExtractionSection {
    /// Smallest ngram size considered
    pub min_ngram: usize,

    /// Largest ngram size considered
    pub max_ngram: usize,

    /// Glue measure
    pub glue: GlueKind,

    /// Name of the corpus array to read from each index handle
    pub array: String,
}

impl Default for ExtractionSection {
    fn default() -> Self {
        Self {
            min_ngram: defaults::MIN_NGRAM,
            max_ngram: defaults::MAX_NGRAM,
            glue: GlueKind::default(),
            array: "surface".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceSection {
    /// Sentence count from which extraction runs in parallel
    pub parallel_threshold: usize,

    /// Sentences per parallel batch
    pub batch_size: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceSection {
    fn default() -> Self {
        Self {
            parallel_threshold: 2_000,
            batch_size: 512,
            worker_threads: 0,
        }
    }
}
