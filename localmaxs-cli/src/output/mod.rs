//! Output formatting module

use localmaxs_engine::{ResultEmitter, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
///
/// A formatter receives the sentences of each input file through
/// [`ResultEmitter`], framed by [`begin_source`](Self::begin_source) calls,
/// and writes any trailing output in [`close`](Self::close).
pub trait OutputFormatter: ResultEmitter {
    /// Start the results of one input file
    fn begin_source(&mut self, source: &str) -> Result<()>;

    /// Finalize output after the last input file
    fn close(&mut self) -> Result<()>;

    /// View as the engine's sink
    fn as_emitter(&mut self) -> &mut dyn ResultEmitter;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One candidate per line, `---` after each sentence
    Text,
    /// JSON array of per-file results
    Json,
    /// Markdown table per file
    Markdown,
}

impl OutputFormat {
    /// Every supported format
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "candidate lines with glue, `---` after each sentence",
            OutputFormat::Json => "JSON array of per-file sentence results",
            OutputFormat::Markdown => "Markdown table of candidates per file",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
