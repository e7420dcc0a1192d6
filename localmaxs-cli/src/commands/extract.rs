//! Extract command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, HandleReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use localmaxs_core::GlueKind;
use localmaxs_engine::{ExecutionMode, ExtractionProcessor, ExtractionProcessorBuilder};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Index handle files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Corpus array to read from each handle [default: surface]
    #[arg(short, long, value_name = "NAME")]
    pub array: Option<String>,

    /// Smallest ngram size considered [default: 2]
    #[arg(long, value_name = "N")]
    pub min_ngram: Option<usize>,

    /// Largest ngram size considered [default: 8]
    #[arg(long, value_name = "N")]
    pub max_ngram: Option<usize>,

    /// Glue measure (scp, dice) [default: scp]
    #[arg(short, long, value_name = "GLUE")]
    pub glue: Option<GlueKind>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force parallel processing even for small corpora
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractSettings {
    /// Corpus array name
    pub array: String,
    /// Smallest ngram size
    pub min_ngram: usize,
    /// Largest ngram size
    pub max_ngram: usize,
    /// Glue measure
    pub glue: GlueKind,
    /// Output format
    pub format: OutputFormat,
    /// Pretty-print JSON
    pub pretty_json: bool,
    /// Execution mode
    pub execution_mode: ExecutionMode,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
    /// Sentence count from which adaptive mode goes parallel
    pub parallel_threshold: usize,
    /// Sentences per parallel batch
    pub batch_size: usize,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting extraction");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config);
        log::debug!("Settings: {:?}", settings);

        let files = resolve_patterns(&self.input)?;
        let progress = Arc::new(ProgressReporter::new(self.quiet));
        let processor = build_processor(&settings, progress.clone())?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let mut formatter = create_formatter(settings.format, writer, settings.pretty_json);

        let mut total_candidates = 0;
        for file in &files {
            let source = file.display().to_string();
            let array = HandleReader::read_array(file, &settings.array)?;

            let unknown = array.unknown_ids();
            if !unknown.is_empty() {
                log::warn!(
                    "{source}: {} corpus ids have no symbol; run `localmaxs validate` for details",
                    unknown.len()
                );
            }

            let indexed = array
                .into_indexed()
                .with_context(|| format!("Failed to index {source}"))?;

            progress.set_source(&source);
            formatter.begin_source(&source)?;
            let summary = processor
                .process(&indexed, formatter.as_emitter())
                .map_err(|e| CliError::ProcessingError(format!("{source}: {e}")))?;

            log::info!(
                "{source}: {} candidates from {} sentences ({} mode, {:?})",
                summary.candidates,
                summary.sentences,
                summary.mode_used,
                summary.elapsed
            );
            total_candidates += summary.candidates;
        }

        formatter.close()?;
        progress.finish();
        log::info!(
            "Extracted {total_candidates} candidates from {} files",
            files.len()
        );

        Ok(())
    }

    /// Merge command-line flags over the configuration file
    pub fn settings(&self, config: &CliConfig) -> ExtractSettings {
        let execution_mode = if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        let configured_threads = match config.performance.worker_threads {
            0 => None,
            n => Some(n),
        };
        let mut threads = self.threads.or(configured_threads);
        if execution_mode == ExecutionMode::Parallel {
            threads = Some(threads.unwrap_or_else(num_cpus::get));
        }

        ExtractSettings {
            array: self
                .array
                .clone()
                .unwrap_or_else(|| config.extraction.array.clone()),
            min_ngram: self.min_ngram.unwrap_or(config.extraction.min_ngram),
            max_ngram: self.max_ngram.unwrap_or(config.extraction.max_ngram),
            glue: self.glue.unwrap_or(config.extraction.glue),
            format: self.format.unwrap_or(config.output.format),
            pretty_json: config.output.pretty_json,
            execution_mode,
            threads,
            parallel_threshold: config.performance.parallel_threshold,
            batch_size: config.performance.batch_size,
        }
    }
}

fn build_processor(
    settings: &ExtractSettings,
    progress: Arc<ProgressReporter>,
) -> Result<ExtractionProcessor> {
    let processor = ExtractionProcessorBuilder::new()
        .ngram_range(settings.min_ngram, settings.max_ngram)
        .glue(settings.glue)
        .execution_mode(settings.execution_mode)
        .threads(settings.threads)
        .parallel_threshold(settings.parallel_threshold)
        .batch_size(settings.batch_size)
        .observer(progress)
        .build()
        .map_err(|e| CliError::ConfigError(e.to_string()))?;
    Ok(processor)
}
