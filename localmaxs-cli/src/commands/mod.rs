//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use localmaxs_core::GlueKind;

use crate::output::OutputFormat;

pub mod count;
pub mod extract;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract multiword expressions from index handles
    Extract(extract::ExtractArgs),

    /// Print count, probability and glue of one ngram
    Count(count::CountArgs),

    /// Check an index handle for corpus/vocabulary consistency
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available glue measures
    Glues,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::Count(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Output lines of the listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Glues => GlueKind::ALL
                .iter()
                .map(|glue| format!("{:<10} {}", glue.as_str(), glue.description()))
                .collect(),
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|format| format!("{:<10} {}", format.as_str(), format.description()))
                .collect(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
