//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust ngram sizes and output");
        println!("2. Use it for extraction:");
        println!(
            "   localmaxs extract -i index.json --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented configuration template holding the built-in defaults
pub fn generate_template() -> String {
    r#"# LocalMaxs extraction configuration
#
# Command-line flags override the values below.

[extraction]
# Smallest ngram size considered; emitted ngrams are never shorter than 2
min_ngram = 2

# Largest ngram size considered; ngrams of exactly this size are scored
# but never emitted
max_ngram = 8

# Glue measure: "scp" (symmetric conditional probability) or "dice"
glue = "scp"

# Corpus array read from each index handle (e.g. "surface", "lemma")
array = "surface"

[output]
# Output format: "text", "json" or "markdown"
format = "text"

# Indent JSON output
pretty_json = true

[performance]
# Sentence count from which extraction runs in parallel
parallel_threshold = 2000

# Sentences handed to the thread pool per batch
batch_size = 512

# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("localmaxs.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("localmaxs.toml"));
    }

    #[test]
    fn test_template_matches_defaults() {
        let config = CliConfig::parse(&generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("localmaxs.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[extraction]"));
        assert!(content.contains("glue = \"scp\""));
    }
}
