//! CLI interface for jobfit

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobfit")]
#[command(about = "Job posting compatibility scoring and profile improvement suggestions")]
#[command(
    long_about = "Compare a candidate profile against a free-text job posting: extract the requirements it mentions, score the overlap and suggest profile improvements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a job posting against a candidate profile
    Analyze {
        /// Path to a job posting text file
        #[arg(short, long)]
        posting: Option<PathBuf>,

        /// Use a bundled sample posting instead (1-based index)
        #[arg(long, conflicts_with = "posting")]
        sample: Option<usize>,

        /// Path to a candidate profile TOML file (defaults to the demo profile)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Include the per-category score breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List the bundled sample postings
    Samples,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_cli_parses_analyze_with_sample() {
        let cli = Cli::try_parse_from(["jobfit", "analyze", "--sample", "2", "--detailed"]).unwrap();
        match cli.command {
            Commands::Analyze {
                sample, detailed, ..
            } => {
                assert_eq!(sample, Some(2));
                assert!(detailed);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_posting_and_sample_conflict() {
        let result = Cli::try_parse_from([
            "jobfit", "analyze", "--posting", "job.txt", "--sample", "1",
        ]);
        assert!(result.is_err());
    }
}
