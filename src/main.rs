//! Jobfit: job posting compatibility scoring and profile improvement suggestions

mod cli;
mod config;
mod engine;
mod error;
mod output;
mod samples;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use engine::analyzer::CompatibilityEngine;
use engine::profile::CandidateProfile;
use engine::suggestions::SuggestionRules;
use engine::vocabulary::Vocabulary;
use error::{JobfitError, Result};
use log::{error, info};
use output::formatter::ReportGenerator;
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            posting,
            sample,
            profile,
            detailed,
            output,
            save,
        } => {
            info!("Starting posting compatibility analysis");

            let output_format = cli::parse_output_format(&output).map_err(JobfitError::InvalidInput)?;

            let posting_text = load_posting(posting, sample)?;
            let profile = load_profile(profile)?;

            let engine = CompatibilityEngine::new(
                Vocabulary::default(),
                config.scoring_policy(),
                SuggestionRules::default(),
            );

            info!(
                "Analyzing {} characters against {} vocabulary patterns",
                posting_text.len(),
                engine.vocabulary().len()
            );

            let detailed_flag = detailed || config.output.detailed;
            let report = engine.analyze_detailed(&posting_text, &profile);

            let generator = ReportGenerator::new(config.output.color_output, detailed_flag);
            let rendered = generator.generate(&report, output_format)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Samples => {
            println!("📚 Bundled sample postings\n");
            for (i, sample) in samples::SAMPLE_POSTINGS.iter().enumerate() {
                println!("  {}. {}", i + 1, sample.title);
            }
            println!("\n💡 Analyze one with: jobfit analyze --sample <n>");
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Scoring:");
                println!("  Neutral score (no requirements found): {}%", config.scoring.neutral_score);
                println!("  Maximum score: {}%", config.scoring.max_percent);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Resolve the posting text from a file path or a bundled sample index.
fn load_posting(posting: Option<PathBuf>, sample: Option<usize>) -> Result<String> {
    if let Some(index) = sample {
        let sample = samples::get(index).ok_or_else(|| {
            JobfitError::InvalidInput(format!(
                "No sample posting #{}. There are {} samples; run `jobfit samples` to list them",
                index,
                samples::SAMPLE_POSTINGS.len()
            ))
        })?;
        println!("💼 Sample posting: {}\n", sample.title);
        return Ok(sample.text.to_string());
    }

    let path = posting.ok_or_else(|| {
        JobfitError::InvalidInput("Provide a posting with --posting <file> or --sample <n>".to_string())
    })?;
    Ok(std::fs::read_to_string(path)?)
}

/// Load a candidate profile from a TOML file, or fall back to the demo profile.
fn load_profile(path: Option<PathBuf>) -> Result<CandidateProfile> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| {
                JobfitError::Configuration(format!(
                    "Failed to parse profile {}: {}",
                    path.display(),
                    e
                ))
            })
        }
        None => {
            info!("No profile supplied, using the demo profile");
            Ok(CandidateProfile::default())
        }
    }
}
