//! Configuration management for jobfit

use crate::engine::scoring::ScoringPolicy;
use crate::error::{JobfitError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Score reported when a posting matches no vocabulary pattern at all.
    pub neutral_score: u8,
    /// Ceiling applied to the computed percentage.
    pub max_percent: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                neutral_score: 80,
                max_percent: 95,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| JobfitError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| JobfitError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("jobfit")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.scoring.neutral_score > 100 {
            return Err(JobfitError::Configuration(format!(
                "scoring.neutral_score must be at most 100, got {}",
                self.scoring.neutral_score
            )));
        }
        if self.scoring.max_percent > 100 {
            return Err(JobfitError::Configuration(format!(
                "scoring.max_percent must be at most 100, got {}",
                self.scoring.max_percent
            )));
        }
        Ok(())
    }

    pub fn scoring_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            neutral_score: self.scoring.neutral_score,
            max_percent: self.scoring.max_percent,
        }
    }
}
