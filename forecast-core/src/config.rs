use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    forecast::{DayCoverage, ForecastAggregator},
    source::SourceFormat,
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// default_format = "openweather"
/// day_coverage = "through-last-day"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default forecast document format, e.g. "openweather" or "native".
    pub default_format: Option<String>,

    #[serde(default)]
    pub day_coverage: DayCoverage,
}

impl Config {
    /// Return the default format as a strongly-typed SourceFormat.
    pub fn default_format_id(&self) -> Result<SourceFormat> {
        let s = self.default_format.as_ref().ok_or_else(|| {
            anyhow!(
                "No default forecast format configured.\n\
                 Hint: run `forecast configure` or pass `--format <format>`."
            )
        })?;

        SourceFormat::try_from(s.as_str())
    }

    /// Store default format as string.
    pub fn set_default_format(&mut self, format: SourceFormat) {
        self.default_format = Some(format.as_str().to_string());
    }

    pub fn set_day_coverage(&mut self, day_coverage: DayCoverage) {
        self.day_coverage = day_coverage;
    }

    pub fn aggregator(&self) -> ForecastAggregator {
        ForecastAggregator::new(self.day_coverage)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-engine", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
