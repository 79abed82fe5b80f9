use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use forecast_core::{
    Config, DayCoverage, ForecastAggregator, HourlyObservation, SourceFormat, current_view,
    parser_for,
};
use inquire::Select;
use tracing::info;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Hourly and daily weather forecast views")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Path to a forecast or current-weather document.
    pub file: PathBuf,

    /// Document format, e.g. "openweather" or "native". Falls back to the configured default.
    #[arg(long)]
    pub format: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively choose the default format and day coverage.
    Configure,

    /// Show current conditions from a current-weather document.
    Current {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show one line per forecast hour.
    Hourly {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show one summary per calendar day.
    Daily {
        #[command(flatten)]
        input: InputArgs,

        /// Skip the last observed day (compatibility mode).
        #[arg(long)]
        before_last_day: bool,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure => configure(&mut config),
            Command::Current { input } => {
                let format = resolve_format(input.format.as_deref(), &config)?;
                let body = read_body(&input)?;
                let observation = parser_for(format).parse_current(&body)?;
                let current = current_view(&observation)?;
                render::print_current(&current, input.json)
            }
            Command::Hourly { input } => {
                let observations = read_observations(&input, &config)?;
                let view = config.aggregator().hourly_view(&observations)?;
                render::print(&view, input.json)
            }
            Command::Daily { input, before_last_day } => {
                let observations = read_observations(&input, &config)?;
                let aggregator = if before_last_day {
                    ForecastAggregator::new(DayCoverage::BeforeLastDay)
                } else {
                    config.aggregator()
                };
                info!(coverage = %aggregator.day_coverage(), "building daily view");
                let view = aggregator.daily_view(&observations)?;
                render::print(&view, input.json)
            }
        }
    }
}

fn resolve_format(requested: Option<&str>, config: &Config) -> anyhow::Result<SourceFormat> {
    match requested {
        Some(name) => SourceFormat::try_from(name),
        None if config.default_format.is_some() => config.default_format_id(),
        None => Ok(SourceFormat::OpenWeather),
    }
}

fn read_observations(input: &InputArgs, config: &Config) -> anyhow::Result<Vec<HourlyObservation>> {
    let format = resolve_format(input.format.as_deref(), config)?;
    let body = read_body(input)?;

    let observations = parser_for(format).parse(&body)?;
    info!(%format, count = observations.len(), "loaded observations");

    Ok(observations)
}

fn read_body(input: &InputArgs) -> anyhow::Result<String> {
    fs::read_to_string(&input.file)
        .with_context(|| format!("Failed to read forecast file: {}", input.file.display()))
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let format = Select::new("Default forecast format:", SourceFormat::all().to_vec())
        .prompt()
        .context("Format selection aborted")?;

    let day_coverage = Select::new("Daily view coverage:", DayCoverage::ALL.to_vec())
        .prompt()
        .context("Day coverage selection aborted")?;

    config.set_default_format(format);
    config.set_day_coverage(day_coverage);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_format_wins() {
        let mut cfg = Config::default();
        cfg.set_default_format(SourceFormat::OpenWeather);

        let format = resolve_format(Some("native"), &cfg).expect("known format");
        assert_eq!(format, SourceFormat::Native);
    }

    #[test]
    fn configured_default_is_used() {
        let mut cfg = Config::default();
        cfg.set_default_format(SourceFormat::Native);

        assert_eq!(resolve_format(None, &cfg).unwrap(), SourceFormat::Native);
    }

    #[test]
    fn falls_back_to_openweather() {
        assert_eq!(resolve_format(None, &Config::default()).unwrap(), SourceFormat::OpenWeather);
    }

    #[test]
    fn parses_daily_flags() {
        let cli = Cli::try_parse_from(["forecast", "daily", "f.json", "--json", "--before-last-day"])
            .expect("valid arguments");

        match cli.command {
            Command::Daily { input, before_last_day } => {
                assert!(input.json);
                assert!(before_last_day);
                assert_eq!(input.file, PathBuf::from("f.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_current_command() {
        let cli = Cli::try_parse_from(["forecast", "current", "now.json", "--format", "native"])
            .expect("valid arguments");

        match cli.command {
            Command::Current { input } => {
                assert_eq!(input.format.as_deref(), Some("native"));
                assert!(!input.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
