//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Hourly observation and summary models
//! - Time-of-day and weather-condition classifiers
//! - The aggregator producing hourly and daily views
//! - The current-conditions view
//! - Parsers for raw forecast documents and configuration handling
//!
//! It is used by `forecast-cli`, but the aggregation is pure and can be
//! reused by any rendering layer.

pub mod condition;
pub mod config;
pub mod current;
pub mod error;
pub mod forecast;
pub mod model;
pub mod source;
pub mod time_of_day;

pub use condition::WeatherCondition;
pub use config::Config;
pub use current::{CurrentObservation, CurrentWeather, current_view};
pub use error::ForecastError;
pub use forecast::{DayCoverage, ForecastAggregator};
pub use model::{Condition, HourlyObservation, WeatherSummary};
pub use source::{ForecastParser, SourceFormat, parser_for};
pub use time_of_day::TimeOfDay;
