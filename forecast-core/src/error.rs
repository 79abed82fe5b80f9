use chrono::NaiveDateTime;
use thiserror::Error;

/// Precondition violations detected by the aggregator entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("Forecast contains no observations; at least one hourly observation is required")]
    EmptyInput,

    #[error("Observation #{index} at {timestamp} has no weather condition entries")]
    MissingConditions { index: usize, timestamp: NaiveDateTime },
}

pub type Result<T> = std::result::Result<T, ForecastError>;
