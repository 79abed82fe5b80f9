use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{condition::WeatherCondition, time_of_day::TimeOfDay};

/// A single weather-condition entry as reported by the forecast source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub code: i32,
    pub description: String,
}

/// One raw forecast data point.
///
/// `timestamp` is local wall-clock time: its date is the calendar day the
/// observation belongs to and its hour drives the time-of-day label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub conditions: Vec<Condition>,
}

impl HourlyObservation {
    pub fn new(timestamp: NaiveDateTime, temperature: f64, code: i32, description: &str) -> Self {
        Self {
            timestamp,
            temperature,
            conditions: vec![Condition { code, description: description.to_string() }],
        }
    }

    /// Only the first condition entry is used for classification.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.conditions.first()
    }
}

/// Presentation view for one hour or one calendar day.
///
/// Daily summaries leave `description` unset and carry min/max temperatures;
/// hourly summaries do the opposite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub weather_condition: WeatherCondition,
    pub time_of_day: TimeOfDay,
    pub description: Option<String>,
    pub temperature: f64,
    pub temperature_minimum: Option<f64>,
    pub temperature_maximum: Option<f64>,
    pub date: NaiveDateTime,
}

impl WeatherSummary {
    pub fn is_daily(&self) -> bool {
        self.time_of_day == TimeOfDay::Undefined
    }
}
