//! Current conditions for a single location.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    condition::WeatherCondition,
    error::{ForecastError, Result},
    model::Condition,
    time_of_day::TimeOfDay,
};

/// A current-weather record as reported by the source. Times are local.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentObservation {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub feels_like: f64,
    /// Minimum currently observed across the area, not a daily minimum.
    pub temperature_minimum: f64,
    pub temperature_maximum: f64,
    /// Percent.
    pub humidity: u8,
    /// hPa.
    pub pressure: u32,
    /// m/s.
    pub wind_speed: f64,
    /// Meteorological degrees.
    pub wind_direction: u16,
    #[serde(default)]
    pub wind_gust: Option<f64>,
    /// Cloud cover percent.
    pub cloudiness: u8,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub weather_condition: WeatherCondition,
    pub time_of_day: TimeOfDay,
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub temperature_minimum: f64,
    pub temperature_maximum: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub wind_direction: u16,
    pub wind_gust: Option<f64>,
    pub cloudiness: u8,
    pub date: NaiveDateTime,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

/// Classifies a current-weather record using its first condition entry.
pub fn current_view(observation: &CurrentObservation) -> Result<CurrentWeather> {
    let condition = observation.conditions.first().ok_or(ForecastError::MissingConditions {
        index: 0,
        timestamp: observation.timestamp,
    })?;

    Ok(CurrentWeather {
        weather_condition: WeatherCondition::classify(condition.code),
        time_of_day: TimeOfDay::classify(&observation.timestamp),
        description: condition.description.clone(),
        temperature: observation.temperature,
        feels_like: observation.feels_like,
        temperature_minimum: observation.temperature_minimum,
        temperature_maximum: observation.temperature_maximum,
        humidity: observation.humidity,
        pressure: observation.pressure,
        wind_speed: observation.wind_speed,
        wind_direction: observation.wind_direction,
        wind_gust: observation.wind_gust,
        cloudiness: observation.cloudiness,
        date: observation.timestamp,
        sunrise: observation.sunrise,
        sunset: observation.sunset,
    })
}
