use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Deserialize;
use tracing::debug;

use crate::{
    current::CurrentObservation,
    model::{Condition, HourlyObservation},
};

use super::{ForecastParser, truncate_body};

/// OpenWeather forecast (`/data/2.5/forecast`) and current weather
/// (`/data/2.5/weather`) documents.
///
/// Unix timestamps are shifted by the location's UTC offset so the resulting
/// observations carry local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenWeatherParser;

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i32,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: u16,
    gust: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: String,
    dt: i64,
    #[serde(default)]
    timezone: i32,
    main: OwCurrentMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    clouds: OwClouds,
    sys: OwSys,
}

impl ForecastParser for OpenWeatherParser {
    fn parse(&self, body: &str) -> Result<Vec<HourlyObservation>> {
        let parsed: OwForecastResponse = serde_json::from_str(body).with_context(|| {
            format!("Failed to parse OpenWeather forecast JSON: {}", truncate_body(body))
        })?;

        let offset = utc_offset(parsed.city.timezone)?;

        debug!(city = %parsed.city.name, entries = parsed.list.len(), "parsed OpenWeather forecast");

        parsed
            .list
            .into_iter()
            .map(|entry| -> Result<HourlyObservation> {
                Ok(HourlyObservation {
                    timestamp: unix_to_local(entry.dt, offset)?,
                    temperature: entry.main.temp,
                    conditions: into_conditions(entry.weather),
                })
            })
            .collect()
    }

    fn parse_current(&self, body: &str) -> Result<CurrentObservation> {
        let parsed: OwCurrentResponse = serde_json::from_str(body).with_context(|| {
            format!("Failed to parse OpenWeather current JSON: {}", truncate_body(body))
        })?;

        let offset = utc_offset(parsed.timezone)?;

        debug!(location = %parsed.name, "parsed OpenWeather current weather");

        Ok(CurrentObservation {
            timestamp: unix_to_local(parsed.dt, offset)?,
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            temperature_minimum: parsed.main.temp_min,
            temperature_maximum: parsed.main.temp_max,
            humidity: parsed.main.humidity,
            pressure: parsed.main.pressure,
            wind_speed: parsed.wind.speed,
            wind_direction: parsed.wind.deg,
            wind_gust: parsed.wind.gust,
            cloudiness: parsed.clouds.all,
            sunrise: unix_to_local(parsed.sys.sunrise, offset)?,
            sunset: unix_to_local(parsed.sys.sunset, offset)?,
            conditions: into_conditions(parsed.weather),
        })
    }
}

fn into_conditions(weather: Vec<OwWeather>) -> Vec<Condition> {
    weather.into_iter().map(|w| Condition { code: w.id, description: w.description }).collect()
}

fn utc_offset(seconds: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(seconds)
        .ok_or_else(|| anyhow!("OpenWeather timezone offset out of range: {seconds}s"))
}

fn unix_to_local(ts: i64, offset: FixedOffset) -> Result<NaiveDateTime> {
    DateTime::from_timestamp(ts, 0)
        .map(|utc| utc.with_timezone(&offset).naive_local())
        .ok_or_else(|| anyhow!("OpenWeather document has invalid timestamp {ts}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const BODY: &str = r#"{
        "cod": "200",
        "cnt": 2,
        "list": [
            {
                "dt": 1714521600,
                "main": { "temp": 11.3, "feels_like": 10.1, "humidity": 80 },
                "weather": [{ "id": 500, "main": "Rain", "description": "light rain" }],
                "dt_txt": "2024-05-01 00:00:00"
            },
            {
                "dt": 1714532400,
                "main": { "temp": 13.9, "feels_like": 13.0, "humidity": 71 },
                "weather": [
                    { "id": 803, "main": "Clouds", "description": "broken clouds" },
                    { "id": 701, "main": "Mist", "description": "mist" }
                ],
                "dt_txt": "2024-05-01 03:00:00"
            }
        ],
        "city": { "name": "Berlin", "country": "DE", "timezone": 7200 }
    }"#;

    #[test]
    fn parses_entries_in_local_time() {
        let observations = OpenWeatherParser.parse(BODY).expect("valid document");

        assert_eq!(observations.len(), 2);
        let local = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(2, 0, 0).unwrap();
        assert_eq!(observations[0].timestamp, local);
        assert_eq!(observations[0].temperature, 11.3);
        assert_eq!(observations[0].conditions[0].code, 500);
        assert_eq!(observations[1].conditions.len(), 2);
        assert_eq!(observations[1].conditions[0].description, "broken clouds");
    }

    #[test]
    fn missing_timezone_means_utc() {
        let body = r#"{
            "list": [{ "dt": 1714521600, "main": { "temp": 1.0 }, "weather": [] }],
            "city": { "name": "Nowhere" }
        }"#;

        let observations = OpenWeatherParser.parse(body).expect("valid document");
        let utc = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(observations[0].timestamp, utc);
        assert!(observations[0].conditions.is_empty());
    }

    const CURRENT_BODY: &str = r#"{
        "coord": { "lon": 13.41, "lat": 52.52 },
        "weather": [{ "id": 521, "main": "Rain", "description": "shower rain" }],
        "main": {
            "temp": 14.6, "feels_like": 13.9, "temp_min": 13.2, "temp_max": 15.8,
            "pressure": 1009, "humidity": 77
        },
        "wind": { "speed": 5.7, "deg": 230, "gust": 9.8 },
        "clouds": { "all": 90 },
        "dt": 1714579200,
        "sys": { "country": "DE", "sunrise": 1714534860, "sunset": 1714589220 },
        "timezone": 7200,
        "name": "Berlin"
    }"#;

    #[test]
    fn parses_current_weather_in_local_time() {
        let current = OpenWeatherParser.parse_current(CURRENT_BODY).expect("valid document");

        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(current.timestamp, day.and_hms_opt(18, 0, 0).unwrap());
        assert_eq!(current.sunrise, day.and_hms_opt(5, 41, 0).unwrap());
        assert_eq!(current.sunset, day.and_hms_opt(20, 47, 0).unwrap());
        assert_eq!(current.feels_like, 13.9);
        assert_eq!((current.temperature_minimum, current.temperature_maximum), (13.2, 15.8));
        assert_eq!((current.humidity, current.pressure), (77, 1009));
        assert_eq!((current.wind_speed, current.wind_direction), (5.7, 230));
        assert_eq!(current.wind_gust, Some(9.8));
        assert_eq!(current.cloudiness, 90);
        assert_eq!(current.conditions[0].code, 521);
    }

    #[test]
    fn current_weather_without_gust() {
        let body = CURRENT_BODY.replace(r#", "gust": 9.8"#, "");

        let current = OpenWeatherParser.parse_current(&body).expect("gust is optional");
        assert!(current.wind_gust.is_none());
    }

    #[test]
    fn forecast_document_is_not_current_weather() {
        let err = OpenWeatherParser.parse_current(BODY).unwrap_err();
        assert!(err.to_string().contains("Failed to parse OpenWeather current JSON"));
    }

    #[test]
    fn rejects_non_forecast_document() {
        let err = OpenWeatherParser.parse(r#"{"cod": "401", "message": "Invalid API key"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Failed to parse OpenWeather forecast JSON"));
        assert!(msg.contains("Invalid API key"));
    }
}
