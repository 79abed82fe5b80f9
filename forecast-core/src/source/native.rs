use anyhow::{Context, Result};

use crate::{current::CurrentObservation, model::HourlyObservation};

use super::{ForecastParser, truncate_body};

/// A JSON array of [`HourlyObservation`], or a single [`CurrentObservation`],
/// with local times.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeParser;

impl ForecastParser for NativeParser {
    fn parse(&self, body: &str) -> Result<Vec<HourlyObservation>> {
        serde_json::from_str(body).with_context(|| {
            format!("Failed to parse native observation JSON: {}", truncate_body(body))
        })
    }

    fn parse_current(&self, body: &str) -> Result<CurrentObservation> {
        serde_json::from_str(body).with_context(|| {
            format!("Failed to parse native current weather JSON: {}", truncate_body(body))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_observation_array() {
        let body = r#"[
            { "timestamp": "2024-05-01T06:00:00", "temperature": 10.0,
              "conditions": [{ "code": 500, "description": "light rain" }] },
            { "timestamp": "2024-05-01T09:00:00", "temperature": 12.0,
              "conditions": [{ "code": 800, "description": "clear sky" }] }
        ]"#;

        let observations = NativeParser.parse(body).expect("valid document");
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[1].temperature, 12.0);
    }

    #[test]
    fn parses_current_observation() {
        let body = r#"{
            "timestamp": "2024-05-01T13:00:00", "temperature": 21.0, "feels_like": 20.5,
            "temperature_minimum": 19.0, "temperature_maximum": 22.0,
            "humidity": 40, "pressure": 1018, "wind_speed": 2.5, "wind_direction": 90,
            "cloudiness": 10, "sunrise": "2024-05-01T05:40:00", "sunset": "2024-05-01T20:45:00",
            "conditions": [{ "code": 800, "description": "clear sky" }]
        }"#;

        let current = NativeParser.parse_current(body).expect("valid document");
        assert_eq!(current.pressure, 1018);
        assert!(current.wind_gust.is_none());
    }

    #[test]
    fn rejects_malformed_document() {
        let err = NativeParser.parse(r#"{"not": "an array"}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse native observation JSON"));
    }
}
