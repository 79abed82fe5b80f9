use crate::{
    current::CurrentObservation,
    model::HourlyObservation,
    source::{native::NativeParser, openweather::OpenWeatherParser},
};
use std::fmt::Debug;

pub mod native;
pub mod openweather;

/// Document formats a raw forecast can be supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    OpenWeather,
    Native,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::OpenWeather => "openweather",
            SourceFormat::Native => "native",
        }
    }

    pub const fn all() -> &'static [SourceFormat] {
        &[SourceFormat::OpenWeather, SourceFormat::Native]
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<&str> for SourceFormat {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "openweather" => Ok(SourceFormat::OpenWeather),
            "native" => Ok(SourceFormat::Native),
            _ => Err(anyhow::anyhow!(
                "Unknown forecast format '{value}'. Supported formats: openweather, native."
            )),
        }
    }
}

/// Turns raw source documents into observations.
pub trait ForecastParser: Send + Sync + Debug {
    /// Time-ordered hourly observations from a forecast document.
    fn parse(&self, body: &str) -> anyhow::Result<Vec<HourlyObservation>>;

    /// A single record from a current-weather document.
    fn parse_current(&self, body: &str) -> anyhow::Result<CurrentObservation>;
}

pub fn parser_for(format: SourceFormat) -> Box<dyn ForecastParser> {
    match format {
        SourceFormat::OpenWeather => Box::new(OpenWeatherParser),
        SourceFormat::Native => Box::new(NativeParser),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
