use serde::{Deserialize, Serialize};

/// Semantic weather category derived from a numeric condition code.
///
/// Declaration order matters: it is the order used to break ties when a
/// daily summary picks its most frequent category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Thunderstorm,
    Fog,
    Undefined,
}

/// Inclusive condition-code ranges (OpenWeather groupings). Disjoint.
pub const CODE_RANGES: [(i32, i32, WeatherCondition); 7] = [
    (200, 299, WeatherCondition::Thunderstorm),
    (300, 399, WeatherCondition::Drizzle),
    (500, 599, WeatherCondition::Rain),
    (600, 699, WeatherCondition::Snow),
    (700, 799, WeatherCondition::Fog),
    (800, 800, WeatherCondition::Clear),
    (801, 899, WeatherCondition::Clouds),
];

impl WeatherCondition {
    pub const ALL: &'static [WeatherCondition] = &[
        WeatherCondition::Clear,
        WeatherCondition::Clouds,
        WeatherCondition::Rain,
        WeatherCondition::Drizzle,
        WeatherCondition::Snow,
        WeatherCondition::Thunderstorm,
        WeatherCondition::Fog,
        WeatherCondition::Undefined,
    ];

    pub fn classify(code: i32) -> WeatherCondition {
        CODE_RANGES
            .iter()
            .find(|(start, end, _)| (*start..=*end).contains(&code))
            .map(|(_, _, condition)| *condition)
            .unwrap_or(WeatherCondition::Undefined)
    }

    /// Position in [`WeatherCondition::ALL`].
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::Clouds => "clouds",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Drizzle => "drizzle",
            WeatherCondition::Snow => "snow",
            WeatherCondition::Thunderstorm => "thunderstorm",
            WeatherCondition::Fog => "fog",
            WeatherCondition::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
