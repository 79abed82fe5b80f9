use chrono::Timelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
    Night,
    /// Reserved for summaries spanning more than one hour.
    Undefined,
}

/// Inclusive hour ranges partitioning the 24-hour clock.
pub const HOUR_RANGES: [(u32, u32, TimeOfDay); 4] = [
    (0, 5, TimeOfDay::Night),
    (6, 11, TimeOfDay::Morning),
    (12, 17, TimeOfDay::Day),
    (18, 23, TimeOfDay::Evening),
];

impl TimeOfDay {
    pub fn classify<T: Timelike>(timestamp: &T) -> TimeOfDay {
        Self::for_hour(timestamp.hour())
    }

    pub fn for_hour(hour: u32) -> TimeOfDay {
        HOUR_RANGES
            .iter()
            .find(|(start, end, _)| (*start..=*end).contains(&hour))
            .map(|(_, _, time_of_day)| *time_of_day)
            .unwrap_or(TimeOfDay::Undefined)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Day => "day",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
            TimeOfDay::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
