//! Hourly and daily forecast views.
//!
//! The hourly view is a one-to-one projection of the input. The daily view
//! buckets observations by calendar day and summarizes each bucket: mean,
//! minimum and maximum temperature plus the most frequent weather category.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    condition::WeatherCondition,
    error::{ForecastError, Result},
    model::{Condition, HourlyObservation, WeatherSummary},
    time_of_day::TimeOfDay,
};

/// Which calendar days the daily view summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayCoverage {
    /// Every day with at least one observation, last day included.
    #[default]
    ThroughLastDay,
    /// Compatibility mode: only days from the first observed day up to, but
    /// excluding, the last observed day. A single-day input yields nothing.
    BeforeLastDay,
}

impl DayCoverage {
    pub const ALL: &'static [DayCoverage] = &[DayCoverage::ThroughLastDay, DayCoverage::BeforeLastDay];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayCoverage::ThroughLastDay => "through-last-day",
            DayCoverage::BeforeLastDay => "before-last-day",
        }
    }
}

impl std::fmt::Display for DayCoverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// An observation paired with its authoritative (first) condition entry.
type Record<'a> = (&'a HourlyObservation, &'a Condition);

/// Observations of one calendar day. Created from its first member, so
/// `records` is never empty.
struct DayGroup<'a> {
    first: &'a HourlyObservation,
    records: Vec<Record<'a>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastAggregator {
    day_coverage: DayCoverage,
}

impl ForecastAggregator {
    pub fn new(day_coverage: DayCoverage) -> Self {
        Self { day_coverage }
    }

    pub fn day_coverage(&self) -> DayCoverage {
        self.day_coverage
    }

    /// One summary per observation, in input order.
    pub fn hourly_view(&self, observations: &[HourlyObservation]) -> Result<Vec<WeatherSummary>> {
        let records = validate(observations)?;

        Ok(records.into_iter().map(hourly_summary).collect())
    }

    /// One summary per calendar day, ordered by day ascending.
    pub fn daily_view(&self, observations: &[HourlyObservation]) -> Result<Vec<WeatherSummary>> {
        let records = validate(observations)?;

        let mut days: BTreeMap<NaiveDate, DayGroup> = BTreeMap::new();
        for record in records {
            days
                .entry(record.0.timestamp.date())
                .or_insert_with(|| DayGroup { first: record.0, records: Vec::new() })
                .records
                .push(record);
        }

        if self.day_coverage == DayCoverage::BeforeLastDay {
            if let (Some(first), Some(last)) = (observations.first(), observations.last()) {
                let (first_day, last_day) = (first.timestamp.date(), last.timestamp.date());
                let before = days.len();
                days.retain(|day, _| *day >= first_day && *day < last_day);

                if days.len() < before {
                    warn!(
                        dropped = before - days.len(),
                        %first_day,
                        %last_day,
                        "before-last-day coverage dropped observed days"
                    );
                }
            }
        }

        debug!(days = days.len(), observations = observations.len(), "bucketed observations by day");

        Ok(days.values().map(daily_summary).collect())
    }
}

fn validate(observations: &[HourlyObservation]) -> Result<Vec<Record<'_>>> {
    if observations.is_empty() {
        return Err(ForecastError::EmptyInput);
    }

    observations
        .iter()
        .enumerate()
        .map(|(index, observation)| {
            observation
                .primary_condition()
                .map(|condition| (observation, condition))
                .ok_or(ForecastError::MissingConditions { index, timestamp: observation.timestamp })
        })
        .collect()
}

fn hourly_summary((observation, condition): Record) -> WeatherSummary {
    WeatherSummary {
        weather_condition: WeatherCondition::classify(condition.code),
        time_of_day: TimeOfDay::classify(&observation.timestamp),
        description: Some(condition.description.clone()),
        temperature: observation.temperature,
        temperature_minimum: None,
        temperature_maximum: None,
        date: observation.timestamp,
    }
}

fn daily_summary(group: &DayGroup) -> WeatherSummary {
    let temperatures = || group.records.iter().map(|(observation, _)| observation.temperature);

    // Running mean stays finite wherever the inputs are.
    let mean = temperatures()
        .enumerate()
        .fold(0.0, |mean, (i, t)| mean + (t - mean) / (i + 1) as f64);
    let minimum = temperatures().fold(f64::INFINITY, f64::min);
    let maximum = temperatures().fold(f64::NEG_INFINITY, f64::max);

    WeatherSummary {
        weather_condition: most_common_condition(&group.records),
        time_of_day: TimeOfDay::Undefined,
        description: None,
        temperature: mean,
        temperature_minimum: Some(minimum),
        temperature_maximum: Some(maximum),
        date: group.first.timestamp,
    }
}

/// Majority vote over classified conditions. On a tie the category declared
/// first in [`WeatherCondition::ALL`] wins.
fn most_common_condition(group: &[Record]) -> WeatherCondition {
    let mut counts = vec![0usize; WeatherCondition::ALL.len()];
    for (_, condition) in group {
        counts[WeatherCondition::classify(condition.code).ordinal()] += 1;
    }

    let mut winner = WeatherCondition::Undefined;
    let mut winner_count = 0;
    for (condition, &count) in WeatherCondition::ALL.iter().zip(&counts) {
        if count > winner_count {
            winner = *condition;
            winner_count = count;
        }
    }

    debug!(%winner, votes = winner_count, total = group.len(), "picked daily condition");
    winner
}
