use chrono::NaiveDateTime;
use forecast_core::{CurrentWeather, WeatherSummary};

pub fn print(view: &[WeatherSummary], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        for summary in view {
            println!("{}", summary_line(summary));
        }
    }
    Ok(())
}

pub fn print_current(current: &CurrentWeather, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(current)?);
    } else {
        println!("{}", current_report(current));
    }
    Ok(())
}

fn summary_line(summary: &WeatherSummary) -> String {
    if summary.is_daily() { daily_line(summary) } else { hourly_line(summary) }
}

fn hourly_line(summary: &WeatherSummary) -> String {
    format!(
        "{}  {:<8} {:<13} {:>6.1}°C  {}",
        format_hour(&summary.date),
        summary.time_of_day,
        summary.weather_condition,
        summary.temperature,
        summary.description.as_deref().unwrap_or("-"),
    )
}

fn daily_line(summary: &WeatherSummary) -> String {
    format!(
        "{}  {:<13} avg {:>5.1}°C  min {}  max {}",
        summary.date.format("%a %Y-%m-%d"),
        summary.weather_condition,
        summary.temperature,
        format_optional(summary.temperature_minimum),
        format_optional(summary.temperature_maximum),
    )
}

fn current_report(current: &CurrentWeather) -> String {
    let gust = current
        .wind_gust
        .map(|g| format!(", gusts {g:.1} m/s"))
        .unwrap_or_default();

    [
        format!(
            "{}  {} ({}), {}",
            format_hour(&current.date),
            current.weather_condition,
            current.time_of_day,
            current.description,
        ),
        format!(
            "Temperature: {:.1}°C (feels like {:.1}°C, range {:.1}..{:.1}°C)",
            current.temperature,
            current.feels_like,
            current.temperature_minimum,
            current.temperature_maximum,
        ),
        format!(
            "Humidity: {}%  Pressure: {} hPa  Cloudiness: {}%",
            current.humidity, current.pressure, current.cloudiness,
        ),
        format!("Wind: {:.1} m/s from {}°{gust}", current.wind_speed, current.wind_direction),
        format!(
            "Sunrise: {}  Sunset: {}",
            current.sunrise.format("%H:%M"),
            current.sunset.format("%H:%M"),
        ),
    ]
    .join("\n")
}

fn format_hour(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.1}°C")).unwrap_or_else(|| "-".to_string())
}
