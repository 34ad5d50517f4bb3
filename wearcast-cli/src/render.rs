//! Text and JSON presentation of a weather report.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use wearcast_core::{AlertKind, CityMatch, WeatherReport};

pub fn report_text(report: &WeatherReport) -> String {
    let snapshot = &report.observation.snapshot;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Weather for {} (observed {})",
        snapshot.city,
        observed(report.observation.observed_at)
    );
    let _ = writeln!(
        out,
        "  {:.1}°C, feels like {:.1}°C, {}",
        snapshot.temp, snapshot.feels_like, snapshot.description
    );
    let _ = writeln!(
        out,
        "  Humidity {}% | Wind {:.1} m/s | Visibility {:.1} km",
        snapshot.humidity, snapshot.wind_speed, snapshot.visibility
    );

    if !report.advice.alerts.is_empty() {
        out.push_str("\nAlerts:\n");
        for alert in &report.advice.alerts {
            let _ = writeln!(
                out,
                "  [{}] {} {}: {}",
                kind_label(alert.kind),
                alert.icon,
                alert.title,
                alert.message
            );
        }
    }

    out.push_str("\nWhat to wear:\n");
    for item in &report.advice.suggestions {
        let _ = writeln!(out, "  - {item}");
    }

    out
}

/// `{data, alerts, suggestions}`, the shape a web front end would template.
pub fn report_json(report: &WeatherReport) -> serde_json::Result<String> {
    let value = serde_json::json!({
        "data": report.observation.snapshot,
        "observed_at": report.observation.observed_at,
        "alerts": report.advice.alerts,
        "suggestions": report.advice.suggestions,
    });

    serde_json::to_string_pretty(&value)
}

pub fn cities_text(query: &str, cities: &[CityMatch]) -> String {
    if cities.is_empty() {
        return format!("No cities match '{}'.\n", query.trim());
    }

    cities.iter().map(|city| format!("{city}\n")).collect()
}

fn kind_label(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "INFO",
        AlertKind::Warning => "WARNING",
        AlertKind::Danger => "DANGER",
    }
}

fn observed(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
