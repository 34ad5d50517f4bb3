use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advice::Advice;

/// Normalized current-weather reading for one city.
///
/// Temperatures are °C, wind speed m/s, visibility km, humidity a 0–100 percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temp: f64,
    pub feels_like: f64,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub visibility: f64,
}

/// A snapshot together with the time the provider observed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub snapshot: WeatherSnapshot,
    pub observed_at: DateTime<Utc>,
}

/// One geocoding hit returned by a city search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityMatch {
    pub name: String,
    pub country: String,
    pub state: Option<String>,
}

impl CityMatch {
    /// "Name, CC", the form a provider accepts back as a city query.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

impl std::fmt::Display for CityMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            Some(state) => write!(f, "{}, {} ({state})", self.name, self.country),
            None => write!(f, "{}, {}", self.name, self.country),
        }
    }
}

/// Everything the presentation layer needs for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub observation: Observation,
    pub advice: Advice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_match_display_name_omits_state() {
        let city = CityMatch {
            name: "Portland".into(),
            country: "US".into(),
            state: Some("Oregon".into()),
        };

        assert_eq!(city.display_name(), "Portland, US");
        assert_eq!(city.to_string(), "Portland, US (Oregon)");
    }
}
