use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;

use crate::{
    error::FetchError,
    model::{CityMatch, Observation, WeatherSnapshot},
};

use super::WeatherProvider;

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// Visibility OpenWeather reports as "unlimited" by omitting the field, in meters.
const DEFAULT_VISIBILITY_M: f64 = 10_000.0;
const SEARCH_LIMIT: &str = "5";
const MIN_SEARCH_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { api_key, base_url: OPENWEATHER_BASE_URL.to_string(), http })
    }

    /// Point the provider at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        city: &str,
    ) -> Result<T, FetchError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, city, "requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::NOT_FOUND {
            tracing::info!(city, "OpenWeather does not know this city");
            return Err(FetchError::CityNotFound(city.to_string()));
        }

        if !status.is_success() {
            tracing::warn!(%status, "OpenWeather request failed");
            return Err(FetchError::Status { status: status.as_u16(), body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    visibility: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwGeoEntry {
    name: String,
    country: String,
    state: Option<String>,
}

impl OwCurrentResponse {
    fn into_observation(self) -> Observation {
        let description = self
            .weather
            .first()
            .map(|w| w.description.to_lowercase())
            .unwrap_or_else(|| "unknown".to_string());

        let snapshot = WeatherSnapshot {
            city: self.name,
            temp: self.main.temp,
            feels_like: self.main.feels_like,
            description,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            visibility: self.visibility.unwrap_or(DEFAULT_VISIBILITY_M) / 1000.0,
        };

        let observed_at = self.dt.and_then(unix_to_utc).unwrap_or_else(Utc::now);

        Observation { snapshot, observed_at }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<Observation, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::EmptyCity);
        }

        let parsed: OwCurrentResponse = self
            .get_json("/data/2.5/weather", &[("q", city), ("units", "metric")], city)
            .await?;

        Ok(parsed.into_observation())
    }

    async fn search_cities(&self, query: &str) -> Result<Vec<CityMatch>, FetchError> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Ok(Vec::new());
        }

        let entries: Vec<OwGeoEntry> = self
            .get_json("/geo/1.0/direct", &[("q", query), ("limit", SEARCH_LIMIT)], query)
            .await?;

        Ok(entries
            .into_iter()
            .map(|e| CityMatch { name: e.name, country: e.country, state: e.state })
            .collect())
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_units_and_defaults() {
        let json = r#"{
            "name": "Reykjavik",
            "dt": 1700000000,
            "main": { "temp": -3.2, "feels_like": -9.5, "humidity": 87 },
            "weather": [{ "description": "Light Snow" }]
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(json).expect("parse");
        let obs = parsed.into_observation();

        assert_eq!(obs.snapshot.city, "Reykjavik");
        assert_eq!(obs.snapshot.description, "light snow");
        assert_eq!(obs.snapshot.wind_speed, 0.0);
        assert_eq!(obs.snapshot.visibility, 10.0);
        assert_eq!(obs.observed_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn visibility_is_converted_to_km() {
        let json = r#"{
            "name": "London",
            "main": { "temp": 11.0, "feels_like": 10.1, "humidity": 93 },
            "weather": [],
            "wind": { "speed": 4.6 },
            "visibility": 800
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(json).expect("parse");
        let snapshot = parsed.into_observation().snapshot;

        assert_eq!(snapshot.visibility, 0.8);
        assert_eq!(snapshot.wind_speed, 4.6);
        assert_eq!(snapshot.description, "unknown");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(150);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
