use crate::{
    Config,
    advice::advise,
    error::FetchError,
    model::{CityMatch, Observation, WeatherReport},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod openweather;

/// Source of normalized weather data.
///
/// Implementations resolve every failure to a `FetchError` before the rule
/// engine runs, so `advise` only ever sees a complete snapshot.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<Observation, FetchError>;

    async fn search_cities(&self, query: &str) -> Result<Vec<CityMatch>, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    build_provider(config.api_key(), config.timeout())
}

fn build_provider(
    api_key: Option<String>,
    timeout: Duration,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = api_key.ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `wearcast configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key, timeout)?))
}

/// Fetch current weather for `city` and derive advice from it.
pub async fn report_for(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<WeatherReport, FetchError> {
    let observation = provider.current(city).await?;
    let advice = advise(&observation.snapshot);

    Ok(WeatherReport { observation, advice })
}
