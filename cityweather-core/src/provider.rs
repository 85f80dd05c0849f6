use crate::{
    Config,
    error::FetchError,
    model::{CurrentWeather, ForecastSample},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod openweather;

/// Read-only source of current conditions and the 3-hour forecast for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<CurrentWeather, FetchError>;

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, FetchError>;
}

/// Construct the OpenWeatherMap provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolved_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
                 Hint: run `cityweather configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    let timeout = config.timeout_secs.map(Duration::from_secs);
    let provider = OpenWeatherProvider::with_base_url(api_key, &config.base_url, timeout)?;

    Ok(Box::new(provider))
}
