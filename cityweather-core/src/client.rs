//! Fetches current conditions and the forecast for one city as a unit.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    connectivity::Connectivity, error::FetchError, model::WeatherReport,
    provider::WeatherProvider,
};

#[derive(Debug, Clone)]
pub struct WeatherClient {
    provider: Arc<dyn WeatherProvider>,
    connectivity: Arc<dyn Connectivity>,
}

impl WeatherClient {
    pub fn new(provider: Arc<dyn WeatherProvider>, connectivity: Arc<dyn Connectivity>) -> Self {
        Self {
            provider,
            connectivity,
        }
    }

    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    /// Requests both endpoints concurrently and returns them together.
    ///
    /// Fails with [`FetchError::Offline`] before anything else when the host
    /// is offline, then with [`FetchError::EmptyInput`] for a blank city.
    /// Neither case issues a request.
    #[instrument(skip(self))]
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, FetchError> {
        if !self.connectivity.is_online() {
            return Err(FetchError::Offline);
        }

        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::EmptyInput);
        }

        debug!("fetching current conditions and forecast");
        let (current, forecast) =
            tokio::try_join!(self.provider.current(city), self.provider.forecast(city))?;

        Ok(WeatherReport { current, forecast })
    }
}
