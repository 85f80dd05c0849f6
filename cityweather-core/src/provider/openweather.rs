use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{
    error::FetchError,
    model::{CurrentWeather, ForecastSample},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenWeatherProvider {
    /// Provider rooted at `base_url` (normally [`DEFAULT_BASE_URL`]). Without
    /// `timeout` requests wait as long as the transport lets them.
    pub fn with_base_url(
        api_key: String,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("requesting OpenWeather {endpoint}");

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenWeather {endpoint} request failed");
                FetchError::from(e)
            })?;

        let status = res.status();
        let body = res.text().await?;

        if status.is_client_error() {
            warn!(%status, body = %truncate_body(&body), "OpenWeather rejected query");
            return Err(FetchError::CityNotFound {
                city: city.to_string(),
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "OpenWeather {endpoint} failed");
            return Err(FetchError::Network(format!(
                "OpenWeather {endpoint} request failed with status {status}"
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            FetchError::Network(format!("Failed to parse OpenWeather {endpoint} JSON: {e}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
    #[serde(default)]
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default)]
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: u16,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    timezone: i64,
    sys: OwSys,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

impl From<OwCurrentResponse> for CurrentWeather {
    fn from(parsed: OwCurrentResponse) -> Self {
        let first = parsed.weather.into_iter().next();

        CurrentWeather {
            location_name: parsed.name,
            country_code: parsed.sys.country,
            timezone_offset_secs: parsed.timezone,
            sunrise_unix: parsed.sys.sunrise,
            sunset_unix: parsed.sys.sunset,
            temperature_k: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            pressure_hpa: parsed.main.pressure,
            wind_speed_mps: parsed.wind.speed,
            wind_direction_deg: parsed.wind.deg,
            weather_main: first.as_ref().map(|w| w.main.clone()),
            weather_description: first.map(|w| w.description),
        }
    }
}

impl From<OwForecastEntry> for ForecastSample {
    fn from(entry: OwForecastEntry) -> Self {
        let weather_description = entry
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_else(|| "Unknown".to_string());

        ForecastSample {
            timestamp_unix: entry.dt,
            temperature_k: entry.main.temp,
            humidity_pct: entry.main.humidity,
            weather_description,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        let parsed: OwCurrentResponse = self.get_json("weather", city).await?;
        Ok(parsed.into())
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, FetchError> {
        let parsed: OwForecastResponse = self.get_json("forecast", city).await?;
        Ok(parsed.list.into_iter().map(ForecastSample::from).collect())
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
