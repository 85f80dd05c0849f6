use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current conditions for one queried city, as returned by the provider.
///
/// Temperatures stay in Kelvin and speeds in m/s; conversion happens at
/// display time (see [`crate::units`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location_name: String,
    pub country_code: String,
    /// Shift of the city's local time from UTC, in seconds.
    pub timezone_offset_secs: i64,
    pub sunrise_unix: i64,
    pub sunset_unix: i64,
    pub temperature_k: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub wind_direction_deg: u16,
    pub weather_main: Option<String>,
    pub weather_description: Option<String>,
}

/// One 3-hour entry of the provider's 5-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp_unix: i64,
    pub temperature_k: f64,
    pub humidity_pct: u8,
    pub weather_description: String,
}

/// Per-day reduction of forecast samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastSummary {
    pub date: NaiveDate,
    pub avg_temperature_c: f64,
    pub avg_humidity_pct: f64,
    pub weather_description: String,
}

/// Both halves of one successful query. Never built from two different
/// queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastSample>,
}
