//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap provider behind a [`WeatherProvider`] trait
//! - A fetch client that pairs current conditions with the 5-day forecast
//! - Unit conversions and the daily forecast aggregation
//! - The query session and its text rendering
//!
//! It is used by `cityweather-cli`, but can also be reused by other front ends.

pub mod client;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod session;
pub mod units;
pub mod view;

pub use client::WeatherClient;
pub use config::Config;
pub use connectivity::{AlwaysOnline, Connectivity, WatchConnectivity};
pub use error::FetchError;
pub use forecast::{aggregate_daily, daily_forecast};
pub use model::{CurrentWeather, DailyForecastSummary, ForecastSample, WeatherReport};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use session::{QuerySession, QueryState, SubmitOutcome};
