//! Text rendering of a [`QueryState`]: status line, current-conditions panel
//! and the forecast strip.

use std::fmt;

use chrono::{Local, NaiveDate, TimeZone};

use crate::{
    forecast::aggregate_daily,
    model::{CurrentWeather, DailyForecastSummary},
    session::QueryState,
    units::{format_local_time, kelvin_to_celsius, mps_to_mph},
};

pub const TITLE: &str = "AellaWeather";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const OFFLINE_MARKER: &str = "[offline]";

/// Coarse label derived from the first weather description.
pub fn weather_type(current: &CurrentWeather) -> &'static str {
    match current.weather_description.as_deref() {
        None => "The weather type cannot be determined",
        Some(desc) => {
            let desc = desc.to_lowercase();
            if desc.contains("rain") || desc.contains("drizzle") {
                "Rain"
            } else {
                "Light"
            }
        }
    }
}

/// Pre-formatted fields of the current-conditions panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPanel {
    pub heading: String,
    pub date_line: String,
    pub weather_type: String,
    pub wind_speed: String,
    pub sunrise: String,
    pub sunset: String,
    pub wind_direction: String,
    pub weather_main: String,
    pub humidity: String,
    pub pressure: String,
    pub temperature: String,
}

impl CurrentPanel {
    pub fn new(current: &CurrentWeather, today: NaiveDate) -> Self {
        let offset = current.timezone_offset_secs;

        Self {
            heading: format!("{}, {}", current.location_name, current.country_code),
            date_line: today.format("%A, %B %-d").to_string(),
            weather_type: weather_type(current).to_string(),
            wind_speed: format!("{:.2} mph", mps_to_mph(current.wind_speed_mps)),
            sunrise: format_local_time(current.sunrise_unix, offset),
            sunset: format_local_time(current.sunset_unix, offset),
            wind_direction: format!("{}°", current.wind_direction_deg),
            weather_main: current.weather_main.clone().unwrap_or_default(),
            humidity: format!("{}%", current.humidity_pct),
            pressure: format!("{} hPa", current.pressure_hpa),
            temperature: format!("{:.2} °C", kelvin_to_celsius(current.temperature_k)),
        }
    }

    fn rows(&self) -> [(&'static str, &str); 9] {
        [
            ("Weather", self.weather_type.as_str()),
            ("Wind Speed", self.wind_speed.as_str()),
            ("Sunrise", self.sunrise.as_str()),
            ("Sunset", self.sunset.as_str()),
            ("Wind Direction", self.wind_direction.as_str()),
            ("Weather", self.weather_main.as_str()),
            ("Humidity", self.humidity.as_str()),
            ("Pressure", self.pressure.as_str()),
            ("Temperature", self.temperature.as_str()),
        ]
    }
}

/// One card of the forecast strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCard {
    pub date_label: String,
    pub temperature: String,
    pub humidity: String,
    pub description: String,
}

impl From<&DailyForecastSummary> for ForecastCard {
    fn from(day: &DailyForecastSummary) -> Self {
        Self {
            date_label: day.date.format("%-m/%-d/%Y").to_string(),
            temperature: format!("Temp: {:.2} °C", day.avg_temperature_c),
            humidity: format!("Humidity: {:.2} %", day.avg_humidity_pct),
            description: day.weather_description.clone(),
        }
    }
}

/// A [`QueryState`] ready to print, with forecast days grouped in `tz` and
/// `today` as the viewer's current date.
#[derive(Debug)]
pub struct WeatherView<'a, Tz: TimeZone> {
    pub state: &'a QueryState,
    pub tz: &'a Tz,
    pub today: NaiveDate,
}

impl<Tz: TimeZone> fmt::Display for WeatherView<'_, Tz> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        writeln!(f, "{TITLE}")?;

        if !state.is_online {
            writeln!(f, "{OFFLINE_MARKER}")?;
        }
        if state.is_loading {
            writeln!(f, "{LOADING_MESSAGE}")?;
        } else if let Some(message) = &state.error_message {
            writeln!(f, "{message}")?;
        }

        let Some(report) = &state.report else {
            return Ok(());
        };

        let panel = CurrentPanel::new(&report.current, self.today);
        writeln!(f)?;
        writeln!(f, "{}", panel.heading)?;
        writeln!(f, "{}", panel.date_line)?;
        for (label, value) in panel.rows() {
            writeln!(f, "  {label:<16}{value}")?;
        }

        writeln!(f)?;
        writeln!(f, "5-Day Forecast")?;
        for day in aggregate_daily(&report.forecast, self.tz, self.today) {
            let card = ForecastCard::from(&day);
            writeln!(
                f,
                "  {:<12}{:<20}{:<20}{}",
                card.date_label, card.temperature, card.humidity, card.description
            )?;
        }

        Ok(())
    }
}

pub fn render_with<Tz: TimeZone>(state: &QueryState, tz: &Tz, today: NaiveDate) -> String {
    WeatherView { state, tz, today }.to_string()
}

/// [`render_with`] in the viewer's local timezone.
pub fn render(state: &QueryState) -> String {
    render_with(state, &Local, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ForecastSample, WeatherReport};
    use chrono::Utc;

    fn current(desc: Option<&str>) -> CurrentWeather {
        CurrentWeather {
            location_name: "London".into(),
            country_code: "GB".into(),
            timezone_offset_secs: 3600,
            // 06:23 UTC and 16:59 UTC
            sunrise_unix: 1_792_281_600 + 6 * 3600 + 23 * 60,
            sunset_unix: 1_792_281_600 + 16 * 3600 + 59 * 60,
            temperature_k: 285.0,
            humidity_pct: 72,
            pressure_hpa: 1012,
            wind_speed_mps: 4.1,
            wind_direction_deg: 230,
            weather_main: Some("Rain".into()),
            weather_description: desc.map(str::to_owned),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn weather_type_classifies_rain_and_drizzle() {
        assert_eq!(weather_type(&current(Some("Light Rain"))), "Rain");
        assert_eq!(weather_type(&current(Some("drizzle"))), "Rain");
        assert_eq!(weather_type(&current(Some("clear sky"))), "Light");
        assert_eq!(weather_type(&current(None)), "The weather type cannot be determined");
    }

    #[test]
    fn panel_formats_every_field() {
        let panel = CurrentPanel::new(&current(Some("light rain")), today());

        assert_eq!(panel.heading, "London, GB");
        assert_eq!(panel.date_line, "Sunday, October 18");
        assert_eq!(panel.wind_speed, "9.17 mph");
        assert_eq!(panel.sunrise, "7:23 AM");
        assert_eq!(panel.sunset, "5:59 PM");
        assert_eq!(panel.wind_direction, "230°");
        assert_eq!(panel.humidity, "72%");
        assert_eq!(panel.pressure, "1012 hPa");
        assert_eq!(panel.temperature, "11.85 °C");
    }

    #[test]
    fn card_uses_us_short_date() {
        let day = DailyForecastSummary {
            date: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
            avg_temperature_c: 5.5,
            avg_humidity_pct: 80.0,
            weather_description: "snow".into(),
        };
        let card = ForecastCard::from(&day);

        assert_eq!(card.date_label, "3/7/2026");
        assert_eq!(card.temperature, "Temp: 5.50 °C");
        assert_eq!(card.humidity, "Humidity: 80.00 %");
    }

    #[test]
    fn loading_state_shows_indicator_only() {
        let state = QueryState {
            is_loading: true,
            ..Default::default()
        };
        let out = render_with(&state, &Utc, today());

        assert!(out.contains(LOADING_MESSAGE));
        assert!(!out.contains("5-Day Forecast"));
    }

    #[test]
    fn offline_marker_follows_connectivity() {
        let offline = QueryState::default();
        let online = QueryState {
            is_online: true,
            ..Default::default()
        };

        assert!(render_with(&offline, &Utc, today()).contains(OFFLINE_MARKER));
        assert!(!render_with(&online, &Utc, today()).contains(OFFLINE_MARKER));
    }

    #[test]
    fn view_displays_like_render_with() {
        let state = QueryState {
            is_online: true,
            error_message: Some("City not found. Please try again.".into()),
            ..Default::default()
        };
        let view = WeatherView {
            state: &state,
            tz: &Utc,
            today: today(),
        };

        assert_eq!(view.to_string(), render_with(&state, &Utc, today()));
        assert_eq!(view.to_string(), format!("{TITLE}\nCity not found. Please try again.\n"));
    }

    #[test]
    fn error_is_hidden_while_loading() {
        let state = QueryState {
            is_loading: true,
            error_message: Some("City not found. Please try again.".into()),
            ..Default::default()
        };
        let out = render_with(&state, &Utc, today());

        assert!(!out.contains("City not found"));
    }

    #[test]
    fn error_state_shows_message_without_panels() {
        let state = QueryState {
            error_message: Some("City not found. Please try again.".into()),
            ..Default::default()
        };
        let out = render_with(&state, &Utc, today());

        assert!(out.contains("City not found. Please try again."));
        assert!(!out.contains("London"));
    }

    #[test]
    fn success_state_shows_panel_and_strip() {
        let state = QueryState {
            city_input: "London".into(),
            report: Some(WeatherReport {
                current: current(Some("light rain")),
                forecast: vec![
                    ForecastSample {
                        timestamp_unix: 1_792_281_600 + 12 * 3600,
                        temperature_k: 280.0,
                        humidity_pct: 50,
                        weather_description: "today".into(),
                    },
                    ForecastSample {
                        timestamp_unix: 1_792_281_600 + 86_400 + 12 * 3600,
                        temperature_k: 283.15,
                        humidity_pct: 64,
                        weather_description: "scattered clouds".into(),
                    },
                ],
            }),
            ..Default::default()
        };
        let out = render_with(&state, &Utc, today());

        assert!(out.starts_with(TITLE));
        assert!(out.contains("London, GB"));
        assert!(out.contains("11.85 °C"));
        assert!(out.contains("10/19/2026"));
        assert!(out.contains("Temp: 10.00 °C"));
        assert!(out.contains("scattered clouds"));
        assert!(!out.contains("10/18/2026"));
        assert!(!out.contains("today"));
    }
}
