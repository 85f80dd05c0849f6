//! Reduction of 3-hour forecast samples into per-day summaries.

use std::collections::HashMap;

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::{
    model::{DailyForecastSummary, ForecastSample},
    units::{kelvin_to_celsius, round2},
};

/// Number of days shown on the forecast strip.
pub const MAX_FORECAST_DAYS: usize = 5;

#[derive(Debug)]
struct DayAccumulator<'a> {
    date: NaiveDate,
    temp_sum_k: f64,
    humidity_sum: f64,
    count: u32,
    description: &'a str,
}

/// Groups `samples` by calendar date in `tz`, drops the `today` group and
/// averages the rest.
///
/// Days come out in the order their first sample appears in the input, and
/// the list is cut at [`MAX_FORECAST_DAYS`]. Each day keeps the description of
/// its first sample.
pub fn aggregate_daily<Tz: TimeZone>(
    samples: &[ForecastSample],
    tz: &Tz,
    today: NaiveDate,
) -> Vec<DailyForecastSummary> {
    let mut days: Vec<DayAccumulator<'_>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let Some(date) = sample_date(sample, tz) else {
            tracing::warn!(
                timestamp = sample.timestamp_unix,
                "skipping forecast sample with out-of-range timestamp"
            );
            continue;
        };
        if date == today {
            continue;
        }

        let slot = *index.entry(date).or_insert_with(|| {
            days.push(DayAccumulator {
                date,
                temp_sum_k: 0.0,
                humidity_sum: 0.0,
                count: 0,
                description: &sample.weather_description,
            });
            days.len() - 1
        });

        let day = &mut days[slot];
        day.temp_sum_k += sample.temperature_k;
        day.humidity_sum += f64::from(sample.humidity_pct);
        day.count += 1;
    }

    days.into_iter()
        .take(MAX_FORECAST_DAYS)
        .map(|day| {
            let n = f64::from(day.count);
            DailyForecastSummary {
                date: day.date,
                avg_temperature_c: round2(kelvin_to_celsius(day.temp_sum_k / n)),
                avg_humidity_pct: round2(day.humidity_sum / n),
                weather_description: day.description.to_string(),
            }
        })
        .collect()
}

/// [`aggregate_daily`] in the viewer's local timezone, relative to the local
/// current date.
pub fn daily_forecast(samples: &[ForecastSample]) -> Vec<DailyForecastSummary> {
    aggregate_daily(samples, &Local, Local::now().date_naive())
}

fn sample_date<Tz: TimeZone>(sample: &ForecastSample, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(sample.timestamp_unix, 0)
        .map(|utc| utc.with_timezone(tz).date_naive())
}
