//! Conversions used when displaying provider data.

use chrono::{DateTime, Timelike};

const KELVIN_OFFSET: f64 = 273.15;
const MPS_TO_MPH: f64 = 2.23694;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPS_TO_MPH
}

/// Formats `unix + utc_offset` as a 12-hour wall clock, e.g. `7:05 PM`.
///
/// The shifted instant is read as UTC, so the result is the time at the
/// queried location regardless of where the viewer is.
pub fn format_local_time(unix: i64, utc_offset_secs: i64) -> String {
    let shifted = unix.saturating_add(utc_offset_secs);
    let (hour, minute) = match DateTime::from_timestamp(shifted, 0) {
        Some(dt) => (dt.hour(), dt.minute()),
        // Outside chrono's range; fall back to plain arithmetic on the day.
        None => {
            let secs_of_day = shifted.rem_euclid(86_400);
            ((secs_of_day / 3600) as u32, ((secs_of_day % 3600) / 60) as u32)
        }
    };

    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{hour12}:{minute:02} {meridiem}")
}

/// Rounds to two decimal places, the precision every displayed figure uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_is_zero_celsius() {
        assert_eq!(round2(kelvin_to_celsius(273.15)), 0.0);
        assert!((kelvin_to_celsius(300.0) - 26.85).abs() < 1e-9);
    }

    #[test]
    fn one_mps_in_mph() {
        assert!((mps_to_mph(1.0) - 2.23694).abs() < 1e-9);
        assert_eq!(mps_to_mph(0.0), 0.0);
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(format_local_time(0, 0), "12:00 AM");
        assert_eq!(format_local_time(43_200, 0), "12:00 PM");
        assert_eq!(format_local_time(3_600, 0), "1:00 AM");
    }

    #[test]
    fn minutes_are_zero_padded() {
        // 13:05 UTC
        assert_eq!(format_local_time(47_100, 0), "1:05 PM");
        assert_eq!(format_local_time(23 * 3_600 + 59 * 60, 0), "11:59 PM");
    }

    #[test]
    fn offset_shifts_to_city_time() {
        // 06:30 UTC seen from UTC+5:30 is noon.
        assert_eq!(format_local_time(6 * 3_600 + 30 * 60, 19_800), "12:00 PM");
        // 02:00 UTC seen from UTC-5 is 9 PM the previous day.
        assert_eq!(format_local_time(2 * 3_600, -18_000), "9:00 PM");
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(70.0 / 3.0), 23.33);
    }
}
