//! Shared fixtures for the cross-crate pipeline tests

use chrono::{Duration, NaiveDate};
use stockplan_types::DemandRecord;

pub fn start_date() -> NaiveDate {
    NaiveDate::parse_from_str("2025-01-01", "%Y-%m-%d").unwrap()
}

/// Flat demand history of `days` records at `units` per day
pub fn flat_history(days: i64, units: f64) -> Vec<DemandRecord> {
    (0..days)
        .map(|offset| DemandRecord::new(start_date() + Duration::days(offset), units))
        .collect()
}

/// History with a weekly rhythm: weekend demand is double the weekday rate
pub fn weekly_history(days: i64, weekday_units: f64) -> Vec<DemandRecord> {
    use chrono::Datelike;
    (0..days)
        .map(|offset| {
            let date = start_date() + Duration::days(offset);
            let units = if date.weekday().num_days_from_monday() >= 5 {
                weekday_units * 2.0
            } else {
                weekday_units
            };
            DemandRecord::new(date, units)
        })
        .collect()
}
