use chrono::NaiveDate;

use stockplan_types::{DemandRecord, Result, StockplanError};

fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| StockplanError::InvalidRecord("date out of range".to_string()))
}

/// Normalize raw history onto a contiguous daily grid.
///
/// Records are sorted by date; when the same date appears more than once
/// the latest-inserted record wins. Missing days between the first and
/// last observation are forward-filled with the previous day's units.
pub fn daily_series(history: &[DemandRecord]) -> Result<Vec<(NaiveDate, f64)>> {
    if history.is_empty() {
        return Err(StockplanError::InsufficientData(
            "demand history is empty".to_string(),
        ));
    }

    let mut sorted: Vec<DemandRecord> = history.to_vec();
    sorted.sort_by_key(|record| record.date);

    let mut series: Vec<(NaiveDate, f64)> = Vec::with_capacity(sorted.len());
    for record in sorted {
        match series.last().copied() {
            Some((last_date, _)) if last_date == record.date => {
                if let Some(last) = series.last_mut() {
                    last.1 = record.units;
                }
            }
            Some((last_date, last_units)) => {
                let mut day = next_day(last_date)?;
                while day < record.date {
                    series.push((day, last_units));
                    day = next_day(day)?;
                }
                series.push((record.date, record.units));
            }
            None => series.push((record.date, record.units)),
        }
    }

    Ok(series)
}
