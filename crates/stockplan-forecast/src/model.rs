use chrono::{Datelike, NaiveDate};
use tracing::debug;

use stockplan_types::{
    DemandRecord, ForecastPoint, Result, StockplanError, CONFIDENCE_Z,
};

use crate::prep::daily_series;

/// Days of trailing history used for the demand level
const LEVEL_WINDOW: usize = 28;
/// Window length for the trend estimate (two adjacent windows are compared)
const TREND_WINDOW: usize = 14;
/// Lower bound on the forecast error estimate, matching the sigma floor
/// applied to demand scenarios downstream
const SIGMA_FLOOR: f64 = 1.0;

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Deterministic day-of-week seasonal model with a linear trend.
///
/// Fitted from the daily-gridded history: the level is the trailing
/// 28-day mean, the trend compares the two most recent 14-day windows,
/// and each weekday gets a multiplicative factor relative to the overall
/// mean. The error estimate comes from one-step naive residuals.
#[derive(Debug, Clone)]
pub struct SeasonalTrend {
    level: f64,
    trend: f64,
    weekday_factor: [f64; 7],
    sigma: f64,
    last_date: NaiveDate,
}

impl SeasonalTrend {
    pub fn fit(history: &[DemandRecord]) -> Result<Self> {
        let series = daily_series(history)?;
        let values: Vec<f64> = series.iter().map(|(_, units)| *units).collect();
        let n = values.len();

        let level_start = n.saturating_sub(LEVEL_WINDOW);
        let level = mean(&values[level_start..]);

        let trend = if n >= 2 * TREND_WINDOW {
            let recent = mean(&values[n - TREND_WINDOW..]);
            let prior = mean(&values[n - 2 * TREND_WINDOW..n - TREND_WINDOW]);
            (recent - prior) / TREND_WINDOW as f64
        } else {
            0.0
        };

        let overall = mean(&values);
        let mut weekday_sum = [0.0_f64; 7];
        let mut weekday_count = [0_usize; 7];
        for (date, units) in &series {
            let dow = date.weekday().num_days_from_monday() as usize;
            weekday_sum[dow] += units;
            weekday_count[dow] += 1;
        }
        let mut weekday_factor = [1.0_f64; 7];
        if overall > 0.0 {
            for dow in 0..7 {
                if weekday_count[dow] > 0 {
                    weekday_factor[dow] =
                        (weekday_sum[dow] / weekday_count[dow] as f64) / overall;
                }
            }
        }

        let sigma = if n >= 2 {
            let residuals: Vec<f64> =
                values.windows(2).map(|w| w[1] - w[0]).collect();
            let residual_mean = mean(&residuals);
            let variance = residuals
                .iter()
                .map(|r| (r - residual_mean).powi(2))
                .sum::<f64>()
                / residuals.len() as f64;
            variance.sqrt().max(SIGMA_FLOOR)
        } else {
            SIGMA_FLOOR
        };

        let last_date = series
            .last()
            .map(|(date, _)| *date)
            .ok_or_else(|| StockplanError::Internal("empty daily series".to_string()))?;

        debug!(level, trend, sigma, days = n, "fitted demand model");

        Ok(SeasonalTrend {
            level,
            trend,
            weekday_factor,
            sigma,
            last_date,
        })
    }

    /// Forecast `horizon` consecutive days starting the day after the
    /// last historical date
    pub fn predict(&self, horizon: u32) -> Result<Vec<ForecastPoint>> {
        if horizon == 0 {
            return Err(StockplanError::InvalidConfiguration(
                "horizon must be at least 1 day".to_string(),
            ));
        }

        let mut points = Vec::with_capacity(horizon as usize);
        let mut date = self.last_date;
        for step in 1..=horizon {
            date = date.succ_opt().ok_or_else(|| {
                StockplanError::InvalidConfiguration("horizon exceeds date range".to_string())
            })?;
            let dow = date.weekday().num_days_from_monday() as usize;
            let base = (self.level + self.trend * step as f64).max(0.0);
            let demand = (base * self.weekday_factor[dow]).max(0.0);
            let lower = (demand - CONFIDENCE_Z * self.sigma).max(0.0);
            let upper = demand + CONFIDENCE_Z * self.sigma;
            points.push(ForecastPoint::with_bounds(date, demand, lower, upper));
        }
        Ok(points)
    }
}

/// Forecast future daily demand from history.
///
/// Deterministic: identical history and horizon produce identical output.
/// Empty history is an `InsufficientData` error; callers fall back to
/// their own synthetic series.
pub fn forecast(history: &[DemandRecord], horizon: u32) -> Result<Vec<ForecastPoint>> {
    let model = SeasonalTrend::fit(history)?;
    model.predict(horizon)
}
