use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// z-score for the 80% confidence interval carried by forecast bounds
pub const CONFIDENCE_Z: f64 = 1.2816;

/// One forecasted day of demand, optionally with an 80% confidence interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub demand: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, demand: f64) -> Self {
        ForecastPoint {
            date,
            demand,
            lower: None,
            upper: None,
        }
    }

    pub fn with_bounds(date: NaiveDate, demand: f64, lower: f64, upper: f64) -> Self {
        ForecastPoint {
            date,
            demand,
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Demand standard deviation implied by the confidence bounds,
    /// when both are present
    pub fn implied_sigma(&self) -> Option<f64> {
        match (self.lower, self.upper) {
            (Some(lo), Some(hi)) if hi >= lo => Some((hi - lo) / (2.0 * CONFIDENCE_Z)),
            _ => None,
        }
    }
}
