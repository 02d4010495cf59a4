use rand::Rng;
use rand_distr::{Distribution, Normal};

use stockplan_types::{ForecastPoint, Result, StockplanError};

/// Floor on per-day demand standard deviation for scenario sampling
const SIGMA_FLOOR: f64 = 1.0;

/// Per-day demand distribution driving Monte-Carlo trials.
///
/// The mean trace comes straight from the forecast points. Each day's
/// standard deviation is taken from the point's confidence bounds when
/// present, otherwise from the spread of the whole trace, floored at 1.0.
#[derive(Debug, Clone)]
pub struct DemandModel {
    mu: Vec<f64>,
    sigma: Vec<f64>,
}

impl DemandModel {
    /// Build the model from the first `horizon` forecast points.
    /// The trace must cover the horizon.
    pub fn from_forecast(points: &[ForecastPoint], horizon: u32) -> Result<Self> {
        let horizon = horizon as usize;
        if points.len() < horizon {
            return Err(StockplanError::InvalidConfiguration(format!(
                "demand trace covers {} days, horizon needs {}",
                points.len(),
                horizon
            )));
        }
        let points = &points[..horizon];

        let mu: Vec<f64> = points.iter().map(|p| p.demand.max(0.0)).collect();

        let trace_mean = mu.iter().sum::<f64>() / mu.len() as f64;
        let trace_var =
            mu.iter().map(|d| (d - trace_mean).powi(2)).sum::<f64>() / mu.len() as f64;
        let fallback_sigma = trace_var.sqrt().max(SIGMA_FLOOR);

        let sigma: Vec<f64> = points
            .iter()
            .map(|p| p.implied_sigma().unwrap_or(fallback_sigma).max(SIGMA_FLOOR))
            .collect();

        Ok(DemandModel { mu, sigma })
    }

    /// The deterministic trace: forecast means, no noise
    pub fn mean_trace(&self) -> &[f64] {
        &self.mu
    }

    /// Draw one full demand scenario, normal around the forecast and
    /// clamped at zero
    pub fn sample_trace<R: Rng>(&self, rng: &mut R) -> Result<Vec<f64>> {
        let mut trace = Vec::with_capacity(self.mu.len());
        for (mu, sigma) in self.mu.iter().zip(&self.sigma) {
            let normal = Normal::new(*mu, *sigma).map_err(|e| {
                StockplanError::Internal(format!("demand distribution: {}", e))
            })?;
            trace.push(normal.sample(rng).max(0.0));
        }
        Ok(trace)
    }
}
