use serde::{Deserialize, Serialize};

use crate::error::{Result, StockplanError};

/// Cost and horizon parameters for one optimization run.
/// Supplied fresh on each request; never mutated after validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// $ per unit held per day
    pub holding_cost: f64,
    /// $ per unit of unmet demand
    pub stockout_penalty: f64,
    /// $ per order placed
    pub ordering_cost: f64,
    /// Days between placing an order and receiving it
    pub lead_time: u32,
    /// Simulation horizon in days
    pub horizon: u32,
    /// Monte-Carlo trials per policy evaluation
    pub n_simulations: u32,
}

impl CostParameters {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("holding_cost", self.holding_cost),
            ("stockout_penalty", self.stockout_penalty),
            ("ordering_cost", self.ordering_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StockplanError::InvalidConfiguration(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        if self.lead_time < 1 {
            return Err(StockplanError::InvalidConfiguration(
                "lead_time must be at least 1 day".to_string(),
            ));
        }
        if self.horizon < 1 {
            return Err(StockplanError::InvalidConfiguration(
                "horizon must be at least 1 day".to_string(),
            ));
        }
        if self.n_simulations < 1 {
            return Err(StockplanError::InvalidConfiguration(
                "n_simulations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CostParameters {
    fn default() -> Self {
        CostParameters {
            holding_cost: 0.5,
            stockout_penalty: 20.0,
            ordering_cost: 200.0,
            lead_time: 1,
            horizon: 90,
            n_simulations: 200,
        }
    }
}
