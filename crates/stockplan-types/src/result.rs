use serde::{Deserialize, Serialize};

/// Output of evaluating one (R, Q) policy over the horizon.
/// With Monte-Carlo trials every field is the average across trials,
/// so `num_orders` is fractional.
///
/// `total_cost` always equals the sum of the three cost components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub mean_inventory: f64,
    pub fill_rate: f64,
    pub stockout_rate: f64,
    pub num_orders: f64,
    pub total_holding_cost: f64,
    pub total_stockout_cost: f64,
    pub total_ordering_cost: f64,
    pub total_cost: f64,
}
