use tracing::{debug, info};

use stockplan_sim::simulate;
use stockplan_types::{
    CostParameters, ForecastPoint, InventoryPolicy, Result, SimulationResult,
    StockplanError,
};

use crate::grid::SearchGrid;

/// Best policy found by the grid search, with the metrics of its own
/// evaluation run
#[derive(Debug, Clone)]
pub struct Optimization {
    pub policy: InventoryPolicy,
    pub metrics: SimulationResult,
    pub evaluated: usize,
}

impl Optimization {
    /// Plain-text summary of the recommendation, for the `explanation`
    /// field of the HTTP response
    pub fn explanation(&self, costs: &CostParameters) -> String {
        format!(
            "Reorder when on-hand inventory falls to {} units and order {} units \
             per replenishment. Over {} days this policy averages {:.0} orders and \
             a total cost of ${:.2} (holding ${:.2}, stockout ${:.2}, ordering \
             ${:.2}), with a {:.1}% fill rate and stockouts on {:.1}% of days.",
            self.policy.reorder_point,
            self.policy.order_quantity,
            costs.horizon,
            self.metrics.num_orders,
            self.metrics.total_cost,
            self.metrics.total_holding_cost,
            self.metrics.total_stockout_cost,
            self.metrics.total_ordering_cost,
            self.metrics.fill_rate * 100.0,
            self.metrics.stockout_rate * 100.0,
        )
    }
}

/// Search (R, Q) candidates for the minimum expected total cost.
///
/// Every candidate is evaluated with the same seed so repeated calls are
/// reproducible. Ties on cost go to the higher fill rate.
pub fn optimize(
    costs: &CostParameters,
    demand: &[ForecastPoint],
    seed: u64,
) -> Result<Optimization> {
    costs.validate()?;
    if demand.is_empty() {
        return Err(StockplanError::InsufficientData(
            "no demand trace to optimize against".to_string(),
        ));
    }

    let grid = SearchGrid::from_trace(demand, costs);
    debug!(
        candidates = grid.candidate_count(),
        trials = costs.n_simulations,
        "starting policy search"
    );

    let mut best: Option<(InventoryPolicy, SimulationResult)> = None;
    let mut evaluated = 0usize;

    for &reorder_point in &grid.reorder_points {
        for &order_quantity in &grid.order_quantities {
            let policy = InventoryPolicy::new(reorder_point, order_quantity);
            let metrics = simulate(policy, demand, costs, seed)?;
            evaluated += 1;

            let improves = match &best {
                None => true,
                Some((_, incumbent)) => {
                    metrics.total_cost < incumbent.total_cost
                        || (metrics.total_cost == incumbent.total_cost
                            && metrics.fill_rate > incumbent.fill_rate)
                }
            };
            if improves {
                best = Some((policy, metrics));
            }
        }
    }

    let (policy, metrics) = best.ok_or_else(|| {
        StockplanError::Internal("policy search produced no candidates".to_string())
    })?;

    info!(
        reorder_point = policy.reorder_point,
        order_quantity = policy.order_quantity,
        total_cost = metrics.total_cost,
        fill_rate = metrics.fill_rate,
        evaluated,
        "policy search finished"
    );

    Ok(Optimization {
        policy,
        metrics,
        evaluated,
    })
}
