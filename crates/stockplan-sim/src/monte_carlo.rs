use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::trace;

use stockplan_types::{
    CostParameters, ForecastPoint, InventoryPolicy, Result, SimulationResult,
};

use crate::demand::DemandModel;
use crate::path::simulate_path;

/// Evaluate one (R, Q) policy against a forecast trace.
///
/// With `n_simulations == 1` the forecast means are used verbatim and the
/// result is fully deterministic. With more trials, each trial redraws
/// the whole demand trace independently and every output metric is the
/// plain average across trials. Trial `i` seeds its own generator from
/// `seed + i`, so trials are reproducible and order-independent.
pub fn simulate(
    policy: InventoryPolicy,
    demand: &[ForecastPoint],
    costs: &CostParameters,
    seed: u64,
) -> Result<SimulationResult> {
    costs.validate()?;
    policy.validate()?;
    let model = DemandModel::from_forecast(demand, costs.horizon)?;

    if costs.n_simulations == 1 {
        return Ok(simulate_path(policy, model.mean_trace(), costs).into_result());
    }

    let trials = costs.n_simulations;
    let mut acc = SimulationResult::default();
    for trial in 0..trials {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
        let trace = model.sample_trace(&mut rng)?;
        let result = simulate_path(policy, &trace, costs).into_result();

        acc.mean_inventory += result.mean_inventory;
        acc.fill_rate += result.fill_rate;
        acc.stockout_rate += result.stockout_rate;
        acc.num_orders += result.num_orders;
        acc.total_holding_cost += result.total_holding_cost;
        acc.total_stockout_cost += result.total_stockout_cost;
        acc.total_ordering_cost += result.total_ordering_cost;
    }

    let n = trials as f64;
    acc.mean_inventory /= n;
    acc.fill_rate = (acc.fill_rate / n).clamp(0.0, 1.0);
    acc.stockout_rate = (acc.stockout_rate / n).clamp(0.0, 1.0);
    acc.num_orders /= n;
    acc.total_holding_cost /= n;
    acc.total_stockout_cost /= n;
    acc.total_ordering_cost /= n;
    // Recompute the sum so the cost identity holds exactly
    acc.total_cost =
        acc.total_holding_cost + acc.total_stockout_cost + acc.total_ordering_cost;

    trace!(
        reorder_point = policy.reorder_point,
        order_quantity = policy.order_quantity,
        trials,
        total_cost = acc.total_cost,
        "policy evaluated"
    );
    Ok(acc)
}
