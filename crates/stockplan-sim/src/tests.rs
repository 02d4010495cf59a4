// Tests for the (R, Q) policy evaluator

#[cfg(test)]
mod tests {
    use crate::*;
    use chrono::{Duration, NaiveDate};
    use stockplan_types::{
        CostParameters, ForecastPoint, InventoryPolicy, StockplanError,
    };

    fn trace(demands: &[f64]) -> Vec<ForecastPoint> {
        let start = NaiveDate::parse_from_str("2025-06-01", "%Y-%m-%d").unwrap();
        demands
            .iter()
            .enumerate()
            .map(|(i, &d)| ForecastPoint::new(start + Duration::days(i as i64), d))
            .collect()
    }

    fn costs(horizon: u32) -> CostParameters {
        CostParameters {
            holding_cost: 0.5,
            stockout_penalty: 20.0,
            ordering_cost: 200.0,
            lead_time: 1,
            horizon,
            n_simulations: 1,
        }
    }

    #[test]
    fn test_zero_demand_cost_is_ordering_only() {
        // With no demand and free holding, the only cost left is ordering
        let mut params = costs(30);
        params.holding_cost = 0.0;
        let policy = InventoryPolicy::new(50, 40);

        let result = simulate(policy, &trace(&[0.0; 30]), &params, 7).unwrap();

        assert_eq!(result.fill_rate, 1.0);
        assert!(
            (result.total_cost - params.ordering_cost * result.num_orders).abs() < 1e-9
        );
        assert_eq!(result.total_stockout_cost, 0.0);
    }

    #[test]
    fn test_zero_penalty_means_zero_stockout_cost() {
        let mut params = costs(30);
        params.stockout_penalty = 0.0;
        // Starved policy: tiny Q guarantees lost sales
        let policy = InventoryPolicy::new(0, 1);

        let result = simulate(policy, &trace(&[25.0; 30]), &params, 7).unwrap();

        assert_eq!(result.total_stockout_cost, 0.0);
        assert!(result.fill_rate < 1.0);
    }

    #[test]
    fn test_deterministic_single_run() {
        let params = costs(60);
        let policy = InventoryPolicy::new(25, 100);
        let demand = trace(&[25.0; 60]);

        let a = simulate(policy, &demand, &params, 1).unwrap();
        let b = simulate(policy, &demand, &params, 999).unwrap();
        // n_simulations == 1 ignores the seed entirely
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut params = costs(60);
        params.n_simulations = 50;
        let policy = InventoryPolicy::new(25, 100);
        let demand = trace(&[25.0; 60]);

        let a = simulate(policy, &demand, &params, 42).unwrap();
        let b = simulate(policy, &demand, &params, 42).unwrap();
        assert_eq!(a, b);

        let c = simulate(policy, &demand, &params, 43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_fill_rate_monotone_in_reorder_point() {
        let params = costs(90);
        let demand = trace(&[25.0; 90]);

        let mut previous = -1.0;
        for reorder_point in [0, 10, 20, 30, 50, 75] {
            let policy = InventoryPolicy::new(reorder_point, 60);
            let result = simulate(policy, &demand, &params, 7).unwrap();
            assert!(
                result.fill_rate >= previous,
                "fill rate dropped at R={}",
                reorder_point
            );
            previous = result.fill_rate;
        }
    }

    #[test]
    fn test_cost_identity() {
        for n_simulations in [1, 25] {
            let mut params = costs(45);
            params.n_simulations = n_simulations;
            let policy = InventoryPolicy::new(30, 80);
            let result = simulate(policy, &trace(&[20.0; 45]), &params, 11).unwrap();

            let component_sum = result.total_holding_cost
                + result.total_stockout_cost
                + result.total_ordering_cost;
            assert_eq!(result.total_cost, component_sum);
            assert!(result.fill_rate >= 0.0 && result.fill_rate <= 1.0);
            assert!(result.stockout_rate >= 0.0 && result.stockout_rate <= 1.0);
        }
    }

    #[test]
    fn test_lead_time_delays_arrival() {
        // One big demand day empties the stock; the replenishment lands
        // exactly lead_time days after the order
        let mut params = costs(6);
        params.lead_time = 2;
        let policy = InventoryPolicy::new(10, 30);
        let demand = [30.0, 0.0, 0.0, 0.0, 0.0, 0.0];

        let stats = simulate_path(policy, &demand, &params);
        // Day 0 ends at zero stock and places the order; days 0-1 hold
        // nothing, day 2 onward holds the arrived 30 units
        let expected_holding = params.holding_cost * (30.0 * 4.0);
        assert!((stats.total_holding_cost - expected_holding).abs() < 1e-9);
        assert_eq!(stats.orders_placed, 1);
        assert_eq!(stats.unmet_demand, 0.0);
    }

    #[test]
    fn test_no_order_stacking_while_pending() {
        // Reorder point far above stock keeps the trigger armed every
        // day; only one order may be in flight at a time
        let mut params = costs(10);
        params.lead_time = 5;
        let policy = InventoryPolicy::new(100, 10);
        let demand = [5.0; 10];

        let stats = simulate_path(policy, &demand, &params);
        assert_eq!(stats.orders_placed, 2); // day 0 and day 5
    }

    #[test]
    fn test_lost_sales_never_negative_inventory() {
        let params = costs(10);
        let policy = InventoryPolicy::new(0, 5);
        let demand = [25.0; 10];

        let result = simulate(policy, &trace(&demand), &params, 3).unwrap();
        assert!(result.mean_inventory >= 0.0);
        assert!(result.fill_rate < 1.0);
        assert!(result.stockout_rate > 0.0);
    }

    #[test]
    fn test_stockout_rate_counts_days_not_units() {
        // Demand exceeds stock on exactly the first day
        let params = costs(4);
        let policy = InventoryPolicy::new(0, 10);
        let demand = [15.0, 0.0, 0.0, 0.0];

        let stats = simulate_path(policy, &demand, &params);
        let result = stats.into_result();
        assert_eq!(result.stockout_rate, 0.25);
        // 10 of 15 units filled
        assert!((result.fill_rate - 10.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let err = simulate(
            InventoryPolicy::new(10, 0),
            &trace(&[25.0; 30]),
            &costs(30),
            7,
        )
        .unwrap_err();
        assert!(matches!(err, StockplanError::InvalidPolicy(_)));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = simulate(
            InventoryPolicy::new(10, 50),
            &trace(&[25.0; 30]),
            &costs(0),
            7,
        )
        .unwrap_err();
        assert!(matches!(err, StockplanError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_short_trace_rejected() {
        let err = simulate(
            InventoryPolicy::new(10, 50),
            &trace(&[25.0; 30]),
            &costs(90),
            7,
        )
        .unwrap_err();
        assert!(matches!(err, StockplanError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_monte_carlo_uses_bound_widths() {
        // Wide confidence bounds produce noisier demand, which can only
        // lower the fill rate of a tight policy
        let start = NaiveDate::parse_from_str("2025-06-01", "%Y-%m-%d").unwrap();
        let narrow: Vec<ForecastPoint> = (0..60)
            .map(|i| {
                ForecastPoint::with_bounds(
                    start + Duration::days(i),
                    25.0,
                    24.0,
                    26.0,
                )
            })
            .collect();
        let wide: Vec<ForecastPoint> = (0..60)
            .map(|i| {
                ForecastPoint::with_bounds(
                    start + Duration::days(i),
                    25.0,
                    5.0,
                    45.0,
                )
            })
            .collect();

        let mut params = costs(60);
        params.n_simulations = 100;
        let policy = InventoryPolicy::new(25, 50);

        let calm = simulate(policy, &narrow, &params, 42).unwrap();
        let noisy = simulate(policy, &wide, &params, 42).unwrap();
        assert!(noisy.fill_rate <= calm.fill_rate);
    }
}
