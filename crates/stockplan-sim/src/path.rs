use stockplan_types::{CostParameters, InventoryPolicy, SimulationResult};

/// At most one replenishment order is outstanding at a time
#[derive(Debug, Clone, Copy)]
struct PendingOrder {
    arrival_day: usize,
    quantity: f64,
}

/// Raw accumulators from one simulated path
#[derive(Debug, Clone, Copy, Default)]
pub struct PathStats {
    pub total_holding_cost: f64,
    pub total_stockout_cost: f64,
    pub total_ordering_cost: f64,
    pub orders_placed: u32,
    pub total_demand: f64,
    pub unmet_demand: f64,
    pub stockout_days: u32,
    pub inventory_day_sum: f64,
    pub days: u32,
}

impl PathStats {
    /// Fold the accumulators into per-run metrics
    pub fn into_result(self) -> SimulationResult {
        let fill_rate = if self.total_demand > 0.0 {
            (1.0 - self.unmet_demand / self.total_demand).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let stockout_rate = if self.days > 0 {
            self.stockout_days as f64 / self.days as f64
        } else {
            0.0
        };
        let mean_inventory = if self.days > 0 {
            self.inventory_day_sum / self.days as f64
        } else {
            0.0
        };
        SimulationResult {
            mean_inventory,
            fill_rate,
            stockout_rate,
            num_orders: self.orders_placed as f64,
            total_holding_cost: self.total_holding_cost,
            total_stockout_cost: self.total_stockout_cost,
            total_ordering_cost: self.total_ordering_cost,
            total_cost: self.total_holding_cost
                + self.total_stockout_cost
                + self.total_ordering_cost,
        }
    }
}

/// Simulate one demand path under a continuous-review (R, Q) policy with
/// lost sales.
///
/// Day loop: receive arrivals, realize demand, satisfy it up to on-hand
/// stock (unmet units are lost, inventory never goes negative), reorder
/// when end-of-day inventory is at or below R and nothing is in flight,
/// then accrue holding cost on end-of-day stock, stockout penalty on lost
/// units, and the fixed cost per order placed.
///
/// Initial on-hand stock is one order quantity; the lead time shifts
/// arrivals `lead_time` days after placement.
pub fn simulate_path(
    policy: InventoryPolicy,
    demand: &[f64],
    costs: &CostParameters,
) -> PathStats {
    let mut inventory = policy.order_quantity as f64;
    let mut pending: Option<PendingOrder> = None;
    let mut stats = PathStats {
        days: demand.len() as u32,
        ..Default::default()
    };

    for (today, &demand_today) in demand.iter().enumerate() {
        if let Some(order) = pending {
            if order.arrival_day == today {
                inventory += order.quantity;
                pending = None;
            }
        }

        let demand_today = demand_today.max(0.0);
        stats.total_demand += demand_today;

        let sales = demand_today.min(inventory);
        let lost = demand_today - sales;
        inventory -= sales;
        if lost > 0.0 {
            stats.unmet_demand += lost;
            stats.stockout_days += 1;
        }

        if inventory <= policy.reorder_point as f64 && pending.is_none() {
            pending = Some(PendingOrder {
                arrival_day: today + costs.lead_time as usize,
                quantity: policy.order_quantity as f64,
            });
            stats.orders_placed += 1;
            stats.total_ordering_cost += costs.ordering_cost;
        }

        stats.total_holding_cost += costs.holding_cost * inventory;
        stats.total_stockout_cost += costs.stockout_penalty * lost;
        stats.inventory_day_sum += inventory;
    }

    stats
}
