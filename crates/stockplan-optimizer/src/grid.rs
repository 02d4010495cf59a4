use stockplan_types::{CostParameters, ForecastPoint};

/// Points per grid axis; 16x16 keeps a full search under a few hundred
/// policy evaluations
const AXIS_POINTS: u32 = 16;

/// Candidate (R, Q) values derived from the demand trace.
///
/// Reorder points span zero to three lead-times of mean demand; order
/// quantities span one to ten days of mean demand. Bounds are always
/// included and the axes are integer-stepped.
#[derive(Debug, Clone)]
pub struct SearchGrid {
    pub reorder_points: Vec<u32>,
    pub order_quantities: Vec<u32>,
}

fn axis(low: u32, high: u32) -> Vec<u32> {
    let high = high.max(low);
    let span = high - low;
    let step = (span / (AXIS_POINTS - 1)).max(1);

    let mut values = Vec::new();
    let mut value = low;
    while value < high {
        values.push(value);
        value = value.saturating_add(step);
    }
    values.push(high);
    values
}

impl SearchGrid {
    pub fn from_trace(demand: &[ForecastPoint], costs: &CostParameters) -> Self {
        let horizon = (costs.horizon as usize).min(demand.len());
        let total: f64 = demand[..horizon]
            .iter()
            .map(|point| point.demand.max(0.0))
            .sum();
        let mean = if horizon > 0 {
            (total / horizon as f64).max(1.0)
        } else {
            1.0
        };

        let reorder_max = (3.0 * mean * costs.lead_time as f64).round() as u32;
        let quantity_min = mean.round().max(1.0) as u32;
        let quantity_max = ((10.0 * mean).round() as u32).max(quantity_min);

        SearchGrid {
            reorder_points: axis(0, reorder_max),
            order_quantities: axis(quantity_min, quantity_max),
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.reorder_points.len() * self.order_quantities.len()
    }
}
