use serde::{Deserialize, Serialize};

use crate::error::{Result, StockplanError};

/// Continuous-review (R, Q) replenishment policy: order `order_quantity`
/// units whenever on-hand inventory falls to or below `reorder_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryPolicy {
    pub reorder_point: u32,
    pub order_quantity: u32,
}

impl InventoryPolicy {
    pub fn new(reorder_point: u32, order_quantity: u32) -> Self {
        InventoryPolicy {
            reorder_point,
            order_quantity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.order_quantity == 0 {
            return Err(StockplanError::InvalidPolicy(
                "order_quantity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
