use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StockplanError};

/// One day of observed demand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub date: NaiveDate,
    pub units: f64,
}

impl DemandRecord {
    pub fn new(date: NaiveDate, units: f64) -> Self {
        DemandRecord { date, units }
    }

    /// Validate the record: units must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        if !self.units.is_finite() {
            return Err(StockplanError::InvalidRecord(format!(
                "non-finite units for {}",
                self.date
            )));
        }
        if self.units < 0.0 {
            return Err(StockplanError::InvalidRecord(format!(
                "negative units ({}) for {}",
                self.units, self.date
            )));
        }
        Ok(())
    }
}
