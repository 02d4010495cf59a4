mod costs;
mod error;
mod forecast;
mod policy;
mod record;
mod result;

pub use costs::CostParameters;
pub use error::{Result, StockplanError};
pub use forecast::{ForecastPoint, CONFIDENCE_Z};
pub use policy::InventoryPolicy;
pub use record::DemandRecord;
pub use result::SimulationResult;
