mod model;
mod prep;

pub use model::{forecast, SeasonalTrend};
pub use prep::daily_series;
