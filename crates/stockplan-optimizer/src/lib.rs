mod grid;
mod search;

pub use grid::SearchGrid;
pub use search::{optimize, Optimization};
