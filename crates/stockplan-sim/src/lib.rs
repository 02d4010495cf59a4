mod demand;
mod monte_carlo;
mod path;

pub use demand::DemandModel;
pub use monte_carlo::simulate;
pub use path::{simulate_path, PathStats};

#[cfg(test)]
mod tests;
