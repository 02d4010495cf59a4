mod csv_io;
mod store;

pub use csv_io::{load_csv, save_csv};
pub use store::{DemandStore, RecordId, RecordPatch, StoredRecord};

#[cfg(test)]
mod tests;
