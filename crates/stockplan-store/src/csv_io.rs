use std::path::Path;

use tracing::info;

use stockplan_types::{DemandRecord, Result, StockplanError};

/// Read demand history from a CSV file with `date,units` headers
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<DemandRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| StockplanError::Io(format!("{}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: DemandRecord =
            row.map_err(|e| StockplanError::Csv(e.to_string()))?;
        record.validate()?;
        records.push(record);
    }

    info!(rows = records.len(), path = %path.display(), "loaded demand history");
    Ok(records)
}

/// Write demand history to a CSV file with `date,units` headers
pub fn save_csv<P: AsRef<Path>>(path: P, records: &[DemandRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| StockplanError::Io(format!("{}: {}", path.display(), e)))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| StockplanError::Csv(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| StockplanError::Io(e.to_string()))?;
    Ok(())
}
