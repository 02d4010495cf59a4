use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockplan_types::{DemandRecord, Result, StockplanError};

/// Stable opaque identifier for a stored record.
/// Ids are never reused, so a record keeps its identity even when
/// earlier records are deleted and positional indices shift.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// A demand record together with its stable id
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub record: DemandRecord,
}

/// Partial update for a stored record
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RecordPatch {
    pub date: Option<NaiveDate>,
    pub units: Option<f64>,
}

/// In-memory demand-record store.
///
/// Records keep insertion order and are addressed by positional index at
/// the HTTP edge (the observed contract); internally each record carries a
/// stable [`RecordId`]. Callers that need write serialization wrap the
/// store in a mutex.
#[derive(Debug, Clone, Default)]
pub struct DemandStore {
    records: Vec<StoredRecord>,
    next_id: u64,
}

impl DemandStore {
    pub fn new() -> Self {
        DemandStore::default()
    }

    /// Build a store from existing records, assigning fresh ids
    pub fn from_records(records: Vec<DemandRecord>) -> Result<Self> {
        let mut store = DemandStore::new();
        for record in records {
            store.append(record)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    /// Clone out the bare demand series, in insertion order
    pub fn demand(&self) -> Vec<DemandRecord> {
        self.records.iter().map(|stored| stored.record).collect()
    }

    pub fn get(&self, index: usize) -> Result<&StoredRecord> {
        self.records
            .get(index)
            .ok_or(StockplanError::RecordNotFound(index))
    }

    /// Append a record, returning its stable id
    pub fn append(&mut self, record: DemandRecord) -> Result<RecordId> {
        record.validate()?;
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.records.push(StoredRecord { id, record });
        Ok(id)
    }

    /// Apply a partial update to the record at `index`
    pub fn update(&mut self, index: usize, patch: RecordPatch) -> Result<()> {
        let stored = self
            .records
            .get_mut(index)
            .ok_or(StockplanError::RecordNotFound(index))?;
        let mut updated = stored.record;
        if let Some(date) = patch.date {
            updated.date = date;
        }
        if let Some(units) = patch.units {
            updated.units = units;
        }
        updated.validate()?;
        stored.record = updated;
        Ok(())
    }

    /// Remove and return the record at `index`.
    /// Later records shift down by one position; their ids do not change.
    pub fn remove(&mut self, index: usize) -> Result<StoredRecord> {
        if index >= self.records.len() {
            return Err(StockplanError::RecordNotFound(index));
        }
        Ok(self.records.remove(index))
    }

    /// Mean units across all records (0.0 when empty)
    pub fn mean_units(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let total: f64 = self.records.iter().map(|stored| stored.record.units).sum();
        total / self.records.len() as f64
    }

    /// Latest date present in the store
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records
            .iter()
            .map(|stored| stored.record.date)
            .max()
    }
}
