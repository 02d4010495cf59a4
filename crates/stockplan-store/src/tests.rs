// Tests for the demand-record store

#[cfg(test)]
mod tests {
    use crate::*;
    use chrono::NaiveDate;
    use stockplan_types::{DemandRecord, StockplanError};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn seeded_store() -> DemandStore {
        DemandStore::from_records(vec![
            DemandRecord::new(date("2025-01-01"), 10.0),
            DemandRecord::new(date("2025-01-02"), 20.0),
            DemandRecord::new(date("2025-01-03"), 30.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_append_assigns_monotone_ids() {
        let store = seeded_store();
        let ids: Vec<u64> = store.records().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_ids_stable_across_removal() {
        let mut store = seeded_store();
        store.remove(0).unwrap();

        // Positions shift, ids do not
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().id, RecordId(1));
        assert_eq!(store.get(1).unwrap().id, RecordId(2));

        // A fresh append never reuses a released id
        let id = store
            .append(DemandRecord::new(date("2025-01-04"), 40.0))
            .unwrap();
        assert_eq!(id, RecordId(3));
    }

    #[test]
    fn test_update_partial_patch() {
        let mut store = seeded_store();
        store
            .update(
                1,
                RecordPatch {
                    units: Some(25.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.get(1).unwrap().record.units, 25.0);
        assert_eq!(store.get(1).unwrap().record.date, date("2025-01-02"));
    }

    #[test]
    fn test_update_rejects_invalid_units() {
        let mut store = seeded_store();
        let err = store
            .update(
                0,
                RecordPatch {
                    units: Some(-5.0),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StockplanError::InvalidRecord(_)));
        // Original record untouched
        assert_eq!(store.get(0).unwrap().record.units, 10.0);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut store = seeded_store();
        assert!(matches!(
            store.get(3),
            Err(StockplanError::RecordNotFound(3))
        ));
        assert!(store.update(9, RecordPatch::default()).is_err());
        assert!(store.remove(9).is_err());
    }

    #[test]
    fn test_mean_and_last_date() {
        let store = seeded_store();
        assert!((store.mean_units() - 20.0).abs() < 1e-12);
        assert_eq!(store.last_date(), Some(date("2025-01-03")));

        let empty = DemandStore::new();
        assert_eq!(empty.mean_units(), 0.0);
        assert_eq!(empty.last_date(), None);
    }

    #[test]
    fn test_csv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daily_sales.csv");

        let records = seeded_store().demand();
        save_csv(&path, &records).unwrap();
        let loaded = load_csv(&path).unwrap();

        assert_eq!(records, loaded);
    }

    #[test]
    fn test_csv_missing_file() {
        let err = load_csv("/nonexistent/daily_sales.csv").unwrap_err();
        assert!(matches!(err, StockplanError::Io(_)));
    }
}
