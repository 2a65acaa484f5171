//! Whole-file read/write of the durable delivery-order table
//!
//! Every mutation in the store is a full read-modify-rewrite cycle over a
//! single CSV file with the canonical header row. There is no append path,
//! no partial write, and no incremental log.

use std::path::Path;

use crate::core::error::StoreError;
use crate::core::record::{COLUMNS, DeliveryOrder};

/// Read every row of the table at `path`.
///
/// If the file does not exist yet, an empty table with the canonical
/// header is created first and no rows are returned. A file whose header
/// row differs from [`COLUMNS`] fails with [`StoreError::Schema`]; a row
/// that cannot be decoded at all (wrong field count and the like) fails
/// with [`StoreError::Load`]. Field-level leniency — unparseable dates,
/// quantities, counters — is handled by the row type itself and never
/// fails the load.
pub fn read_table(path: &Path) -> Result<Vec<DeliveryOrder>, StoreError> {
    if !path.exists() {
        write_table(path, &[])?;
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| StoreError::Load {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| StoreError::Load {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    if headers.iter().ne(COLUMNS) {
        return Err(StoreError::Schema {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: DeliveryOrder = result.map_err(|source| StoreError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Rewrite the table at `path` in full: canonical header, then every row.
///
/// The previous file content is replaced wholesale. No partial-file
/// consistency is guaranteed if the process is interrupted mid-write;
/// that matches the single-user contract of the store.
pub fn write_table(path: &Path, rows: &[DeliveryOrder]) -> Result<(), StoreError> {
    let persistence = |source: csv::Error| StoreError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(persistence)?;

    writer.write_record(COLUMNS).map_err(persistence)?;
    for row in rows {
        writer.serialize(row).map_err(persistence)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_first_read_creates_empty_table_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbase.csv");

        let rows = read_table(&path).unwrap();
        assert!(rows.is_empty());

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));
    }

    #[test]
    fn test_write_then_read_round_trips_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbase.csv");
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();

        let mut order = DeliveryOrder::new_for_date("010525-01", today);
        order.sequence_id = 1;
        order.client = "PT. Example Mining".to_string();
        order.quantity_liters = Some(16000.0);

        write_table(&path, std::slice::from_ref(&order)).unwrap();
        let rows = read_table(&path).unwrap();
        assert_eq!(rows, vec![order]);
    }

    #[test]
    fn test_unknown_header_is_a_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbase.csv");
        std::fs::write(&path, "foo,bar\n1,2\n").unwrap();

        let err = read_table(&path).unwrap_err();
        assert!(matches!(err, StoreError::Schema { .. }));
        assert_eq!(err.error_code(), "LOAD_ERROR");
    }

    #[test]
    fn test_short_row_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbase.csv");
        std::fs::write(&path, format!("{}\n1,May\n", COLUMNS.join(","))).unwrap();

        let err = read_table(&path).unwrap_err();
        assert!(matches!(err, StoreError::Load { .. }));
    }

    #[test]
    fn test_malformed_fields_degrade_to_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbase.csv");
        let row = "oops,May,,010525-01,not-a-date,,,,,,,2025-05-01,,,lots,,,,";
        std::fs::write(&path, format!("{}\n{}\n", COLUMNS.join(","), row)).unwrap();

        let rows = read_table(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sequence_id, 0);
        assert_eq!(rows[0].order_date, None);
        assert_eq!(
            rows[0].po_date,
            Some(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
        );
        assert_eq!(rows[0].quantity_liters, None);
    }
}
