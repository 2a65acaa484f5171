//! One-shot backup of the durable database file
//!
//! A backup is a verbatim copy to a timestamped path. It reads the file
//! on disk directly and never touches any store's in-memory table.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::core::error::BackupError;

/// Copy the database file at `db_path` into `backup_dir` under a
/// timestamped name (`dbase_backup_YYYYMMDD_HHMMSS.<ext>`), creating the
/// directory if needed, and return the backup path.
///
/// The timestamp is passed in by the caller so the operation is
/// deterministic under test.
pub fn backup_database(
    db_path: &Path,
    backup_dir: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf, BackupError> {
    if !db_path.exists() {
        return Err(BackupError::MissingDatabase {
            path: db_path.to_path_buf(),
        });
    }

    fs::create_dir_all(backup_dir).map_err(|source| BackupError::Io {
        path: backup_dir.to_path_buf(),
        source,
    })?;

    let extension = db_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("csv");
    let target = backup_dir.join(format!(
        "dbase_backup_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        extension
    ));

    fs::copy(db_path, &target).map_err(|source| BackupError::Io {
        path: target.clone(),
        source,
    })?;

    tracing::info!(
        from = %db_path.display(),
        to = %target.display(),
        "database backup created"
    );
    Ok(target)
}
