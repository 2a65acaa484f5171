//! Typed error handling for the fueldo crate
//!
//! Errors are grouped per area, the way the application surfaces them:
//!
//! - [`StoreError`]: delivery-order table operations (load, upsert, delete)
//! - [`ConfigError`]: company-identity configuration and assets
//! - [`BackupError`]: database backup copies
//!
//! [`FuelDoError`] wraps the categories for callers that funnel everything
//! through one type. Lenient field parsing (a date or quantity that fails
//! to parse on load) is deliberately *not* an error anywhere in this
//! hierarchy: it degrades the field to its unset value instead.

use std::path::PathBuf;

use thiserror::Error;

/// The top-level error type, wrapping the per-area categories
#[derive(Debug, Error)]
pub enum FuelDoError {
    /// Delivery-order table errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Backup errors
    #[error(transparent)]
    Backup(#[from] BackupError),
}

impl FuelDoError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FuelDoError::Store(e) => e.error_code(),
            FuelDoError::Config(e) => e.error_code(),
            FuelDoError::Backup(e) => e.error_code(),
        }
    }
}

/// Errors from the delivery-order store.
///
/// Every variant leaves the in-memory table in a defined state: `upsert`
/// restores its pre-call snapshot on a failed write, `delete` keeps the
/// deletion applied (the caller resynchronizes with a reload). Nothing
/// here is fatal to the process.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The caller passed an empty key or the "no selection" placeholder to
    /// a mutating operation
    #[error("'{key}' is not a valid DO number; generate one before saving")]
    InvalidKey {
        /// The offending key as received
        key: String,
    },

    /// The full-table rewrite failed, typically because the file is open
    /// in another program
    #[error("failed to persist delivery-order table to {}: {source}", path.display())]
    Persistence { path: PathBuf, source: csv::Error },

    /// The durable table exists but could not be read
    #[error("delivery-order table at {} is unreadable: {source}", path.display())]
    Load { path: PathBuf, source: csv::Error },

    /// The durable table's header row does not match the canonical column
    /// set
    #[error("delivery-order table at {} has an unexpected header row", path.display())]
    Schema { path: PathBuf },

    /// Plain filesystem failure around the table file
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::InvalidKey { .. } => "INVALID_KEY",
            StoreError::Persistence { .. } => "PERSISTENCE_ERROR",
            StoreError::Load { .. } | StoreError::Schema { .. } => "LOAD_ERROR",
            StoreError::Io { .. } => "IO_ERROR",
        }
    }
}

/// Errors from company-identity configuration and asset handling
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the configuration or asset file failed
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file exists but is not the expected JSON mapping
    #[error("configuration at {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Malformed { .. } => "CONFIG_MALFORMED",
        }
    }
}

/// Errors from the backup copy
#[derive(Debug, Error)]
pub enum BackupError {
    /// There is no database file to back up
    #[error("database file not found at {}; nothing to back up", path.display())]
    MissingDatabase { path: PathBuf },

    /// Creating the backup directory or copying the file failed
    #[error("backup to {} failed: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BackupError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BackupError::MissingDatabase { .. } => "BACKUP_MISSING_DATABASE",
            BackupError::Io { .. } => "BACKUP_IO_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_propagate_through_wrapper() {
        let err = FuelDoError::from(StoreError::InvalidKey {
            key: "".to_string(),
        });
        assert_eq!(err.error_code(), "INVALID_KEY");

        let err = FuelDoError::from(BackupError::MissingDatabase {
            path: PathBuf::from("dbase.csv"),
        });
        assert_eq!(err.error_code(), "BACKUP_MISSING_DATABASE");
    }

    #[test]
    fn test_invalid_key_message_names_the_key() {
        let err = StoreError::InvalidKey {
            key: "--- Buat DO Baru ---".to_string(),
        };
        assert!(err.to_string().contains("--- Buat DO Baru ---"));
    }
}
