//! The authoritative delivery-order store
//!
//! An [`OrderStore`] owns the loaded table for one durable file. It is an
//! explicit object — there is no ambient cache; after an external writer
//! touches the file, call [`OrderStore::reload`] before the next read or
//! number generation.
//!
//! Single-user, single-process contract: no locking and no versioning. If
//! two sessions generate the same number before either commits, the second
//! save silently replaces the first (last-write-wins by key).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::core::error::StoreError;
use crate::core::number;
use crate::core::record::DeliveryOrder;
use crate::store::csv_table;

/// Delivery-order table keyed by DO number, backed by one CSV file
#[derive(Debug)]
pub struct OrderStore {
    path: PathBuf,
    table: Vec<DeliveryOrder>,
}

impl OrderStore {
    /// Open the store at `path`, loading every row.
    ///
    /// A missing file is created empty with the canonical header. A file
    /// that exists but cannot be decoded fails with
    /// [`StoreError::Load`] / [`StoreError::Schema`]; unparseable dates and
    /// quantities inside otherwise well-formed rows degrade to unset
    /// instead of failing. Use [`open_or_empty`](Self::open_or_empty) to
    /// keep going with an empty table when the file is broken.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let table = csv_table::read_table(&path)?;
        tracing::debug!(
            path = %path.display(),
            rows = table.len(),
            "delivery-order table loaded"
        );
        Ok(Self { path, table })
    }

    /// Open the store at `path`, keeping the application usable when the
    /// durable table is malformed.
    ///
    /// On a clean load this is [`open`](Self::open). When the file exists
    /// but cannot be decoded, the load error is handed back alongside a
    /// store over an *empty* in-memory table so the caller can show the
    /// message and carry on; the broken file is left untouched until the
    /// next successful mutation rewrites it in full.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(store) => (store, None),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "delivery-order table unreadable; continuing with an empty table"
                );
                (
                    Self {
                        path,
                        table: Vec::new(),
                    },
                    Some(err),
                )
            }
        }
    }

    /// Path of the durable table file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Discard the loaded table and re-read it from the durable file
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.table = csv_table::read_table(&self.path)?;
        Ok(())
    }

    /// All loaded records, in table order
    pub fn records(&self) -> &[DeliveryOrder] {
        &self.table
    }

    /// Number of loaded records
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Look up one record by DO number
    pub fn get(&self, do_number: &str) -> Option<&DeliveryOrder> {
        self.table.iter().find(|r| r.do_number == do_number)
    }

    /// Generate the next DO number for `today` from the loaded keys.
    ///
    /// Pure and idempotent — the number is not reserved. Repeated calls
    /// without an intervening [`upsert`](Self::upsert) return the same
    /// value.
    pub fn next_do_number(&self, today: NaiveDate) -> String {
        number::next_do_number(self.table.iter().map(|r| r.do_number.as_str()), today)
    }

    /// Insert or replace the record with `order`'s DO number, then rewrite
    /// the durable file in full.
    ///
    /// Replace is delete-then-append: the previous row's `sequence_id` is
    /// discarded and the saved row gets `max + 1` over the remaining rows
    /// (1 when the table was otherwise empty). Callers that depend on the
    /// original system's files rely on exactly this resequencing.
    ///
    /// On a failed write the in-memory table reverts to its pre-call state
    /// and nothing is considered committed.
    pub fn upsert(&mut self, mut order: DeliveryOrder) -> Result<(), StoreError> {
        if !number::is_valid_key(&order.do_number) {
            tracing::warn!(key = %order.do_number, "rejected upsert with invalid DO number");
            return Err(StoreError::InvalidKey {
                key: order.do_number,
            });
        }

        let snapshot = self.table.clone();
        let before = self.table.len();
        self.table.retain(|r| r.do_number != order.do_number);
        let replaced = self.table.len() != before;

        order.sequence_id = self.max_sequence_id() + 1;
        let do_number = order.do_number.clone();
        self.table.push(order);

        if let Err(err) = csv_table::write_table(&self.path, &self.table) {
            self.table = snapshot;
            return Err(err);
        }

        if replaced {
            tracing::info!(do_number = %do_number, "delivery order replaced");
        } else {
            tracing::info!(do_number = %do_number, "delivery order inserted");
        }
        Ok(())
    }

    /// Remove every row matching `do_number` (exactly one under the
    /// uniqueness invariant; zero or many are tolerated), then rewrite the
    /// durable file in full.
    ///
    /// Unlike [`upsert`](Self::upsert), a failed write does *not* roll the
    /// in-memory table back — the deletion stays applied and the caller is
    /// expected to [`reload`](Self::reload) to resynchronize with the
    /// durable file.
    pub fn delete(&mut self, do_number: &str) -> Result<(), StoreError> {
        if !number::is_valid_key(do_number) {
            tracing::warn!(key = %do_number, "rejected delete with invalid DO number");
            return Err(StoreError::InvalidKey {
                key: do_number.to_string(),
            });
        }

        let before = self.table.len();
        self.table.retain(|r| r.do_number != do_number);
        let removed = before - self.table.len();

        csv_table::write_table(&self.path, &self.table)?;

        tracing::info!(do_number = %do_number, removed, "delivery order deleted");
        Ok(())
    }

    fn max_sequence_id(&self) -> u64 {
        self.table.iter().map(|r| r.sequence_id).max().unwrap_or(0)
    }
}
