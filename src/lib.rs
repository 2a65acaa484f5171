//! # fueldo
//!
//! Embedded delivery-order (DO) store for fuel-delivery operations: a table
//! of order records keyed by a generated DO number, backed by a single
//! flat CSV file, with the report, configuration, and backup helpers the
//! surrounding application needs.
//!
//! ## Features
//!
//! - **Sequential DO numbering**: `DDMMYY-NN` business keys generated from
//!   the existing table; pure and idempotent until a save commits
//! - **Upsert-by-key semantics**: saving an existing number replaces the
//!   row in place of a duplicate, as delete-then-append
//! - **Whole-file persistence**: every mutation rewrites the durable table
//!   in full; a failed upsert write rolls the in-memory table back
//! - **Lenient loads**: unparseable dates and quantities degrade to their
//!   unset values instead of failing the table
//! - **Report view**: composable month/client/date-range filters with
//!   quantity and count aggregates, plus CSV export
//! - **Delivery-note seam**: renderer trait fed by one record, the company
//!   identity, and an optional header image
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fueldo::prelude::*;
//!
//! let mut store = OrderStore::open("dbase.csv")?;
//!
//! let today = chrono::Local::now().date_naive();
//! let do_number = store.next_do_number(today); // e.g. "010525-01"
//!
//! let mut order = DeliveryOrder::new_for_date(&do_number, today);
//! order.client = "PT. Example Mining".to_string();
//! order.quantity_liters = Some(16000.0);
//! store.upsert(order)?;
//!
//! // Report over the saved table
//! let filtered = ReportFilter::new().client("PT. Example Mining").apply(store.records());
//! let summary = ReportSummary::of(filtered.iter().copied());
//! println!("{} deliveries, {} L", summary.delivery_count, summary.total_liters);
//! ```
//!
//! ## Single-user contract
//!
//! The store provides no locking and no cross-process coordination. Two
//! sessions that generate a number before either saves will collide, and
//! the second save wins by key. Callers that write the file externally
//! must call [`OrderStore::reload`](store::OrderStore::reload) before the
//! next read or number generation.

pub mod backup;
pub mod config;
pub mod core;
pub mod render;
pub mod report;
pub mod store;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{BackupError, ConfigError, FuelDoError, StoreError},
        number::{NEW_DO_PLACEHOLDER, date_stamp, next_do_number},
        record::{COLUMNS, DATE_FORMAT, DeliveryOrder, month_label},
    };

    // === Store ===
    pub use crate::store::OrderStore;

    // === Report ===
    pub use crate::report::{ReportFilter, ReportSummary};

    // === Config & backup ===
    pub use crate::backup::backup_database;
    pub use crate::config::{CompanyIdentity, find_header_image, install_header_image};

    // === Rendering seam ===
    pub use crate::render::{DeliveryNote, DeliveryNoteRenderer, document_file_stem, format_liters};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
