//! Core module containing the record type, numbering scheme, and errors

pub mod error;
pub mod number;
pub mod record;

pub use error::{BackupError, ConfigError, FuelDoError, StoreError};
pub use number::{NEW_DO_PLACEHOLDER, date_stamp, is_valid_key, next_do_number};
pub use record::{COLUMNS, DATE_FORMAT, DeliveryOrder, month_label};
