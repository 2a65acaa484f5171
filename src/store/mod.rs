//! Durable delivery-order storage

pub mod csv_table;
pub mod order_store;

pub use order_store::OrderStore;
