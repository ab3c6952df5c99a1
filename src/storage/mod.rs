//! Storage layer for the expense tracker
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod ledger_store;

pub use file_io::{read_json, write_json_atomic};
pub use ledger_store::{LedgerSnapshot, LedgerStore, SCHEMA_VERSION};
