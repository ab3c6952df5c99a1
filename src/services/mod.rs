//! Service layer for the expense tracker
//!
//! The service layer sits between the user interface and the ledger,
//! handling input parsing, validation and relative-date resolution.

pub mod entry;
pub mod parser;

pub use entry::{EntryEdit, EntryInput, EntryService};
pub use parser::{parse_entry, ParsedEntry};
