//! Expense Tracker - a personal ledger of expenses and income
//!
//! This library provides the core of the `expense` command-line tool: an
//! in-memory ledger of transactions with category summaries, a single weekly
//! or monthly budget with overspending warnings, and JSON persistence.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core value types (IDs, money, transactions, the budget)
//! - `ledger`: The ledger aggregate and its change observers
//! - `services`: Input parsing and validated user operations
//! - `storage`: JSON file storage layer
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `expense` binary
//! - `error`: Custom error types
//! - `logging`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::ledger::Ledger;
//! use expense_tracker::models::{Money, Transaction, TransactionType};
//!
//! let mut ledger = Ledger::new();
//! let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let coffee = Transaction::new(
//!     TransactionType::Expense,
//!     Money::from_cents(550),
//!     day,
//!     "food",
//!     "coffee",
//! )
//! .unwrap();
//! let id = ledger.add(coffee).unwrap();
//!
//! assert_eq!(ledger.total(TransactionType::Expense, day, day), Money::from_cents(550));
//! assert!(ledger.get_by_prefix(&id.as_str()[..8]).is_some());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use ledger::Ledger;
