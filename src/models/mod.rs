//! Core data models for the expense tracker
//!
//! This module contains the value types the ledger is built from:
//! identifiers, money amounts, transactions and the budget.

pub mod budget;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetReport, BudgetStatus, DEFAULT_LIMIT, DEFAULT_WARNING_PERCENT};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use period::{first_day_of_month, last_day_of_month, BudgetPeriod};
pub use transaction::{parse_transaction_date, Transaction, TransactionType};
