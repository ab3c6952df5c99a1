//! JSON Export functionality
//!
//! Exports the whole ledger to JSON with schema versioning and summary
//! metadata.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::{Budget, Money, Transaction, TransactionType};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub budget: Budget,

    /// All transactions, newest first
    pub transactions: Vec<Transaction>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub expense_total: Money,
    pub income_total: Money,
    /// Date of the oldest transaction
    pub earliest: Option<NaiveDate>,
    /// Date of the newest transaction
    pub latest: Option<NaiveDate>,
}

impl LedgerExport {
    /// Build an export from the current ledger contents
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let transactions = ledger.all_sorted();

        let total_of = |kind: TransactionType| -> Money {
            transactions
                .iter()
                .filter(|t| t.kind() == kind)
                .map(Transaction::amount)
                .sum()
        };

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            expense_total: total_of(TransactionType::Expense),
            income_total: total_of(TransactionType::Income),
            earliest: transactions.iter().map(Transaction::date).min(),
            latest: transactions.iter().map(Transaction::date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget: ledger.budget().clone(),
            transactions,
            metadata,
        }
    }
}

/// Export the ledger to JSON
pub fn export_ledger_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> TrackerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        for (kind, cents, on) in [
            (TransactionType::Expense, 1_500, date(2024, 3, 2)),
            (TransactionType::Expense, 2_500, date(2024, 1, 20)),
            (TransactionType::Income, 90_000, date(2024, 2, 28)),
        ] {
            let txn =
                Transaction::new(kind, Money::from_cents(cents), on, "misc", "entry").unwrap();
            ledger.add(txn).unwrap();
        }
        ledger
    }

    #[test]
    fn test_export_metadata() {
        let export = LedgerExport::from_ledger(&sample_ledger());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(
            export.metadata,
            ExportMetadata {
                transaction_count: 3,
                expense_total: Money::from_cents(4_000),
                income_total: Money::from_cents(90_000),
                earliest: Some(date(2024, 1, 20)),
                latest: Some(date(2024, 3, 2)),
            }
        );
        assert_eq!(export.transactions[0].date(), date(2024, 3, 2));
    }

    #[test]
    fn test_empty_ledger_metadata() {
        let export = LedgerExport::from_ledger(&Ledger::new());
        assert_eq!(export.metadata.transaction_count, 0);
        assert_eq!(export.metadata.earliest, None);
        assert!(export.metadata.expense_total.is_zero());
    }

    #[test]
    fn test_json_output_parses_back() {
        let ledger = sample_ledger();
        let mut output = Vec::new();
        export_ledger_json(&ledger, &mut output, true).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.transactions, ledger.all_sorted());
        assert_eq!(&parsed.budget, ledger.budget());
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let mut output = Vec::new();
        export_ledger_json(&sample_ledger(), &mut output, false).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
