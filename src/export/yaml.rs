//! YAML Export functionality
//!
//! Exports the ledger to YAML for human-readable backup.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::LedgerExport;
use crate::ledger::Ledger;

/// Export the ledger to YAML format
pub fn export_ledger_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> TrackerResult<()> {
    let export = LedgerExport::from_ledger(ledger);
    let io_err = |e: std::io::Error| TrackerError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Ledger Export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer, "# Transactions: {}", export.metadata.transaction_count).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let mut ledger = Ledger::new();
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(4_200),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "books",
            "rust book",
        )
        .unwrap();
        ledger.add(txn).unwrap();

        let mut output = Vec::new();
        export_ledger_yaml(&ledger, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Expense Tracker Ledger Export"));
        assert!(yaml.contains("# Transactions: 1"));
        assert!(yaml.contains("schema_version"));
        assert!(yaml.contains("rust book"));

        let parsed: LedgerExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.transactions, ledger.all_sorted());
    }
}
