//! CSV Export functionality
//!
//! Exports transactions to a spreadsheet-friendly CSV file, newest first.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;

const HEADER: [&str; 6] = ["ID", "Date", "Type", "Amount", "Category", "Description"];

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(ledger: &Ledger, writer: W) -> TrackerResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    let export_err = |e: ::csv::Error| TrackerError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for txn in ledger.all_sorted() {
        let amount = txn.amount();
        let record = [
            txn.id().to_string(),
            txn.date().format("%Y-%m-%d").to_string(),
            txn.kind().to_string(),
            format!("{}.{:02}", amount.dollars(), amount.cents_part()),
            txn.category().to_string(),
            txn.description().to_string(),
        ];
        csv_writer.write_record(&record).map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionType};
    use chrono::NaiveDate;

    fn add(ledger: &mut Ledger, cents: i64, day: u32, description: &str) {
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
            "food",
            description,
        )
        .unwrap();
        ledger.add(txn).unwrap();
    }

    fn export(ledger: &Ledger) -> String {
        let mut output = Vec::new();
        export_transactions_csv(ledger, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_ledger() {
        assert_eq!(
            export(&Ledger::new()),
            "ID,Date,Type,Amount,Category,Description\n"
        );
    }

    #[test]
    fn test_rows_newest_first() {
        let mut ledger = Ledger::new();
        add(&mut ledger, 505, 1, "bagel");
        add(&mut ledger, 1_999, 9, "dinner");

        let csv = export(&ledger);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(",2024-07-09,EXPENSE,19.99,food,dinner"));
        assert!(lines[2].ends_with(",2024-07-01,EXPENSE,5.05,food,bagel"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut ledger = Ledger::new();
        add(&mut ledger, 300, 4, "eggs, milk \"fresh\"");

        let csv = export(&ledger);
        assert!(csv.contains("\"eggs, milk \"\"fresh\"\"\""));
    }
}
