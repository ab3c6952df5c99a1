//! Transaction display formatting
//!
//! Table and detail views of transactions for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Money, Transaction};

use super::truncate;

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, currency: &str, date_format: &str) -> Self {
        Self {
            id: txn.id().short().to_string(),
            date: txn.date().format(date_format).to_string(),
            kind: txn.kind().to_string(),
            amount: txn.amount().format_with_symbol(currency),
            category: txn.category().to_string(),
            description: truncate(txn.description(), DESCRIPTION_WIDTH),
        }
    }
}

/// Render transactions as a table with short IDs
pub fn format_transaction_table(
    transactions: &[Transaction],
    currency: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, currency, date_format));
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Totals line printed under a listing
pub fn format_totals_line(income: Money, expense: Money, currency: &str) -> String {
    format!(
        "Totals: Income {}, Expense {}\n",
        income.format_with_symbol(currency),
        expense.format_with_symbol(currency)
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id()));
    output.push_str(&format!("Type:        {}\n", txn.kind()));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date().format(date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount().format_with_symbol(currency)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category()));
    output.push_str(&format!("Description: {}\n", txn.description()));

    output
}
