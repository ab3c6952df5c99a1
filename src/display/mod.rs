//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger contents for terminal display.

pub mod report;
pub mod transaction;

pub use report::{
    format_budget_report, format_category_breakdown, format_net_line, format_summary, SummaryView,
};
pub use transaction::{format_totals_line, format_transaction_details, format_transaction_table};

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
