//! Summary and budget formatting
//!
//! Plain-text rendering of totals, the monthly category breakdown and the
//! budget tracking block.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{BudgetReport, Money, TransactionType};

use super::separator;

const WIDTH: usize = 48;

/// Inputs for the summary view
#[derive(Debug, Clone)]
pub struct SummaryView<'a> {
    pub income: Money,
    pub expense: Money,
    pub month: NaiveDate,
    pub monthly_expenses: &'a BTreeMap<String, Money>,
    pub budget: &'a BudgetReport,
}

/// One-line net position
pub fn format_net_line(income: Money, expense: Money, currency: &str) -> String {
    format!(
        "Net: {} (Income: {} | Expense: {})",
        (income - expense).format_with_symbol(currency),
        income.format_with_symbol(currency),
        expense.format_with_symbol(currency)
    )
}

/// Per-category lines plus a total
pub fn format_category_breakdown(
    summary: &BTreeMap<String, Money>,
    kind: TransactionType,
    currency: &str,
) -> String {
    let mut output = String::new();

    if summary.is_empty() {
        output.push_str(match kind {
            TransactionType::Expense => "  (no expenses)\n",
            TransactionType::Income => "  (no income)\n",
        });
    }
    for (category, amount) in summary {
        output.push_str(&format!(
            "  {:<20} {:>12}\n",
            category,
            amount.format_with_symbol(currency)
        ));
    }

    let total: Money = summary.values().sum();
    output.push_str(&format!(
        "  {:<20} {:>12}\n",
        "Total",
        total.format_with_symbol(currency)
    ));
    output
}

/// The budget tracking block
pub fn format_budget_report(report: &BudgetReport, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "--- Budget Tracking ({}: {} to {}) ---\n",
        report.period, report.start, report.end
    ));
    output.push_str(&format!(
        "{} (Spent: {} / Limit: {})\n",
        report.status,
        report.spent.format_with_symbol(currency),
        report.limit.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        report.remaining.format_with_symbol(currency)
    ));
    output
}

/// Full summary screen
pub fn format_summary(view: &SummaryView<'_>, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format_net_line(view.income, view.expense, currency));
    output.push('\n');
    output.push_str(&separator(WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "Monthly expenses ({}):\n",
        view.month.format("%B %Y")
    ));
    output.push_str(&format_category_breakdown(
        view.monthly_expenses,
        TransactionType::Expense,
        currency,
    ));
    output.push('\n');

    output.push_str(&format_budget_report(view.budget, currency));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, BudgetStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report(status: BudgetStatus) -> BudgetReport {
        BudgetReport {
            period: BudgetPeriod::Monthly,
            start: date(2024, 2, 1),
            end: date(2024, 2, 29),
            limit: Money::from_cents(100_000),
            spent: Money::from_cents(85_000),
            remaining: Money::from_cents(15_000),
            status,
        }
    }

    #[test]
    fn test_net_line_can_go_negative() {
        assert_eq!(
            format_net_line(Money::from_cents(1_000), Money::from_cents(2_550), "$"),
            "Net: -$15.50 (Income: $10.00 | Expense: $25.50)"
        );
    }

    #[test]
    fn test_category_breakdown() {
        let mut summary = BTreeMap::new();
        summary.insert("food".to_string(), Money::from_cents(1_250));
        summary.insert("rent".to_string(), Money::from_cents(50_000));

        let text = format_category_breakdown(&summary, TransactionType::Expense, "$");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("food") && lines[0].contains("$12.50"));
        assert!(lines[2].contains("Total") && lines[2].contains("$512.50"));
    }

    #[test]
    fn test_empty_breakdown() {
        let text = format_category_breakdown(&BTreeMap::new(), TransactionType::Expense, "$");
        assert!(text.contains("(no expenses)"));

        let text = format_category_breakdown(&BTreeMap::new(), TransactionType::Income, "$");
        assert!(text.contains("(no income)"));
        assert!(!text.contains("expenses"));
        assert!(text.contains("$0.00"));
    }

    #[test]
    fn test_budget_block() {
        let text = format_budget_report(&report(BudgetStatus::ApproachingLimit), "$");
        assert!(text.contains("--- Budget Tracking (MONTHLY: 2024-02-01 to 2024-02-29) ---"));
        assert!(text.contains("APPROACHING LIMIT (Spent: $850.00 / Limit: $1000.00)"));
        assert!(text.contains("Remaining: $150.00"));
    }

    #[test]
    fn test_full_summary() {
        let mut monthly = BTreeMap::new();
        monthly.insert("food".to_string(), Money::from_cents(85_000));
        let budget = report(BudgetStatus::ApproachingLimit);
        let view = SummaryView {
            income: Money::from_cents(200_000),
            expense: Money::from_cents(85_000),
            month: date(2024, 2, 10),
            monthly_expenses: &monthly,
            budget: &budget,
        };

        let text = format_summary(&view, "$");
        assert!(text.starts_with("Net: $1150.00"));
        assert!(text.contains("Monthly expenses (February 2024):"));
        assert!(text.contains("Budget Tracking"));
    }
}
