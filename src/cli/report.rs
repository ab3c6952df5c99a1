//! Summary CLI command
//!
//! Net totals, the monthly expense breakdown and budget status, or a
//! per-category breakdown for an explicit date range.

use clap::Args;

use super::{parse_optional_date, Session};
use crate::display::{format_category_breakdown, format_summary, SummaryView};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionType};

/// Arguments for `summary`
#[derive(Args)]
pub struct SummaryArgs {
    /// Reference date for the month and budget period (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start of a custom range; requires --to
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// End of a custom range; requires --from
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

/// Handle the summary command
pub fn handle_summary_command(session: &Session, args: SummaryArgs) -> TrackerResult<()> {
    let ledger = &session.ledger;
    let currency = session.currency();

    let from = parse_optional_date(args.from.as_deref(), session.today)?;
    let to = parse_optional_date(args.to.as_deref(), session.today)?;

    if let (Some(start), Some(end)) = (from, to) {
        if start > end {
            return Err(TrackerError::Validation(
                "--from must not be after --to.".into(),
            ));
        }

        println!("--- Category Summary (Expense, {} to {}) ---", start, end);
        print!(
            "{}",
            format_category_breakdown(
                &ledger.category_summary(TransactionType::Expense, start, end),
                TransactionType::Expense,
                currency
            )
        );
        println!();
        println!("--- Category Summary (Income, {} to {}) ---", start, end);
        print!(
            "{}",
            format_category_breakdown(
                &ledger.category_summary(TransactionType::Income, start, end),
                TransactionType::Income,
                currency
            )
        );
        return Ok(());
    }

    let on = parse_optional_date(args.date.as_deref(), session.today)?.unwrap_or(session.today);

    let total_of = |kind: TransactionType| -> Money {
        ledger
            .iter()
            .filter(|t| t.kind() == kind)
            .map(Transaction::amount)
            .sum()
    };
    let monthly = ledger.monthly_expense_summary(on);
    let budget = ledger.budget_report_with_threshold(on, session.settings.warning_threshold_percent);

    let view = SummaryView {
        income: total_of(TransactionType::Income),
        expense: total_of(TransactionType::Expense),
        month: on,
        monthly_expenses: &monthly,
        budget: &budget,
    };
    print!("{}", format_summary(&view, currency));

    Ok(())
}
