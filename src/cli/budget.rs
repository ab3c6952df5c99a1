//! Budget CLI commands
//!
//! Shows spending against the budget and changes its limit or period.

use clap::Subcommand;

use super::{parse_amount, parse_optional_date, Session};
use crate::display::format_budget_report;
use crate::error::TrackerResult;
use crate::models::BudgetPeriod;
use crate::services::EntryService;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show spending against the budget
    Show {
        /// Any date inside the period to show (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Set the budget limit and optionally the period
    Set {
        /// Spending limit (e.g., "1500" or "1500.00")
        limit: String,
        /// Budget period (weekly or monthly); keeps the current one if omitted
        #[arg(short, long)]
        period: Option<BudgetPeriod>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(session: &mut Session, cmd: BudgetCommands) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Show { date } => {
            let on = parse_optional_date(date.as_deref(), session.today)?.unwrap_or(session.today);
            let report = session
                .ledger
                .budget_report_with_threshold(on, session.settings.warning_threshold_percent);
            print!("{}", format_budget_report(&report, session.currency()));
            if report.status.is_warning() {
                println!("Warning: budget status is {}", report.status);
            }
        }

        BudgetCommands::Set { limit, period } => {
            let limit = parse_amount(&limit)?;
            let period = period.unwrap_or_else(|| session.ledger.budget().period());

            EntryService::new(&mut session.ledger, session.today).set_budget(limit, period)?;
            session.mark_dirty();

            println!(
                "Budget set to {} per {} period.",
                limit.format_with_symbol(session.currency()),
                period.label().to_lowercase()
            );
        }
    }

    Ok(())
}
