//! Transaction CLI commands
//!
//! Implements CLI commands for adding, listing, editing and deleting
//! transactions.

use clap::Subcommand;

use super::{parse_amount, parse_optional_date, Session};
use crate::display::{format_totals_line, format_transaction_details, format_transaction_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::services::{EntryEdit, EntryInput, EntryService};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a transaction from explicit fields
    Add {
        /// What the money was for
        description: String,
        /// Amount (e.g., "5.50" or "$5.50")
        amount: String,
        /// Category name (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,
        /// Date (YYYY-MM-DD, today, yesterday, tomorrow), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Record as income instead of expense
        #[arg(long)]
        income: bool,
    },
    /// Add a transaction from free text, e.g. "coffee $5.50 category:food on:yesterday"
    Quick {
        /// The entry text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Record as income instead of expense
        #[arg(long)]
        income: bool,
        /// Category used when the text has no category: tag
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Only show this type (expense or income)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or unambiguous prefix
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID or unambiguous prefix
        id: String,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or unambiguous prefix
        id: String,
    },
}

fn kind_for(income: bool) -> TransactionType {
    if income {
        TransactionType::Income
    } else {
        TransactionType::Expense
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    session: &mut Session,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            date,
            income,
        } => {
            let input = EntryInput {
                kind: kind_for(income),
                description,
                amount: parse_amount(&amount)?,
                category: category.unwrap_or_else(|| session.settings.default_category.clone()),
                date,
            };
            let id = EntryService::new(&mut session.ledger, session.today).add_explicit(input)?;
            print_added(session, &id);
        }

        TransactionCommands::Quick {
            text,
            income,
            category,
        } => {
            let default_category =
                category.unwrap_or_else(|| session.settings.default_category.clone());
            let id = EntryService::new(&mut session.ledger, session.today).add_from_text(
                &text.join(" "),
                kind_for(income),
                &default_category,
            )?;
            print_added(session, &id);
        }

        TransactionCommands::List {
            limit,
            kind,
            from,
            to,
        } => {
            let from = parse_optional_date(from.as_deref(), session.today)?;
            let to = parse_optional_date(to.as_deref(), session.today)?;
            if let (Some(start), Some(end)) = (from, to) {
                if start > end {
                    return Err(TrackerError::Validation(
                        "--from must not be after --to.".into(),
                    ));
                }
            }

            let matching: Vec<Transaction> = session
                .ledger
                .all_sorted()
                .into_iter()
                .filter(|t| kind.map_or(true, |k| t.kind() == k))
                .filter(|t| from.map_or(true, |d| t.date() >= d))
                .filter(|t| to.map_or(true, |d| t.date() <= d))
                .collect();

            let limit = limit.unwrap_or(session.settings.list_limit);
            let shown = &matching[..matching.len().min(limit)];

            print!(
                "{}",
                format_transaction_table(shown, session.currency(), session.date_format())
            );
            if shown.len() < matching.len() {
                println!("Showing {} of {} transactions.", shown.len(), matching.len());
            }

            let total_of = |k: TransactionType| -> Money {
                matching
                    .iter()
                    .filter(|t| t.kind() == k)
                    .map(Transaction::amount)
                    .sum()
            };
            print!(
                "{}",
                format_totals_line(
                    total_of(TransactionType::Income),
                    total_of(TransactionType::Expense),
                    session.currency()
                )
            );
        }

        TransactionCommands::Show { id } => {
            let txn = session.ledger.get_by_prefix(id.trim()).ok_or_else(|| {
                TrackerError::Validation("Ambiguous or unknown Transaction ID prefix.".into())
            })?;
            print!(
                "{}",
                format_transaction_details(txn, session.currency(), session.date_format())
            );
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
        } => {
            let edit = EntryEdit {
                description,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                date,
            };
            if edit.is_empty() {
                return Err(TrackerError::Validation(
                    "Nothing to edit. Provide at least one of --description, --amount, --category or --date."
                        .into(),
                ));
            }

            let txn =
                EntryService::new(&mut session.ledger, session.today).edit_by_prefix(&id, edit)?;
            println!("Updated transaction {}", txn.id().short());
            print!(
                "{}",
                format_transaction_details(&txn, session.currency(), session.date_format())
            );
        }

        TransactionCommands::Delete { id } => {
            let deleted = EntryService::new(&mut session.ledger, session.today).delete(&id)?;
            println!("Deleted transaction {}", deleted.short());
        }
    }

    Ok(())
}

fn print_added(session: &Session, id: &TransactionId) {
    if let Some(txn) = session.ledger.get(id) {
        println!(
            "Added {} {} on {} [{}] {} (ID: {})",
            txn.kind(),
            txn.amount().format_with_symbol(session.currency()),
            txn.date().format(session.date_format()),
            txn.category(),
            txn.description(),
            id.short()
        );
    }
}
