//! Entry service
//!
//! User-facing operations on the ledger: validated adds, free-text adds,
//! edits and deletes by ID prefix, and budget changes. Relative dates are
//! resolved against the `today` the service was created with.

use chrono::NaiveDate;
use tracing::info;

use super::parser::parse_entry;
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::{
    parse_transaction_date, BudgetPeriod, Money, Transaction, TransactionId, TransactionType,
};

/// Full length of a hyphenated UUID
const FULL_ID_LEN: usize = 36;

const UNKNOWN_PREFIX: &str = "Ambiguous or unknown Transaction ID prefix.";

/// Input for adding a transaction from explicit fields
#[derive(Debug, Clone)]
pub struct EntryInput {
    pub kind: TransactionType,
    pub description: String,
    pub amount: Money,
    pub category: String,
    /// `None` or blank means today
    pub date: Option<String>,
}

/// Fields to change on an existing transaction; `None` and blank values are
/// left alone
#[derive(Debug, Clone, Default)]
pub struct EntryEdit {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl EntryEdit {
    /// Whether the edit would change anything
    pub fn is_empty(&self) -> bool {
        non_blank(&self.description).is_none()
            && self.amount.is_none()
            && non_blank(&self.category).is_none()
            && non_blank(&self.date).is_none()
    }
}

/// Service for user-driven ledger changes
pub struct EntryService<'a> {
    ledger: &'a mut Ledger,
    today: NaiveDate,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(ledger: &'a mut Ledger, today: NaiveDate) -> Self {
        Self { ledger, today }
    }

    /// Add a transaction from explicit fields
    pub fn add_explicit(&mut self, input: EntryInput) -> TrackerResult<TransactionId> {
        let date = self.resolve_date(input.date.as_deref())?;
        let txn = Transaction::new(
            input.kind,
            input.amount,
            date,
            input.category,
            input.description,
        )?;

        let id = self.ledger.add(txn)?;
        info!(id = %id, kind = %input.kind, "added transaction");
        Ok(id)
    }

    /// Add a transaction parsed from a quick-entry string
    ///
    /// Falls back to `default_category` when the text carries no
    /// `category:` tag.
    pub fn add_from_text(
        &mut self,
        input: &str,
        kind: TransactionType,
        default_category: &str,
    ) -> TrackerResult<TransactionId> {
        let parsed = parse_entry(input, self.today)?;
        let category = parsed
            .category
            .unwrap_or_else(|| default_category.to_string());

        let txn = Transaction::new(kind, parsed.amount, parsed.date, category, parsed.description)?;
        let id = self.ledger.add(txn)?;
        info!(id = %id, kind = %kind, "added transaction from text");
        Ok(id)
    }

    /// Edit the transaction identified by an unambiguous ID prefix
    ///
    /// All provided fields are validated on a copy before anything is
    /// committed; a failure leaves the stored transaction untouched.
    pub fn edit_by_prefix(&mut self, prefix: &str, edit: EntryEdit) -> TrackerResult<Transaction> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(TrackerError::Validation(
                "Transaction ID prefix is required.".into(),
            ));
        }

        let mut txn = self
            .ledger
            .get_by_prefix(prefix)
            .cloned()
            .ok_or_else(|| TrackerError::Validation(UNKNOWN_PREFIX.into()))?;

        if let Some(description) = non_blank(&edit.description) {
            txn.set_description(description)?;
        }
        if let Some(amount) = edit.amount {
            txn.set_amount(amount)?;
        }
        if let Some(category) = non_blank(&edit.category) {
            txn.set_category(category)?;
        }
        if let Some(date) = non_blank(&edit.date) {
            txn.set_date(parse_transaction_date(date, self.today)?);
        }

        if !self.ledger.update(txn.clone()) {
            return Err(TrackerError::transaction_not_found(txn.id().as_str()));
        }
        info!(id = %txn.id(), "edited transaction");
        Ok(txn)
    }

    /// Delete by full ID or unambiguous prefix, returning the deleted ID
    pub fn delete(&mut self, id_or_prefix: &str) -> TrackerResult<TransactionId> {
        let trimmed = id_or_prefix.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::Validation(
                "Transaction ID is required.".into(),
            ));
        }

        if trimmed.len() >= FULL_ID_LEN {
            let id = TransactionId::from_string(trimmed)?;
            if self.ledger.delete(&id) {
                info!(id = %id, "deleted transaction");
                return Ok(id);
            }
        }

        let id = self
            .ledger
            .resolve_by_prefix(trimmed)
            .ok_or_else(|| TrackerError::Validation(UNKNOWN_PREFIX.into()))?;
        self.ledger.delete(&id);
        info!(id = %id, "deleted transaction");
        Ok(id)
    }

    /// Replace the budget limit and period
    ///
    /// A negative limit is rejected before anything changes.
    pub fn set_budget(&mut self, limit: Money, period: BudgetPeriod) -> TrackerResult<()> {
        let budget = self.ledger.budget_mut();
        budget.set_limit(limit)?;
        budget.set_period(period);
        info!(limit = %limit, period = %period, "budget updated");
        Ok(())
    }

    fn resolve_date(&self, input: Option<&str>) -> TrackerResult<NaiveDate> {
        match input.map(str::trim).filter(|s| !s.is_empty()) {
            Some(text) => parse_transaction_date(text, self.today),
            None => Ok(self.today),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
