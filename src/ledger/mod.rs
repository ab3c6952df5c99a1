//! The ledger aggregate
//!
//! `Ledger` is the single authority over the transaction collection. It owns
//! every `Transaction` keyed by its `TransactionId`, owns the one `Budget`,
//! and tells registered observers after each successful mutation.
//!
//! The ledger assumes one logical caller at a time: nothing here locks, blocks
//! or performs I/O. Structural invariants are re-checked after every mutation
//! and a violation panics, since it can only come from a bug in this module.

pub mod observer;

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    first_day_of_month, last_day_of_month, Budget, BudgetReport, Money, Transaction,
    TransactionId, TransactionType, DEFAULT_WARNING_PERCENT,
};

pub use observer::{ObserverHandle, ObserverRegistry};

/// In-memory store of all transactions plus the budget
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: HashMap<TransactionId, Transaction>,
    budget: Budget,
    observers: ObserverRegistry,
}

impl Ledger {
    /// Create an empty ledger with the default budget
    pub fn new() -> Self {
        let ledger = Self::default();
        ledger.check_invariants();
        ledger
    }

    /// Rebuild a ledger from persisted parts
    ///
    /// Every record is validated; duplicate IDs and invalid records are
    /// rejected instead of being loaded. No observers are notified.
    pub fn from_parts<I>(budget: Budget, transactions: I) -> TrackerResult<Self>
    where
        I: IntoIterator<Item = Transaction>,
    {
        if budget.limit().is_negative() {
            return Err(TrackerError::Validation(
                "Budget limit cannot be negative.".into(),
            ));
        }

        let mut map = HashMap::new();
        for txn in transactions {
            txn.validate()?;
            if map.contains_key(txn.id()) {
                return Err(TrackerError::duplicate_transaction(txn.id().as_str()));
            }
            map.insert(txn.id().clone(), txn);
        }

        let ledger = Self {
            transactions: map,
            budget,
            observers: ObserverRegistry::new(),
        };
        ledger.check_invariants();
        Ok(ledger)
    }

    // --- Mutations ---

    /// Add a transaction
    ///
    /// Fails with `Duplicate` if a transaction with the same ID is already
    /// stored; freshly constructed transactions never collide.
    pub fn add(&mut self, transaction: Transaction) -> TrackerResult<TransactionId> {
        let id = transaction.id().clone();
        if self.transactions.contains_key(&id) {
            return Err(TrackerError::duplicate_transaction(id.as_str()));
        }

        self.transactions.insert(id.clone(), transaction);
        debug!(id = %id, count = self.transactions.len(), "transaction added");

        self.check_invariants();
        self.notify_observers();
        Ok(id)
    }

    /// Remove a transaction; returns whether anything was removed
    pub fn delete(&mut self, id: &TransactionId) -> bool {
        if self.transactions.remove(id).is_none() {
            return false;
        }
        debug!(id = %id, count = self.transactions.len(), "transaction deleted");

        self.check_invariants();
        self.notify_observers();
        true
    }

    /// Replace the stored transaction that has the same ID
    ///
    /// Returns false, without notifying, when no such transaction exists.
    pub fn update(&mut self, transaction: Transaction) -> bool {
        let id = transaction.id().clone();
        match self.transactions.get_mut(&id) {
            Some(slot) => *slot = transaction,
            None => return false,
        }
        debug!(id = %id, "transaction updated");

        self.check_invariants();
        self.notify_observers();
        true
    }

    // --- Lookups ---

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    pub fn contains(&self, id: &TransactionId) -> bool {
        self.transactions.contains_key(id)
    }

    /// Find the one stored ID starting with `prefix`
    ///
    /// Zero matches and several matches both yield `None`; callers cannot
    /// tell "unknown" from "ambiguous" through this method.
    pub fn resolve_by_prefix(&self, prefix: &str) -> Option<TransactionId> {
        if prefix.is_empty() {
            return None;
        }

        let mut matches = self.transactions.keys().filter(|id| id.has_prefix(prefix));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first.clone())
    }

    /// Look up a transaction by unambiguous ID prefix
    pub fn get_by_prefix(&self, prefix: &str) -> Option<&Transaction> {
        let id = self.resolve_by_prefix(prefix)?;
        self.transactions.get(&id)
    }

    // --- Queries ---

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterate over stored transactions in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values()
    }

    /// Snapshot of all transactions, newest first
    ///
    /// The returned vector is an owned copy; changing it does not affect the
    /// ledger. Transactions sharing a date come back in unspecified order.
    pub fn all_sorted(&self) -> Vec<Transaction> {
        let mut list: Vec<Transaction> = self.transactions.values().cloned().collect();
        list.sort_by(|a, b| b.date().cmp(&a.date()));
        list
    }

    /// Sum of `kind` amounts dated within `[start, end]` (inclusive)
    pub fn total(&self, kind: TransactionType, start: NaiveDate, end: NaiveDate) -> Money {
        self.matching(kind, start, end).map(Transaction::amount).sum()
    }

    /// Per-category sums of `kind` amounts dated within `[start, end]`
    ///
    /// Categories with no matching transaction are absent from the map.
    pub fn category_summary(
        &self,
        kind: TransactionType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BTreeMap<String, Money> {
        let mut summary: BTreeMap<String, Money> = BTreeMap::new();
        for txn in self.matching(kind, start, end) {
            *summary.entry(txn.category().to_string()).or_default() += txn.amount();
        }
        summary
    }

    /// Expense totals by category for the calendar month containing `date`
    pub fn monthly_expense_summary(&self, date: NaiveDate) -> BTreeMap<String, Money> {
        self.category_summary(
            TransactionType::Expense,
            first_day_of_month(date),
            last_day_of_month(date),
        )
    }

    fn matching(
        &self,
        kind: TransactionType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .values()
            .filter(move |t| t.kind() == kind && t.falls_within(start, end))
    }

    // --- Budget ---

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Mutable access to the budget
    ///
    /// Budget changes are not transaction mutations and do not notify
    /// observers.
    pub fn budget_mut(&mut self) -> &mut Budget {
        &mut self.budget
    }

    /// Spending against the budget for the period containing `on`
    pub fn budget_report(&self, on: NaiveDate) -> BudgetReport {
        self.budget_report_with_threshold(on, DEFAULT_WARNING_PERCENT)
    }

    /// Like `budget_report`, with a custom warning percentage
    pub fn budget_report_with_threshold(&self, on: NaiveDate, warning_percent: u8) -> BudgetReport {
        let budget = &self.budget;
        let start = budget.period_start(on);
        let end = budget.period_end(on);
        let spent = self.total(TransactionType::Expense, start, end);

        BudgetReport {
            period: budget.period(),
            start,
            end,
            limit: budget.limit(),
            spent,
            remaining: budget.remaining(spent),
            status: budget.status_with_threshold(spent, warning_percent),
        }
    }

    // --- Observers ---

    /// Register a callback invoked after every successful mutation
    pub fn add_observer<F>(&mut self, callback: F) -> ObserverHandle
    where
        F: FnMut() + 'static,
    {
        self.observers.register(callback)
    }

    /// Deregister a callback; returns false for an unknown handle
    pub fn remove_observer(&mut self, handle: ObserverHandle) -> bool {
        self.observers.unregister(handle)
    }

    fn notify_observers(&mut self) {
        self.observers.notify();
    }

    // --- Invariants ---

    fn check_invariants(&self) {
        for (key, txn) in &self.transactions {
            assert_eq!(
                key,
                txn.id(),
                "ledger key {} does not match transaction id {}",
                key,
                txn.id()
            );
            assert!(
                txn.amount().is_positive(),
                "transaction {} has non-positive amount {}",
                key,
                txn.amount()
            );
            assert!(
                !txn.category().trim().is_empty() && !txn.description().trim().is_empty(),
                "transaction {} has a blank text field",
                key
            );
        }
    }
}
