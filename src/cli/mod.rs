//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer.

pub mod budget;
pub mod config;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_summary_command, SummaryArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::{parse_transaction_date, Money};
use crate::storage::LedgerStore;

/// State shared by every command for one invocation
///
/// The ledger is loaded on open and written back by `finish` only when a
/// transaction mutation happened or a handler marked it changed.
pub struct Session {
    pub paths: TrackerPaths,
    pub settings: Settings,
    pub store: LedgerStore,
    pub ledger: Ledger,
    pub today: NaiveDate,
    dirty: Rc<Cell<bool>>,
}

impl Session {
    /// Load settings and ledger from `paths`
    pub fn open(paths: TrackerPaths) -> TrackerResult<Self> {
        Self::open_on(paths, Local::now().date_naive())
    }

    /// Like `open`, with an explicit "today"
    pub fn open_on(paths: TrackerPaths, today: NaiveDate) -> TrackerResult<Self> {
        let settings = Settings::load_or_default(&paths)?;
        let store = LedgerStore::new(paths.ledger_file());
        let mut ledger = store.load()?;

        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        ledger.add_observer(move || flag.set(true));

        Ok(Self {
            paths,
            settings,
            store,
            ledger,
            today,
            dirty,
        })
    }

    /// Whether there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Flag a change the ledger does not report itself (budget edits)
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Persist the ledger if anything changed; returns whether it saved
    pub fn finish(self) -> TrackerResult<bool> {
        if !self.is_dirty() {
            debug!("no changes, skipping save");
            return Ok(false);
        }
        self.store.save(&self.ledger)?;
        Ok(true)
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn date_format(&self) -> &str {
        &self.settings.date_format
    }
}

/// Parse a user-supplied amount
pub(crate) fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Parse an optional user-supplied date, relative to `today`
pub(crate) fn parse_optional_date(
    input: Option<&str>,
    today: NaiveDate,
) -> TrackerResult<Option<NaiveDate>> {
    input
        .map(|text| parse_transaction_date(text, today))
        .transpose()
}
