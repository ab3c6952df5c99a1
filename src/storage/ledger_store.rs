//! Ledger persistence
//!
//! The whole ledger lives in one JSON document: the budget plus every
//! transaction. Saves replace the file atomically.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::TrackerError;
use crate::ledger::Ledger;
use crate::models::{Budget, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// Current on-disk layout version
pub const SCHEMA_VERSION: u32 = 1;

/// Serializable form of a ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl LedgerSnapshot {
    /// Capture the current ledger contents, newest transactions first
    pub fn capture(ledger: &Ledger) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            budget: ledger.budget().clone(),
            transactions: ledger.all_sorted(),
        }
    }

    /// Rebuild a ledger, validating every record
    pub fn into_ledger(self) -> Result<Ledger, TrackerError> {
        Ledger::from_parts(self.budget, self.transactions)
    }
}

/// Loads and saves a ledger at a fixed path
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the ledger to disk
    pub fn save(&self, ledger: &Ledger) -> Result<(), TrackerError> {
        let snapshot = LedgerSnapshot::capture(ledger);
        write_json_atomic(&self.path, &snapshot)?;
        info!(
            path = %self.path.display(),
            transactions = snapshot.transactions.len(),
            "ledger saved"
        );
        Ok(())
    }

    /// Read the ledger from disk
    ///
    /// A missing file is a fresh ledger; a corrupt or invalid one is an
    /// error.
    pub fn load(&self) -> Result<Ledger, TrackerError> {
        let snapshot: Option<LedgerSnapshot> = read_json(&self.path)?;
        let ledger = match snapshot {
            Some(snapshot) => snapshot.into_ledger().map_err(|e| {
                TrackerError::Storage(format!(
                    "Invalid ledger data in {}: {}",
                    self.path.display(),
                    e
                ))
            })?,
            None => Ledger::new(),
        };
        info!(
            path = %self.path.display(),
            transactions = ledger.len(),
            "ledger loaded"
        );
        Ok(ledger)
    }

    /// Like `load`, but falls back to an empty ledger on any error
    pub fn load_or_default(&self) -> Ledger {
        match self.load() {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not load ledger, starting empty"
                );
                Ledger::new()
            }
        }
    }
}
