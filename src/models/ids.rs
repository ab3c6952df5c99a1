//! Transaction identity
//!
//! A `TransactionId` is an opaque string token. Fresh IDs are random v4 UUIDs
//! rendered as strings; persisted IDs are reconstructed verbatim, so equality
//! and hashing are defined on the string form alone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::TrackerError;

/// Number of characters shown when an ID is displayed in short form
pub const SHORT_ID_LEN: usize = 8;

/// Unique, immutable identifier of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier string (e.g. one read back from storage)
    pub fn from_string(s: impl Into<String>) -> Result<Self, TrackerError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(TrackerError::Validation(
                "Transaction ID cannot be empty.".into(),
            ));
        }
        Ok(Self(s))
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters used in listings and for prefix lookups
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Check whether this ID starts with the given prefix
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s.trim())
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
