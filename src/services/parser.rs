//! Free-text entry parsing
//!
//! Turns quick-entry strings such as `coffee $5.50 category:food on:yesterday`
//! into the fields of a transaction.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_transaction_date, Money};

/// Fields extracted from a quick-entry string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub description: String,
    pub amount: Money,
    /// `None` when no `category:` tag was given
    pub category: Option<String>,
    pub date: NaiveDate,
}

const ENTRY_PATTERN: &str = concat!(
    r"(?i)^\s*",
    r"(?P<description>.*?)",
    r"\s*\$?(?P<amount>\d+(?:\.\d{1,2})?)",
    r"(?:.*?\bcategory:(?P<category>[A-Za-z0-9_]+))?",
    r"(?:.*?\bon:(?P<date>\d{4}-\d{2}-\d{2}|today|yesterday|tomorrow))?",
    r"\s*$",
);

fn entry_regex() -> TrackerResult<&'static Regex> {
    static ENTRY_RE: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = ENTRY_RE.get() {
        return Ok(re);
    }
    let re = Regex::new(ENTRY_PATTERN)
        .map_err(|e| TrackerError::Config(format!("Invalid entry pattern: {}", e)))?;
    Ok(ENTRY_RE.get_or_init(|| re))
}

/// Parse a quick-entry string
///
/// The amount is required and follows the description; `category:` and `on:`
/// tags are optional and may appear after it in that order. A missing date
/// means `today`.
pub fn parse_entry(input: &str, today: NaiveDate) -> TrackerResult<ParsedEntry> {
    if input.trim().is_empty() {
        return Err(TrackerError::Validation("Input cannot be empty.".into()));
    }

    let caps = entry_regex()?.captures(input).ok_or_else(|| {
        TrackerError::Validation(
            "Input must include a description and amount, e.g., 'coffee $5.50 category:food on:2024-01-01'."
                .into(),
        )
    })?;

    let description = caps
        .name("description")
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let amount_text = caps.name("amount").map(|m| m.as_str()).unwrap_or_default();
    let amount = Money::parse(amount_text)
        .map_err(|_| TrackerError::Validation("Invalid amount format.".into()))?;

    let category = caps.name("category").map(|m| m.as_str().to_string());

    let date = match caps.name("date") {
        Some(m) => parse_transaction_date(m.as_str(), today)?,
        None => today,
    };

    if !amount.is_positive() {
        return Err(TrackerError::Validation("Amount must be positive.".into()));
    }
    if description.is_empty() {
        return Err(TrackerError::Validation(
            "Description cannot be empty.".into(),
        ));
    }

    Ok(ParsedEntry {
        description,
        amount,
        category,
        date,
    })
}
