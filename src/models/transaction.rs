//! Transaction model
//!
//! A single expense or income record. Identity and type are fixed at
//! construction; amount, date, category and description can be edited through
//! setters that each re-validate the field they change.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::TrackerError;

/// Whether money left or entered the user's pocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "EXPENSE"),
            Self::Income => write!(f, "INCOME"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "e" => Ok(Self::Expense),
            "income" | "i" => Ok(Self::Income),
            other => Err(TrackerError::Validation(format!(
                "Unrecognized transaction type: '{}'. Use expense or income.",
                other
            ))),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    #[serde(rename = "type")]
    kind: TransactionType,
    amount: Money,
    date: NaiveDate,
    category: String,
    description: String,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(
        kind: TransactionType,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TrackerError> {
        let amount = validate_amount(amount)?;
        let category = validate_text(category.into(), "Category")?;
        let description = validate_text(description.into(), "Description")?;

        Ok(Self {
            id: TransactionId::new(),
            kind,
            amount,
            date,
            category,
            description,
        })
    }

    /// Rebuild a previously persisted transaction under its original ID
    pub fn restore(
        id: TransactionId,
        kind: TransactionType,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TrackerError> {
        let mut txn = Self::new(kind, amount, date, category, description)?;
        txn.id = id;
        Ok(txn)
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Set the amount; must be strictly positive
    pub fn set_amount(&mut self, amount: Money) -> Result<(), TrackerError> {
        self.amount = validate_amount(amount)?;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Set the category; must not be blank
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), TrackerError> {
        self.category = validate_text(category.into(), "Category")?;
        Ok(())
    }

    /// Set the description; must not be blank
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), TrackerError> {
        self.description = validate_text(description.into(), "Description")?;
        Ok(())
    }

    /// Re-check every field invariant
    ///
    /// Construction and the setters already enforce these; this exists for
    /// records that arrive through deserialization.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.id.as_str().trim().is_empty() {
            return Err(TrackerError::Validation(
                "Transaction ID cannot be empty.".into(),
            ));
        }
        validate_amount(self.amount)?;
        if self.category.trim().is_empty() {
            return Err(TrackerError::Validation("Category cannot be empty.".into()));
        }
        if self.description.trim().is_empty() {
            return Err(TrackerError::Validation(
                "Description cannot be empty.".into(),
            ));
        }
        Ok(())
    }

    /// Whether the date lies in the inclusive range `[start, end]`
    pub fn falls_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} [{}]",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.description,
            self.category
        )
    }
}

fn validate_amount(amount: Money) -> Result<Money, TrackerError> {
    if !amount.is_positive() {
        return Err(TrackerError::Validation("Amount must be positive.".into()));
    }
    if amount > Money::MAX_TRANSACTION {
        return Err(TrackerError::Validation(format!(
            "Amount cannot exceed {}.",
            Money::MAX_TRANSACTION
        )));
    }
    Ok(amount)
}

fn validate_text(value: String, field: &str) -> Result<String, TrackerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation(format!(
            "{} cannot be empty.",
            field
        )));
    }
    Ok(trimmed.to_string())
}

/// Resolve a user-supplied date
///
/// Accepts the keywords `today`, `yesterday` and `tomorrow` (relative to
/// `today`) or an ISO `YYYY-MM-DD` date.
pub fn parse_transaction_date(input: &str, today: NaiveDate) -> Result<NaiveDate, TrackerError> {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        "tomorrow" => Ok(today + Duration::days(1)),
        _ => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
            TrackerError::Validation(
                "Invalid date format. Use YYYY-MM-DD, today, yesterday, or tomorrow.".into(),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn coffee() -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            Money::from_cents(550),
            date(2024, 1, 15),
            "food",
            "coffee",
        )
        .unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = coffee();
        assert_eq!(txn.kind(), TransactionType::Expense);
        assert_eq!(txn.amount(), Money::from_cents(550));
        assert_eq!(txn.date(), date(2024, 1, 15));
        assert_eq!(txn.category(), "food");
        assert_eq!(txn.description(), "coffee");
        assert!(txn.is_expense());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        assert_ne!(coffee().id(), coffee().id());
    }

    #[test]
    fn test_new_trims_text_fields() {
        let txn = Transaction::new(
            TransactionType::Income,
            Money::from_cents(100_000),
            date(2024, 1, 31),
            "  salary ",
            " January pay\t",
        )
        .unwrap();
        assert_eq!(txn.category(), "salary");
        assert_eq!(txn.description(), "January pay");
    }

    #[test]
    fn test_new_rejects_invalid_fields() {
        let d = date(2024, 1, 1);
        let kind = TransactionType::Expense;
        let cases = [
            Transaction::new(kind, Money::zero(), d, "food", "coffee"),
            Transaction::new(kind, Money::from_cents(-1), d, "food", "coffee"),
            Transaction::new(kind, Money::from_cents(100), d, "   ", "coffee"),
            Transaction::new(kind, Money::from_cents(100), d, "food", ""),
            Transaction::new(
                kind,
                Money::from_cents(Money::MAX_TRANSACTION.cents() + 1),
                d,
                "food",
                "coffee",
            ),
        ];
        for result in cases {
            assert!(result.unwrap_err().is_validation());
        }
    }

    #[test]
    fn test_amount_ceiling_is_inclusive() {
        let d = date(2024, 1, 1);
        let mut txn = Transaction::new(
            TransactionType::Income,
            Money::MAX_TRANSACTION,
            d,
            "windfall",
            "lottery",
        )
        .unwrap();

        let err = txn
            .set_amount(Money::from_cents(Money::MAX_TRANSACTION.cents() + 1))
            .unwrap_err();
        assert!(err.to_string().contains("Amount cannot exceed"));
        assert_eq!(txn.amount(), Money::MAX_TRANSACTION);
    }

    #[test]
    fn test_setters_validate_only_their_field() {
        let mut txn = coffee();

        assert!(txn.set_amount(Money::zero()).is_err());
        assert_eq!(txn.amount(), Money::from_cents(550));
        txn.set_amount(Money::from_cents(725)).unwrap();
        assert_eq!(txn.amount(), Money::from_cents(725));

        assert!(txn.set_category(" ").is_err());
        assert_eq!(txn.category(), "food");
        txn.set_category("drinks").unwrap();
        assert_eq!(txn.category(), "drinks");

        assert!(txn.set_description("").is_err());
        txn.set_description("latte").unwrap();
        assert_eq!(txn.description(), "latte");

        txn.set_date(date(2024, 2, 2));
        assert_eq!(txn.date(), date(2024, 2, 2));
    }

    #[test]
    fn test_restore_keeps_id() {
        let id = TransactionId::from_string("abc123").unwrap();
        let txn = Transaction::restore(
            id.clone(),
            TransactionType::Income,
            Money::from_cents(100),
            date(2024, 1, 1),
            "gift",
            "birthday",
        )
        .unwrap();
        assert_eq!(txn.id(), &id);
        assert!(txn.is_income());
    }

    #[test]
    fn test_falls_within_is_inclusive() {
        let txn = coffee();
        assert!(txn.falls_within(date(2024, 1, 15), date(2024, 1, 15)));
        assert!(txn.falls_within(date(2024, 1, 1), date(2024, 1, 31)));
        assert!(!txn.falls_within(date(2024, 1, 16), date(2024, 1, 31)));
    }

    #[test]
    fn test_validate_catches_bad_deserialized_record() {
        let json = r#"{"id":"abc","type":"expense","amount":0,"date":"2024-01-01","category":"x","description":"y"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_serialization() {
        let txn = coffee();
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"type\":\"expense\""));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_type_parse_and_display() {
        assert_eq!("Income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("e".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("transfer".parse::<TransactionType>().is_err());
        assert_eq!(TransactionType::Expense.to_string(), "EXPENSE");
    }

    #[test]
    fn test_parse_transaction_date_keywords() {
        let today = date(2024, 3, 1);
        assert_eq!(parse_transaction_date("today", today).unwrap(), today);
        assert_eq!(
            parse_transaction_date(" Yesterday ", today).unwrap(),
            date(2024, 2, 29)
        );
        assert_eq!(
            parse_transaction_date("TOMORROW", today).unwrap(),
            date(2024, 3, 2)
        );
    }

    #[test]
    fn test_parse_transaction_date_explicit() {
        let today = date(2024, 3, 1);
        assert_eq!(
            parse_transaction_date("2023-12-25", today).unwrap(),
            date(2023, 12, 25)
        );
        assert!(parse_transaction_date("25/12/2023", today).is_err());
        assert!(parse_transaction_date("2023-02-30", today).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", coffee()),
            "2024-01-15 EXPENSE $5.50 coffee [food]"
        );
    }
}
