//! Budget model
//!
//! A single spending limit that recurs weekly or monthly, plus the warning
//! status derived from how much of it has been spent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::BudgetPeriod;
use crate::error::TrackerError;

/// Default spending limit for a fresh ledger
pub const DEFAULT_LIMIT: Money = Money::from_dollars_cents(1000, 0);

/// Percentage of the limit at which spending is flagged as approaching it
pub const DEFAULT_WARNING_PERCENT: u8 = 80;

/// The user's budget settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    limit: Money,
    period: BudgetPeriod,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            period: BudgetPeriod::Monthly,
        }
    }
}

impl Budget {
    /// Create a budget with explicit settings
    pub fn new(limit: Money, period: BudgetPeriod) -> Result<Self, TrackerError> {
        let mut budget = Self::default();
        budget.set_limit(limit)?;
        budget.set_period(period);
        Ok(budget)
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    pub fn period(&self) -> BudgetPeriod {
        self.period
    }

    /// Set the limit; negative limits are rejected and leave the budget unchanged
    pub fn set_limit(&mut self, limit: Money) -> Result<(), TrackerError> {
        if limit.is_negative() {
            return Err(TrackerError::Validation(
                "Budget limit cannot be negative.".into(),
            ));
        }
        self.limit = limit;
        Ok(())
    }

    pub fn set_period(&mut self, period: BudgetPeriod) {
        self.period = period;
    }

    /// Start of the budget period containing `date`
    pub fn period_start(&self, date: NaiveDate) -> NaiveDate {
        self.period.start_for(date)
    }

    /// End (inclusive) of the budget period containing `date`
    pub fn period_end(&self, date: NaiveDate) -> NaiveDate {
        self.period.end_for(date)
    }

    /// Warning status for the given spending, using the default threshold
    pub fn status(&self, spent: Money) -> BudgetStatus {
        self.status_with_threshold(spent, DEFAULT_WARNING_PERCENT)
    }

    /// Warning status for the given spending
    ///
    /// Spending at or above the limit is `Overspent`; at or above
    /// `warning_percent` of the limit is `ApproachingLimit`.
    pub fn status_with_threshold(&self, spent: Money, warning_percent: u8) -> BudgetStatus {
        let spent_cents = spent.cents() as i128;
        let limit_cents = self.limit.cents() as i128;

        if spent_cents >= limit_cents {
            BudgetStatus::Overspent
        } else if spent_cents * 100 >= limit_cents * warning_percent as i128 {
            BudgetStatus::ApproachingLimit
        } else {
            BudgetStatus::Ok
        }
    }

    /// Amount left before the limit is reached, never below zero
    pub fn remaining(&self, spent: Money) -> Money {
        self.limit.saturating_sub_floor_zero(spent)
    }
}

/// How spending in the current period compares to the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Ok,
    ApproachingLimit,
    Overspent,
}

impl BudgetStatus {
    /// Whether the status should be surfaced as a warning
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::Ok)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::ApproachingLimit => write!(f, "APPROACHING LIMIT"),
            Self::Overspent => write!(f, "OVERSPENT!"),
        }
    }
}

/// Spending against the budget for the period containing a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    pub period: BudgetPeriod,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
    pub status: BudgetStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_budget() {
        let budget = Budget::default();
        assert_eq!(budget.limit(), Money::from_cents(100_000));
        assert_eq!(budget.period(), BudgetPeriod::Monthly);
    }

    #[test]
    fn test_set_limit_rejects_negative() {
        let mut budget = Budget::default();
        let err = budget.set_limit(Money::from_cents(-1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(budget.limit(), DEFAULT_LIMIT);

        budget.set_limit(Money::zero()).unwrap();
        assert_eq!(budget.limit(), Money::zero());
    }

    #[test]
    fn test_new_validates() {
        assert!(Budget::new(Money::from_cents(-100), BudgetPeriod::Weekly).is_err());
        let budget = Budget::new(Money::from_cents(25_000), BudgetPeriod::Weekly).unwrap();
        assert_eq!(budget.period(), BudgetPeriod::Weekly);
    }

    #[test]
    fn test_period_bounds_follow_period_setting() {
        let mut budget = Budget::default();
        let d = date(2024, 2, 15);
        assert_eq!(budget.period_start(d), date(2024, 2, 1));
        assert_eq!(budget.period_end(d), date(2024, 2, 29));

        budget.set_period(BudgetPeriod::Weekly);
        // 2024-02-15 is a Thursday
        assert_eq!(budget.period_start(d), date(2024, 2, 12));
        assert_eq!(budget.period_end(d), date(2024, 2, 18));
    }

    #[test]
    fn test_status_thresholds() {
        let budget = Budget::new(Money::from_cents(10_000), BudgetPeriod::Monthly).unwrap();
        assert_eq!(budget.status(Money::zero()), BudgetStatus::Ok);
        assert_eq!(budget.status(Money::from_cents(7_999)), BudgetStatus::Ok);
        assert_eq!(
            budget.status(Money::from_cents(8_000)),
            BudgetStatus::ApproachingLimit
        );
        assert_eq!(budget.status(Money::from_cents(10_000)), BudgetStatus::Overspent);
        assert_eq!(budget.status(Money::from_cents(12_500)), BudgetStatus::Overspent);
    }

    #[test]
    fn test_custom_threshold() {
        let budget = Budget::new(Money::from_cents(10_000), BudgetPeriod::Monthly).unwrap();
        assert_eq!(
            budget.status_with_threshold(Money::from_cents(5_000), 50),
            BudgetStatus::ApproachingLimit
        );
        assert_eq!(
            budget.status_with_threshold(Money::from_cents(4_999), 50),
            BudgetStatus::Ok
        );
    }

    #[test]
    fn test_zero_limit_is_always_overspent() {
        let budget = Budget::new(Money::zero(), BudgetPeriod::Weekly).unwrap();
        assert_eq!(budget.status(Money::zero()), BudgetStatus::Overspent);
    }

    #[test]
    fn test_remaining_never_negative() {
        let budget = Budget::new(Money::from_cents(10_000), BudgetPeriod::Monthly).unwrap();
        assert_eq!(budget.remaining(Money::from_cents(2_500)), Money::from_cents(7_500));
        assert_eq!(budget.remaining(Money::from_cents(20_000)), Money::zero());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(BudgetStatus::Overspent.to_string(), "OVERSPENT!");
        assert!(BudgetStatus::ApproachingLimit.is_warning());
        assert!(!BudgetStatus::Ok.is_warning());
    }

    #[test]
    fn test_serialization() {
        let budget = Budget::new(Money::from_cents(5_000), BudgetPeriod::Weekly).unwrap();
        let json = serde_json::to_string(&budget).unwrap();
        assert_eq!(json, r#"{"limit":5000,"period":"weekly"}"#);
        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, budget);
    }
}
