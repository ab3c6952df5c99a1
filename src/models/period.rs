//! Budget period representation
//!
//! A budget recurs either weekly (Monday through Sunday) or monthly (first
//! through last day of the calendar month). Given any reference date the
//! period yields the inclusive window that contains it.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Recurrence of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Calendar week, Monday to Sunday
    Weekly,
    /// Calendar month
    #[default]
    Monthly,
}

impl BudgetPeriod {
    /// First day of the period instance containing `date`
    pub fn start_for(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Monthly => first_day_of_month(date),
            Self::Weekly => {
                let offset = date.weekday().num_days_from_monday() as i64;
                date - Duration::days(offset)
            }
        }
    }

    /// Last day (inclusive) of the period instance containing `date`
    pub fn end_for(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Monthly => last_day_of_month(date),
            Self::Weekly => {
                let remaining = 6 - date.weekday().num_days_from_monday() as i64;
                date + Duration::days(remaining)
            }
        }
    }

    /// Inclusive `(start, end)` window containing `date`
    pub fn window_for(&self, date: NaiveDate) -> (NaiveDate, NaiveDate) {
        (self.start_for(date), self.end_for(date))
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "WEEKLY"),
            Self::Monthly => write!(f, "MONTHLY"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            other => Err(TrackerError::Validation(format!(
                "Unrecognized budget period: '{}'. Use weekly or monthly.",
                other
            ))),
        }
    }
}

/// First day of the month containing `date`
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Last day of the month containing `date`
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(next_month) => next_month - Duration::days(1),
        // Only reachable at the very end of chrono's representable range.
        None => NaiveDate::MAX,
    }
}
