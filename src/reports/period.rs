//! Rolling report windows
//!
//! A period is a trailing window ending at the reference date: the last 7
//! days, the last 30 days, or the last year (366 days when the reference
//! year is a leap year). Records dated on or after the window start are in
//! it; records without a parseable date never are.

use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::FinanceRecord;

/// Trailing report window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Year,
}

impl Period {
    /// Window length in days
    pub fn days(self, today: NaiveDate) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Year if NaiveDate::from_ymd_opt(today.year(), 2, 29).is_some() => 366,
            Self::Year => 365,
        }
    }

    /// First day inside the window
    pub fn start(self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days(today))
    }

    /// Whether a record falls inside the window
    pub fn contains<R: FinanceRecord>(self, record: &R, today: NaiveDate) -> bool {
        let start = self.start(today);
        record.parsed_date().is_some_and(|date| date >= start)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "last 7 days"),
            Self::Month => write!(f, "last 30 days"),
            Self::Year => write!(f, "last year"),
        }
    }
}

/// Records inside the window, in their original order
pub fn within_period<R: FinanceRecord + Clone>(
    records: &[R],
    period: Period,
    today: NaiveDate,
) -> Vec<R> {
    records
        .iter()
        .filter(|record| period.contains(*record, today))
        .cloned()
        .collect()
}
