//! Common view over dated, amount-bearing records
//!
//! The aggregator's bucketing functions work over any record that exposes an
//! amount and a date, so expenses and savings share one implementation.

use chrono::NaiveDate;

use super::amount::{normalize_amount, RawAmount};
use super::date::parse_record_date;

/// A record the finance aggregator can reduce
pub trait FinanceRecord {
    /// The amount as stored
    fn raw_amount(&self) -> &RawAmount;

    /// The date string as stored, if any
    fn raw_date(&self) -> Option<&str>;

    /// Normalized amount (finite, 0 for anything unusable)
    fn amount_value(&self) -> f64 {
        normalize_amount(self.raw_amount())
    }

    /// Parsed calendar date
    fn parsed_date(&self) -> Option<NaiveDate> {
        self.raw_date().and_then(parse_record_date)
    }
}

impl<T: FinanceRecord + ?Sized> FinanceRecord for &T {
    fn raw_amount(&self) -> &RawAmount {
        (**self).raw_amount()
    }

    fn raw_date(&self) -> Option<&str> {
        (**self).raw_date()
    }
}
