//! Date-bucketed trend series
//!
//! Buckets are fixed: seven weekdays starting Monday, or twelve calendar
//! months. Every bucket is always present so charts can render a fixed
//! number of columns. Records without a parseable date are left out.

use chrono::{Datelike, Month, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::FinanceRecord;

use super::finance::saturate;

/// Weekday order used by every weekday series
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Total for one weekday bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayTotal {
    pub day: Weekday,
    pub amount: f64,
}

impl DayTotal {
    /// Three-letter label ("Mon", "Tue", ...)
    pub fn label(&self) -> String {
        self.day.to_string()
    }
}

/// Total for one calendar-month bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthTotal {
    pub month: Month,
    pub amount: f64,
}

impl MonthTotal {
    /// Three-letter label ("Jan", "Feb", ...)
    pub fn label(&self) -> &'static str {
        &self.month.name()[..3]
    }
}

/// Round to cents, ties away from zero
///
/// `x * 100` is not exact in binary (12.345 scales to 1234.4999...), so a
/// fractional part within a few ulps of one half counts as a tie.
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        // Too large to carry a cents fraction
        return saturate(value);
    }
    let magnitude = scaled.abs();
    let whole = magnitude.trunc();
    let tolerance = magnitude.max(1.0) * 1e-12;

    let rounded = if ((magnitude - whole) - 0.5).abs() <= tolerance {
        whole + 1.0
    } else {
        magnitude.round()
    };

    if rounded == 0.0 {
        0.0
    } else {
        rounded.copysign(scaled) / 100.0
    }
}

/// Per-weekday totals, Monday first, always seven entries
pub fn daily_totals<R: FinanceRecord>(records: &[R]) -> [DayTotal; 7] {
    let mut totals = [0.0_f64; 7];

    for record in records {
        if let Some(date) = record.parsed_date() {
            let slot = &mut totals[date.weekday().num_days_from_monday() as usize];
            *slot = saturate(*slot + record.amount_value());
        }
    }

    std::array::from_fn(|i| DayTotal {
        day: WEEKDAYS[i],
        amount: round_to_cents(totals[i]),
    })
}

/// Per-month totals, January first, always twelve entries
///
/// The year is ignored: March 2024 and March 2025 share a bucket.
pub fn monthly_totals<R: FinanceRecord>(records: &[R]) -> [MonthTotal; 12] {
    let mut totals = [0.0_f64; 12];

    for record in records {
        if let Some(date) = record.parsed_date() {
            let slot = &mut totals[date.month0() as usize];
            *slot = saturate(*slot + record.amount_value());
        }
    }

    std::array::from_fn(|i| MonthTotal {
        month: MONTHS[i],
        amount: round_to_cents(totals[i]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, RawAmount, SavingRecord};

    fn on(date: &str, amount: impl Into<RawAmount>) -> ExpenseRecord {
        ExpenseRecord::new(amount, "Food", date)
    }

    fn amount_for(series: &[DayTotal; 7], day: Weekday) -> f64 {
        series.iter().find(|d| d.day == day).map(|d| d.amount).unwrap()
    }

    #[test]
    fn test_empty_input_has_seven_zero_days() {
        let none: Vec<ExpenseRecord> = Vec::new();
        let series = daily_totals(&none);

        let labels: Vec<String> = series.iter().map(DayTotal::label).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert!(series.iter().all(|d| d.amount == 0.0));
    }

    #[test]
    fn test_wednesday_bucket_rounds_half_up() {
        // 2025-01-15 is a Wednesday
        let series = daily_totals(&[on("2025-01-15", 12.345)]);

        assert_eq!(amount_for(&series, Weekday::Wed), 12.35);
        let others: f64 = series
            .iter()
            .filter(|d| d.day != Weekday::Wed)
            .map(|d| d.amount)
            .sum();
        assert_eq!(others, 0.0);
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        let mut undated = on("2025-01-15", 5.0);
        undated.date = None;

        let records = vec![on("not-a-date", 40.0), undated, on("2025-01-19", 7.0)];
        let series = daily_totals(&records);

        assert_eq!(series.len(), 7);
        assert_eq!(amount_for(&series, Weekday::Sun), 7.0);
        assert_eq!(series.iter().map(|d| d.amount).sum::<f64>(), 7.0);
    }

    #[test]
    fn test_sunday_lands_last() {
        // 2025-01-12 is a Sunday, 2025-01-13 a Monday
        let series = daily_totals(&[on("2025-01-12", 3.0), on("2025-01-13", 4.0)]);
        assert_eq!(series[0].day, Weekday::Mon);
        assert_eq!(series[0].amount, 4.0);
        assert_eq!(series[6].day, Weekday::Sun);
        assert_eq!(series[6].amount, 3.0);
    }

    #[test]
    fn test_savings_trend_keeps_sign() {
        let savings = vec![
            SavingRecord::new(100.0, "2025-01-14"),
            SavingRecord::new(-30.0, "2025-01-14T18:00:00Z"),
            SavingRecord::new(-5.0, "2025-01-16"),
        ];
        let series = daily_totals(&savings);

        assert_eq!(amount_for(&series, Weekday::Tue), 70.0);
        assert_eq!(amount_for(&series, Weekday::Thu), -5.0);
    }

    #[test]
    fn test_monthly_totals() {
        let records = vec![
            on("2025-03-01", 10.0),
            on("2024-03-31", "2.5"),
            on("2025-12-24", 1.005),
            on("bogus", 99.0),
        ];
        let series = monthly_totals(&records);

        assert_eq!(series.len(), 12);
        assert_eq!(series[0].label(), "Jan");
        assert_eq!(series[2].amount, 12.5);
        assert_eq!(series[11].label(), "Dec");
        assert_eq!(series[11].amount, 1.01);
        assert!(series.iter().enumerate().all(|(i, m)| i == 2 || i == 11 || m.amount == 0.0));
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(12.345), 12.35);
        assert_eq!(round_to_cents(12.344), 12.34);
        assert_eq!(round_to_cents(-12.345), -12.35);
        assert_eq!(round_to_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_to_cents(0.004), 0.0);
        assert_eq!(round_to_cents(-0.004), 0.0);
        assert_eq!(round_to_cents(100.0), 100.0);
        assert_eq!(round_to_cents(1e307), 1e307);
        assert!(round_to_cents(-0.0).is_sign_positive());
    }

    #[test]
    fn test_huge_amounts_stay_finite() {
        // 2025-01-15 is a Wednesday
        let records = vec![on("2025-01-15", 1e308), on("2025-01-15", 1e308)];

        let days = daily_totals(&records);
        assert_eq!(amount_for(&days, Weekday::Wed), f64::MAX);
        assert!(days.iter().all(|d| d.amount.is_finite()));

        let months = monthly_totals(&records);
        assert_eq!(months[0].amount, f64::MAX);
    }
}
