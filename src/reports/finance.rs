//! Budget, spend and savings metrics
//!
//! Every function here is pure and total: records are only read, nothing is
//! cached between calls, and unusable amounts contribute 0 instead of
//! failing. Scalar parameters go through the same normalization as record
//! amounts, so a NaN budget behaves like a missing one.
//!
//! Sums saturate at `±f64::MAX` instead of overflowing to infinity, and an
//! empty sum is `+0.0`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{normalize_amount, ExpenseRecord, FinanceParameters, FinanceRecord, RawAmount};

/// Severity band of budget consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetZone {
    /// Under 50% of the budget used
    Green,
    /// 50% up to (not including) 75%
    Yellow,
    /// 75% and above
    Red,
}

impl fmt::Display for BudgetZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => write!(f, "green"),
            Self::Yellow => write!(f, "yellow"),
            Self::Red => write!(f, "red"),
        }
    }
}

/// Percentage of the monthly budget consumed during the current month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsBurn {
    /// Whole-number percentage in [0, 100]
    pub percent: f64,
    /// Spending dated in the current month
    pub month_spent: f64,
}

fn normalize_param(raw: impl Into<RawAmount>) -> f64 {
    normalize_amount(&raw.into())
}

/// Clamp to [0, 100], mapping NaN and -0.0 to 0
pub(crate) fn clamp_percentage(value: f64) -> f64 {
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
    if clamped == 0.0 {
        0.0
    } else {
        clamped
    }
}

/// Pull a value back into the finite range: NaN is 0, infinities saturate
pub(crate) fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// Saturating sum starting from `+0.0`
pub(crate) fn saturating_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .fold(0.0, |acc, value| saturate(acc + value))
}

/// Sum of normalized amounts
pub fn total_amount<R: FinanceRecord>(records: &[R]) -> f64 {
    saturating_sum(records.iter().map(FinanceRecord::amount_value))
}

/// Share of the budget spent, for a bounded progress bar
///
/// A non-positive or missing budget is replaced by 1, so with no budget set
/// the result is the raw spend total (before clamping). Overspending is
/// truncated to 100; use [`total_amount`] for the unclamped ratio.
pub fn budget_percentage<R: FinanceRecord>(expenses: &[R], budget: impl Into<RawAmount>) -> f64 {
    let total = total_amount(expenses);
    let effective_budget = normalize_param(budget).max(1.0);
    clamp_percentage(total / effective_budget * 100.0)
}

/// Classify a budget percentage into a zone
pub fn budget_zone(percentage: f64) -> BudgetZone {
    let p = clamp_percentage(percentage);
    if p < 50.0 {
        BudgetZone::Green
    } else if p < 75.0 {
        BudgetZone::Yellow
    } else {
        BudgetZone::Red
    }
}

/// Budget minus spending; negative when over budget
pub fn remaining_budget<R: FinanceRecord>(expenses: &[R], budget: impl Into<RawAmount>) -> f64 {
    saturate(normalize_param(budget) - total_amount(expenses))
}

/// Income minus spending; negative when spending exceeds income
pub fn income_left<R: FinanceRecord>(expenses: &[R], income: impl Into<RawAmount>) -> f64 {
    saturate(normalize_param(income) - total_amount(expenses))
}

/// Income minus everything spent and everything put into savings
///
/// Unclamped: the figure is informational, so a deficit shows as negative.
pub fn net_available<E: FinanceRecord, S: FinanceRecord>(
    income: impl Into<RawAmount>,
    expenses: &[E],
    savings: &[S],
) -> f64 {
    let outgoing = saturate(total_amount(expenses) + total_amount(savings));
    saturate(normalize_param(income) - outgoing)
}

/// Distance to the savings goal; negative once the goal is exceeded
pub fn savings_remaining<S: FinanceRecord>(savings: &[S], goal: impl Into<RawAmount>) -> f64 {
    saturate(normalize_param(goal) - total_amount(savings))
}

/// Spending that actually came out of this month's income
///
/// Expenses paid from savings are skipped; the matching withdrawal already
/// reduced the savings balance.
fn expenses_from_income(expenses: &[ExpenseRecord]) -> f64 {
    saturating_sum(
        expenses
            .iter()
            .filter(|e| !e.paid_from_savings)
            .map(FinanceRecord::amount_value),
    )
}

/// Sum of savings deposits (positive entries only)
fn savings_deposits<S: FinanceRecord>(savings: &[S]) -> f64 {
    saturating_sum(
        savings
            .iter()
            .map(FinanceRecord::amount_value)
            .filter(|amount| *amount > 0.0),
    )
}

/// Income left after income-funded spending and savings deposits, floored at 0
pub fn remaining_income<S: FinanceRecord>(
    params: &FinanceParameters,
    expenses: &[ExpenseRecord],
    savings: &[S],
) -> f64 {
    let deduction = saturate(expenses_from_income(expenses) + savings_deposits(savings));
    saturate(normalize_param(params.monthly_income) - deduction).max(0.0)
}

/// Budget left after income-funded spending and savings deposits, floored at 0
pub fn remaining_budget_after_deductions<S: FinanceRecord>(
    params: &FinanceParameters,
    expenses: &[ExpenseRecord],
    savings: &[S],
) -> f64 {
    let deduction = saturate(expenses_from_income(expenses) + savings_deposits(savings));
    saturate(normalize_param(params.monthly_budget) - deduction).max(0.0)
}

/// Income not earmarked for the budget or already sitting in savings
pub fn remaining_money<S: FinanceRecord>(params: &FinanceParameters, savings: &[S]) -> f64 {
    let earmarked = normalize_param(params.monthly_income) - normalize_param(params.monthly_budget);
    saturate(saturate(earmarked) - total_amount(savings))
}

/// How much of the budget the current month's spending has burnt through
///
/// Only expenses dated in the same year and month as `today` count. A budget
/// of exactly 0 is treated as 1; a negative budget is kept, which clamps the
/// percentage to 0.
pub fn savings_burn<R: FinanceRecord>(
    expenses: &[R],
    budget: impl Into<RawAmount>,
    today: NaiveDate,
) -> SavingsBurn {
    let month_spent = saturating_sum(
        expenses
            .iter()
            .filter(|e| {
                e.parsed_date()
                    .is_some_and(|d| d.year() == today.year() && d.month() == today.month())
            })
            .map(FinanceRecord::amount_value),
    );

    let budget = normalize_param(budget);
    let effective_budget = if budget == 0.0 { 1.0 } else { budget };

    SavingsBurn {
        percent: clamp_percentage(month_spent / effective_budget * 100.0).round(),
        month_spent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SavingRecord;

    fn expense(amount: impl Into<RawAmount>) -> ExpenseRecord {
        ExpenseRecord::new(amount, "Food", "2025-01-15")
    }

    fn saving(amount: f64) -> SavingRecord {
        SavingRecord::new(amount, "2025-01-15")
    }

    #[test]
    fn test_total_amount() {
        let empty: Vec<ExpenseRecord> = Vec::new();
        assert_eq!(total_amount(&empty), 0.0);

        let records = vec![expense(10.0), expense("5.5"), expense("bad")];
        assert_eq!(total_amount(&records), 15.5);
    }

    #[test]
    fn test_empty_totals_are_positive_zero() {
        let empty: Vec<ExpenseRecord> = Vec::new();
        let no_savings: Vec<SavingRecord> = Vec::new();
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();

        assert!(total_amount(&empty).is_sign_positive());
        assert!(total_amount(&no_savings).is_sign_positive());
        assert!(budget_percentage(&empty, 100.0).is_sign_positive());
        assert!(savings_burn(&empty, 100.0, today).month_spent.is_sign_positive());
        assert!(savings_burn(&empty, 100.0, today).percent.is_sign_positive());
        assert_eq!(format!("{:.2}", total_amount(&empty)), "0.00");
    }

    #[test]
    fn test_huge_sums_saturate() {
        let expenses = vec![expense(1e308), expense(1e308)];
        let none: Vec<SavingRecord> = Vec::new();

        assert_eq!(total_amount(&expenses), f64::MAX);
        assert_eq!(net_available(0.0, &expenses, &none), -f64::MAX);
        assert_eq!(remaining_budget(&expenses, 100.0), -f64::MAX);
        assert_eq!(budget_percentage(&expenses, 100.0), 100.0);
        assert!(savings_remaining(&[saving(1e308), saving(1e308)], 0.0).is_finite());

        let mixed = vec![expense(1e308), expense(1e308), expense(-1e308)];
        assert!(total_amount(&mixed).is_finite());
    }

    #[test]
    fn test_total_ignores_non_finite() {
        let records = vec![expense(f64::NAN), expense(f64::INFINITY), expense(3.0)];
        assert_eq!(total_amount(&records), 3.0);
    }

    #[test]
    fn test_budget_percentage() {
        let fifty = vec![expense(20.0), expense(30.0)];
        assert_eq!(budget_percentage(&fifty, 100.0), 50.0);

        let over = vec![expense(150.0)];
        assert_eq!(budget_percentage(&over, 100.0), 100.0);

        // No budget: denominator falls back to 1
        assert_eq!(budget_percentage(&[expense(5.0)], 0.0), 100.0);
        assert_eq!(budget_percentage(&[expense(0.5)], 0.0), 50.0);
        assert_eq!(budget_percentage(&[expense(0.5)], -20.0), 50.0);
        assert_eq!(budget_percentage(&[expense(0.5)], RawAmount::Missing), 50.0);
        assert_eq!(budget_percentage(&[expense(0.5)], f64::NAN), 50.0);
    }

    #[test]
    fn test_budget_percentage_never_negative() {
        let refunds = vec![expense(-40.0)];
        assert_eq!(budget_percentage(&refunds, 100.0), 0.0);
    }

    #[test]
    fn test_budget_zone_boundaries() {
        assert_eq!(budget_zone(0.0), BudgetZone::Green);
        assert_eq!(budget_zone(49.0), BudgetZone::Green);
        assert_eq!(budget_zone(49.999), BudgetZone::Green);
        assert_eq!(budget_zone(50.0), BudgetZone::Yellow);
        assert_eq!(budget_zone(74.9), BudgetZone::Yellow);
        assert_eq!(budget_zone(75.0), BudgetZone::Red);
        assert_eq!(budget_zone(100.0), BudgetZone::Red);
    }

    #[test]
    fn test_budget_zone_clamps_input() {
        assert_eq!(budget_zone(-10.0), BudgetZone::Green);
        assert_eq!(budget_zone(250.0), BudgetZone::Red);
        assert_eq!(budget_zone(f64::NAN), BudgetZone::Green);
        assert_eq!(budget_zone(f64::INFINITY), BudgetZone::Red);
    }

    #[test]
    fn test_net_available() {
        let expenses = vec![expense(100.0), expense(200.0)];
        let savings = vec![saving(150.0), saving(50.0)];
        assert_eq!(net_available(1000.0, &expenses, &savings), 500.0);

        let big = vec![expense(1500.0)];
        let none: Vec<SavingRecord> = Vec::new();
        assert_eq!(net_available(1000.0, &big, &none), -500.0);
    }

    #[test]
    fn test_savings_remaining() {
        let savings = vec![saving(300.0), saving(-100.0)];
        assert_eq!(savings_remaining(&savings, 1000.0), 800.0);
        assert_eq!(savings_remaining(&savings, 150.0), -50.0);
        assert_eq!(savings_remaining(&savings, "oops"), -200.0);
    }

    #[test]
    fn test_remaining_budget_and_income_left() {
        let expenses = vec![expense(40.0), expense("10")];
        assert_eq!(remaining_budget(&expenses, 100.0), 50.0);
        assert_eq!(remaining_budget(&expenses, 20.0), -30.0);
        assert_eq!(income_left(&expenses, 500.0), 450.0);
    }

    #[test]
    fn test_remaining_income_skips_savings_funded_expenses() {
        let params = FinanceParameters::new(1000.0, 600.0, 0.0);
        let expenses = vec![
            expense(200.0),
            expense(80.0).mark_paid_from_savings(),
        ];
        let savings = vec![saving(100.0), saving(-80.0)];

        assert_eq!(remaining_income(&params, &expenses, &savings), 700.0);
        assert_eq!(
            remaining_budget_after_deductions(&params, &expenses, &savings),
            300.0
        );
    }

    #[test]
    fn test_remaining_income_floors_at_zero() {
        let params = FinanceParameters::new(100.0, 50.0, 0.0);
        let expenses = vec![expense(400.0)];
        let none: Vec<SavingRecord> = Vec::new();

        assert_eq!(remaining_income(&params, &expenses, &none), 0.0);
        assert_eq!(remaining_budget_after_deductions(&params, &expenses, &none), 0.0);
    }

    #[test]
    fn test_remaining_money() {
        let params = FinanceParameters::new(3000.0, 2000.0, 0.0);
        let savings = vec![saving(1500.0)];
        assert_eq!(remaining_money(&params, &savings), -500.0);
    }

    #[test]
    fn test_savings_burn_counts_current_month_only() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let expenses = vec![
            ExpenseRecord::new(50.0, "Food", "2025-01-02"),
            ExpenseRecord::new(25.0, "Food", "2025-01-19T22:00:00Z"),
            ExpenseRecord::new(999.0, "Food", "2024-01-10"),
            ExpenseRecord::new(999.0, "Food", "2025-02-01"),
            ExpenseRecord::new(999.0, "Food", "garbage"),
        ];

        let burn = savings_burn(&expenses, 200.0, today);
        assert_eq!(burn.month_spent, 75.0);
        assert_eq!(burn.percent, 38.0);
    }

    #[test]
    fn test_savings_burn_zero_budget() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let expenses = vec![ExpenseRecord::new(0.25, "Food", "2025-01-02")];

        let burn = savings_burn(&expenses, 0.0, today);
        assert_eq!(burn.percent, 25.0);

        let burn = savings_burn(&[ExpenseRecord::new(10.0, "Food", "2025-01-02")], 0.0, today);
        assert_eq!(burn.percent, 100.0);
    }

    #[test]
    fn test_savings_burn_negative_budget() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let expenses = vec![ExpenseRecord::new(40.0, "Food", "2025-01-02")];

        let burn = savings_burn(&expenses, -50.0, today);
        assert_eq!(burn.percent, 0.0);
        assert!(burn.percent.is_sign_positive());
        assert_eq!(burn.month_spent, 40.0);
    }

    #[test]
    fn test_idempotent_and_inputs_untouched() {
        let expenses = vec![expense(12.0), expense("3.5"), expense(RawAmount::Missing)];
        let savings = vec![saving(40.0)];
        let before = expenses.clone();

        assert_eq!(budget_percentage(&expenses, 80.0), budget_percentage(&expenses, 80.0));
        assert_eq!(
            net_available(500.0, &expenses, &savings),
            net_available(500.0, &expenses, &savings)
        );
        assert_eq!(expenses, before);
    }
}
