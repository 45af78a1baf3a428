//! Spending grouped by category

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{normalize_amount, ExpenseRecord, FinanceRecord, RawAmount};

use super::finance::{clamp_percentage, saturate};

/// Summed spending for one category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Group expenses by category label and sum them
///
/// Expenses with no category (or a blank one) are grouped under
/// [`UNCATEGORIZED`](crate::models::UNCATEGORIZED). Labels are compared
/// verbatim, so `"Food "` is its own group. Entries currently come
/// out in order of first appearance, but callers must not rely on any order.
pub fn category_totals(expenses: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        let label = expense.category_label();
        let slot = *index.entry(label).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: label.to_string(),
                amount: 0.0,
            });
            totals.len() - 1
        });
        totals[slot].amount = saturate(totals[slot].amount + expense.amount_value());
    }

    totals
}

/// Category totals sorted by amount, largest first, limited to `limit` entries
pub fn top_categories(expenses: &[ExpenseRecord], limit: usize) -> Vec<CategoryTotal> {
    let mut totals = category_totals(expenses);
    totals.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    totals.truncate(limit);
    totals
}

/// Share of the monthly budget taken by one category's spending
///
/// Capped at 100 and rounded to one decimal. A budget that is not positive
/// yields 0 rather than a fallback denominator.
pub fn category_budget_share(amount: f64, budget: impl Into<RawAmount>) -> f64 {
    let budget = normalize_amount(&budget.into());
    if budget <= 0.0 {
        return 0.0;
    }
    clamp_percentage((clamp_percentage(amount / budget * 100.0) * 10.0).round() / 10.0)
}
