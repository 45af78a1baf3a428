//! Scalar finance parameters supplied alongside record collections

use serde::{Deserialize, Serialize};

/// Income, budget and goal for a month, as configured by the user
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinanceParameters {
    pub monthly_income: f64,
    pub monthly_budget: f64,
    pub savings_goal: f64,
}

impl FinanceParameters {
    pub fn new(monthly_income: f64, monthly_budget: f64, savings_goal: f64) -> Self {
        Self {
            monthly_income,
            monthly_budget,
            savings_goal,
        }
    }
}
