//! Savings ledger summary

use serde::{Deserialize, Serialize};

use crate::models::FinanceRecord;

use super::finance::saturate;

/// Deposits, withdrawals and resulting balance of the savings ledger
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsSummary {
    /// Sum of positive entries
    pub total_added: f64,
    /// Sum of withdrawals, as a positive number
    pub total_used: f64,
    /// `total_added - total_used`
    pub balance: f64,
}

/// Split savings entries into deposits and withdrawals
pub fn savings_summary<S: FinanceRecord>(savings: &[S]) -> SavingsSummary {
    let (total_added, total_used) =
        savings
            .iter()
            .map(FinanceRecord::amount_value)
            .fold((0.0, 0.0), |(added, used), amount| {
                if amount >= 0.0 {
                    (saturate(added + amount), used)
                } else {
                    (added, saturate(used - amount))
                }
            });

    SavingsSummary {
        total_added,
        total_used,
        balance: saturate(total_added - total_used),
    }
}
