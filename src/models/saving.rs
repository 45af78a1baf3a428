//! Savings ledger entry model

use serde::{Deserialize, Serialize};

use super::amount::RawAmount;
use super::ids::SavingId;
use super::lenient;
use super::record::FinanceRecord;

/// A deposit into (positive) or withdrawal from (negative) savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingRecord {
    #[serde(default)]
    pub id: SavingId,

    /// Signed amount
    #[serde(default)]
    pub amount: RawAmount,

    /// ISO 8601 date string
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub note: String,
}

impl SavingRecord {
    /// Create a new savings entry with a fresh ID
    pub fn new(amount: impl Into<RawAmount>, date: impl Into<String>) -> Self {
        Self {
            id: SavingId::new(),
            amount: amount.into(),
            date: Some(date.into()),
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// True for withdrawals
    pub fn is_withdrawal(&self) -> bool {
        self.amount_value() < 0.0
    }
}

impl FinanceRecord for SavingRecord {
    fn raw_amount(&self) -> &RawAmount {
        &self.amount
    }

    fn raw_date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}
