//! Expense record model
//!
//! Mirrors the shape the record store keeps: every field except the id is
//! optional on input, and unknown fields are ignored.

use serde::{Deserialize, Serialize};

use super::amount::RawAmount;
use super::date::parse_record_date;
use super::ids::ExpenseId;
use super::lenient;
use super::record::FinanceRecord;

/// Label used for expenses without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Opaque identifier
    #[serde(default)]
    pub id: ExpenseId,

    /// Amount spent (non-negative by convention, not enforced here)
    #[serde(default)]
    pub amount: RawAmount,

    /// Category label
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,

    /// ISO 8601 date string
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,

    /// Free-text description
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    /// Whether the expense was covered by a savings withdrawal
    #[serde(default, alias = "recovered_from_savings", deserialize_with = "lenient::flag")]
    pub paid_from_savings: bool,
}

impl ExpenseRecord {
    /// Create a new expense with a fresh ID
    pub fn new(amount: impl Into<RawAmount>, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            amount: amount.into(),
            category: Some(category.into()),
            date: Some(date.into()),
            description: String::new(),
            paid_from_savings: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark as paid from savings
    pub fn mark_paid_from_savings(mut self) -> Self {
        self.paid_from_savings = true;
        self
    }

    /// Category label with the sentinel applied for absent or blank values
    ///
    /// Non-blank labels are returned verbatim, so `"Food "` and `"Food"` are
    /// distinct categories.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => UNCATEGORIZED,
        }
    }

    /// Check that a user-entered expense is acceptable
    ///
    /// Stored records are never validated; this runs only at entry time.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        match self.category.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => {}
            _ => return Err(ExpenseValidationError::MissingCategory),
        }

        let amount = match &self.amount {
            RawAmount::Number(n) => Some(*n),
            RawAmount::Text(s) => s.trim().parse::<f64>().ok(),
            RawAmount::Missing => None,
        };
        match amount {
            Some(n) if n.is_finite() && n >= 0.0 => {}
            Some(n) if n.is_finite() => return Err(ExpenseValidationError::NegativeAmount),
            _ => return Err(ExpenseValidationError::InvalidAmount),
        }

        match self.date.as_deref() {
            None => Err(ExpenseValidationError::MissingDate),
            Some(d) if parse_record_date(d).is_none() => {
                Err(ExpenseValidationError::InvalidDate(d.to_string()))
            }
            Some(_) => Ok(()),
        }
    }
}

impl FinanceRecord for ExpenseRecord {
    fn raw_amount(&self) -> &RawAmount {
        &self.amount
    }

    fn raw_date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Validation failures for newly entered expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingCategory,
    InvalidAmount,
    NegativeAmount,
    MissingDate,
    InvalidDate(String),
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "category is required"),
            Self::InvalidAmount => write!(f, "amount is required and must be a number"),
            Self::NegativeAmount => write!(f, "amount must be >= 0"),
            Self::MissingDate => write!(f, "date is required"),
            Self::InvalidDate(d) => write!(f, "date must be an ISO date, got '{}'", d),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
