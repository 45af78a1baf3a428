//! Core data models for ExpenseWise
//!
//! Expense and savings records exactly as the record store keeps them, plus
//! the normalization helpers that make loosely typed fields safe to reduce.

pub mod amount;
pub mod date;
pub mod expense;
pub mod ids;
pub mod lenient;
pub mod params;
pub mod record;
pub mod saving;

pub use amount::{normalize_amount, RawAmount};
pub use date::parse_record_date;
pub use expense::{ExpenseRecord, ExpenseValidationError, UNCATEGORIZED};
pub use ids::{ExpenseId, SavingId};
pub use params::FinanceParameters;
pub use record::FinanceRecord;
pub use saving::SavingRecord;
