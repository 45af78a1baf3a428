//! Service layer for ExpenseWise
//!
//! Services sit between the CLI and the record store: they validate
//! user-entered data, write it, and append to the audit log.

pub mod expense;
pub mod savings;
pub mod settings;

pub use expense::{ExpenseService, ExpenseUpdate, NewExpense};
pub use savings::{Recovery, SavingsService, UseSavings, DEFAULT_USE_CATEGORY, RECOVERY_NOTE};
pub use settings::{SettingsService, SettingsUpdate};
