//! Display formatting for terminal output

pub mod expense;
pub mod report;
pub mod saving;

pub use expense::{format_expense_details, format_expense_table};
pub use saving::{format_saving_table, format_savings_summary};
