//! CLI command handlers
//!
//! Each submodule pairs a clap argument type with a `handle_*` function
//! that calls into the services and prints the result.

pub mod audit;
pub mod expense;
pub mod export;
pub mod report;
pub mod savings;
pub mod settings;

pub use audit::{handle_audit_command, AuditArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
pub use savings::{handle_savings_command, SavingsCommands};
pub use settings::{handle_settings_command, SettingsCommands};
