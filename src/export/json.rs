//! JSON export of the complete data set

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::Settings;
use crate::error::ExpenseWiseResult;
use crate::models::{ExpenseRecord, FinanceRecord, SavingRecord};
use crate::reports::{savings_summary, total_amount};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of settings and every stored record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub settings: Settings,
    pub expenses: Vec<ExpenseRecord>,
    pub savings: Vec<SavingRecord>,
    pub metadata: ExportMetadata,
}

/// Counts and totals for a quick sanity check of an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub saving_count: usize,
    pub total_spent: f64,
    pub savings_balance: f64,
    /// Earliest parseable expense date
    pub earliest_expense: Option<String>,
    /// Latest parseable expense date
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Build an export from what is currently loaded
    pub fn from_storage(storage: &Storage, settings: &Settings) -> ExpenseWiseResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let savings = storage.savings.get_all()?;

        let dates: Vec<_> = expenses.iter().filter_map(|e| e.parsed_date()).collect();

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            saving_count: savings.len(),
            total_spent: total_amount(&expenses),
            savings_balance: savings_summary(&savings).balance,
            earliest_expense: dates.iter().min().map(|d| d.to_string()),
            latest_expense: dates.iter().max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: settings.clone(),
            expenses,
            savings,
            metadata,
        })
    }
}

/// Write the full export as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> ExpenseWiseResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| crate::error::ExpenseWiseError::Export(e.to_string()))?;

    Ok(())
}
