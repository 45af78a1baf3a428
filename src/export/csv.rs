//! CSV export of expenses and the savings ledger
//!
//! Both collections go into one sheet, distinguished by the `Type` column.

use std::io::Write;

use serde::Serialize;

use crate::error::ExpenseWiseResult;
use crate::models::{ExpenseRecord, FinanceRecord, SavingRecord};
use crate::storage::Storage;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Paid From Savings")]
    paid_from_savings: bool,
}

impl<'a> CsvRow<'a> {
    fn expense(e: &'a ExpenseRecord) -> Self {
        Self {
            kind: "expense",
            id: e.id.as_str(),
            date: e.date.as_deref().unwrap_or(""),
            category: e.category_label(),
            amount: format!("{:.2}", e.amount_value()),
            description: &e.description,
            paid_from_savings: e.paid_from_savings,
        }
    }

    fn saving(s: &'a SavingRecord) -> Self {
        Self {
            kind: "saving",
            id: s.id.as_str(),
            date: s.date.as_deref().unwrap_or(""),
            category: "",
            amount: format!("{:.2}", s.amount_value()),
            description: &s.note,
            paid_from_savings: false,
        }
    }
}

/// Write every expense, then every savings entry, as CSV rows
pub fn export_records_csv<W: Write>(storage: &Storage, writer: W) -> ExpenseWiseResult<()> {
    let expenses = storage.expenses.list()?;
    let savings = storage.savings.list()?;

    let mut out = ::csv::Writer::from_writer(writer);
    for expense in &expenses {
        out.serialize(CsvRow::expense(expense))?;
    }
    for saving in &savings {
        out.serialize(CsvRow::saving(saving))?;
    }
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpenseWisePaths;
    use tempfile::TempDir;

    #[test]
    fn test_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .expenses
            .insert(ExpenseRecord::new(12.5, "Food, Drink", "2025-01-02").with_description("tea"))
            .unwrap();
        storage
            .savings
            .insert(SavingRecord::new(-30.0, "2025-01-03").with_note("spent"))
            .unwrap();

        let mut out = Vec::new();
        export_records_csv(&storage, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Type,ID,Date,Category,Amount,Description,Paid From Savings"
        );
        assert!(lines[1].starts_with("expense,"));
        assert!(lines[1].contains("\"Food, Drink\""));
        assert!(lines[1].ends_with(",12.50,tea,false"));
        assert!(lines[2].starts_with("saving,"));
        assert!(lines[2].contains("-30.00,spent"));
    }

    #[test]
    fn test_empty_export_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let mut out = Vec::new();
        export_records_csv(&storage, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
