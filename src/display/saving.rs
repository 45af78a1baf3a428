//! Savings ledger display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{FinanceRecord, SavingRecord};
use crate::reports::SavingsSummary;

use super::expense::record_date;
use super::report::{format_amount, truncate};

#[derive(Tabled)]
struct SavingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format ledger entries as a table
pub fn format_saving_table(savings: &[SavingRecord], symbol: &str) -> String {
    if savings.is_empty() {
        return "No savings entries found.\n".to_string();
    }

    let rows: Vec<SavingRow> = savings
        .iter()
        .map(|s| SavingRow {
            id: s.id.short(),
            date: record_date(s),
            kind: if s.is_withdrawal() { "use" } else { "add" },
            amount: format_amount(s.amount_value(), symbol),
            note: truncate(&s.note, 30),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the savings summary block
pub fn format_savings_summary(summary: &SavingsSummary, goal: f64, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total added: {:>12}\n", format_amount(summary.total_added, symbol)));
    output.push_str(&format!("Total used:  {:>12}\n", format_amount(summary.total_used, symbol)));
    output.push_str(&format!("Balance:     {:>12}\n", format_amount(summary.balance, symbol)));

    if goal > 0.0 {
        let progress = (summary.balance / goal * 100.0).clamp(0.0, 100.0);
        output.push_str(&format!(
            "Goal:        {:>12} ({:.0}% reached)\n",
            format_amount(goal, symbol),
            progress
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_marks_withdrawals() {
        let savings = vec![
            SavingRecord::new(100.0, "2025-01-01").with_note("bonus"),
            SavingRecord::new(-40.0, "2025-01-02"),
        ];

        let table = format_saving_table(&savings, "$");
        assert!(table.contains("add"));
        assert!(table.contains("use"));
        assert!(table.contains("-$40.00"));
        assert!(table.contains("bonus"));
    }

    #[test]
    fn test_summary_with_goal() {
        let summary = SavingsSummary {
            total_added: 300.0,
            total_used: 50.0,
            balance: 250.0,
        };

        let text = format_savings_summary(&summary, 1000.0, "$");
        assert!(text.contains("$250.00"));
        assert!(text.contains("(25% reached)"));

        let no_goal = format_savings_summary(&summary, 0.0, "$");
        assert!(!no_goal.contains("Goal"));
    }
}
