//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ExpenseRecord, FinanceRecord};

use super::report::{format_amount, truncate};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn from_record(expense: &ExpenseRecord, symbol: &str) -> Self {
        let mut description = truncate(&expense.description, 30);
        if expense.paid_from_savings {
            description = format!("{} [savings]", description).trim_start().to_string();
        }

        Self {
            id: expense.id.short(),
            date: record_date(expense),
            category: truncate(expense.category_label(), 20),
            amount: format_amount(expense.amount_value(), symbol),
            description,
        }
    }
}

/// Date column: the parsed date, or the raw value marked as unreadable
pub(crate) fn record_date<R: FinanceRecord>(record: &R) -> String {
    match (record.parsed_date(), record.raw_date()) {
        (Some(date), _) => date.format("%Y-%m-%d").to_string(),
        (None, Some(raw)) if !raw.trim().is_empty() => format!("{}?", truncate(raw, 10)),
        _ => "-".to_string(),
    }
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[ExpenseRecord], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::from_record(e, symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single expense for display
pub fn format_expense_details(expense: &ExpenseRecord, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", record_date(expense)));
    output.push_str(&format!("Category:    {}\n", expense.category_label()));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_amount(expense.amount_value(), symbol)
    ));

    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    if expense.paid_from_savings {
        output.push_str("Paid from savings\n");
    }

    output
}
