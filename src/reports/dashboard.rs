//! Dashboard report
//!
//! Gathers every derived metric into one value for the terminal dashboard
//! and for CSV export.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use super::category::{category_budget_share, category_totals, CategoryTotal};
use super::finance::{
    budget_percentage, budget_zone, income_left, net_available, remaining_budget,
    remaining_budget_after_deductions, remaining_income, remaining_money, savings_burn,
    savings_remaining, total_amount, BudgetZone, SavingsBurn,
};
use super::savings::{savings_summary, SavingsSummary};
use super::trend::{daily_totals, DayTotal};
use crate::display::report::{
    double_separator, format_amount, format_amount_colored, format_bar, paint_zone, separator,
    truncate,
};
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::models::{ExpenseRecord, FinanceParameters, SavingRecord};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;

/// Everything the dashboard shows
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Reference date for month-scoped figures
    pub as_of: NaiveDate,
    pub params: FinanceParameters,
    pub expense_count: usize,
    pub saving_count: usize,
    pub total_spent: f64,
    pub budget_percentage: f64,
    pub zone: BudgetZone,
    pub remaining_budget: f64,
    pub income_left: f64,
    pub net_available: f64,
    pub total_savings: f64,
    pub savings: SavingsSummary,
    pub savings_remaining: f64,
    pub remaining_income: f64,
    pub budget_left: f64,
    pub remaining_money: f64,
    pub burn: SavingsBurn,
    pub daily_spending: [DayTotal; 7],
    pub daily_savings: [DayTotal; 7],
    pub categories: Vec<CategoryTotal>,
}

impl DashboardReport {
    /// Compute the dashboard from record snapshots
    pub fn generate(
        expenses: &[ExpenseRecord],
        savings: &[SavingRecord],
        params: FinanceParameters,
        as_of: NaiveDate,
    ) -> Self {
        let pct = budget_percentage(expenses, params.monthly_budget);

        Self {
            as_of,
            params,
            expense_count: expenses.len(),
            saving_count: savings.len(),
            total_spent: total_amount(expenses),
            budget_percentage: pct,
            zone: budget_zone(pct),
            remaining_budget: remaining_budget(expenses, params.monthly_budget),
            income_left: income_left(expenses, params.monthly_income),
            net_available: net_available(params.monthly_income, expenses, savings),
            total_savings: total_amount(savings),
            savings: savings_summary(savings),
            savings_remaining: savings_remaining(savings, params.savings_goal),
            remaining_income: remaining_income(&params, expenses, savings),
            budget_left: remaining_budget_after_deductions(&params, expenses, savings),
            remaining_money: remaining_money(&params, savings),
            burn: savings_burn(expenses, params.monthly_budget, as_of),
            daily_spending: daily_totals(expenses),
            daily_savings: daily_totals(savings),
            categories: category_totals(expenses),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("ExpenseWise Dashboard ({})\n", self.as_of));
        output.push_str(&double_separator(WIDTH));
        output.push('\n');

        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Monthly income:",
            format_amount(self.params.monthly_income, symbol)
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Monthly budget:",
            format_amount(self.params.monthly_budget, symbol)
        ));
        output.push_str(&format!(
            "{:<24} {:>14}  ({} expenses)\n",
            "Total spent:",
            format_amount(self.total_spent, symbol),
            self.expense_count
        ));
        output.push('\n');

        // Budget progress
        let bar = format_bar(self.budget_percentage, 100.0, BAR_WIDTH);
        output.push_str("Budget progress\n");
        output.push_str(&format!(
            "  {} {}\n",
            paint_zone(&bar, self.zone),
            paint_zone(&format!("{:.0}% ({})", self.budget_percentage, self.zone), self.zone)
        ));
        output.push_str(&format!(
            "  This month: {} ({:.0}% of budget)\n",
            format_amount(self.burn.month_spent, symbol),
            self.burn.percent
        ));
        output.push('\n');

        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Remaining budget:",
            format_amount_colored(self.remaining_budget, symbol)
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Income left:",
            format_amount_colored(self.income_left, symbol)
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Net available:",
            format_amount_colored(self.net_available, symbol)
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Unplanned income:",
            format_amount_colored(self.remaining_money, symbol)
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Income after saving:",
            format_amount(self.remaining_income, symbol)
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Budget after saving:",
            format_amount(self.budget_left, symbol)
        ));
        output.push('\n');

        // Savings
        output.push_str("Savings\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "  {:<22} {:>14}\n",
            "Balance:",
            format_amount(self.total_savings, symbol)
        ));
        output.push_str(&format!(
            "  {:<22} {:>14}\n",
            "Deposited:",
            format_amount(self.savings.total_added, symbol)
        ));
        output.push_str(&format!(
            "  {:<22} {:>14}\n",
            "Withdrawn:",
            format_amount(self.savings.total_used, symbol)
        ));
        output.push_str(&format!(
            "  {:<22} {:>14}\n",
            "Left to goal:",
            format_amount(self.savings_remaining, symbol)
        ));
        output.push('\n');

        // Weekly spending trend
        output.push_str("Spending by weekday\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format_day_series(&self.daily_spending, symbol));
        output.push('\n');

        // Categories, as a share of the monthly budget
        output.push_str("Spending by category (share of budget)\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        if self.categories.is_empty() {
            output.push_str("  No expenses recorded.\n");
        } else {
            for total in &self.categories {
                let share = category_budget_share(total.amount, self.params.monthly_budget);
                output.push_str(&format!(
                    "  {:<28} {:>14} {:>6.1}%\n",
                    truncate(&total.category, 28),
                    format_amount(total.amount, symbol),
                    share
                ));
            }
        }

        output
    }

    /// Export the report as `metric,value` CSV rows
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseWiseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["metric", "value"])?;

        let scalars: [(&str, f64); 16] = [
            ("monthly_income", self.params.monthly_income),
            ("monthly_budget", self.params.monthly_budget),
            ("savings_goal", self.params.savings_goal),
            ("total_spent", self.total_spent),
            ("budget_percentage", self.budget_percentage),
            ("remaining_budget", self.remaining_budget),
            ("income_left", self.income_left),
            ("net_available", self.net_available),
            ("total_savings", self.total_savings),
            ("savings_added", self.savings.total_added),
            ("savings_used", self.savings.total_used),
            ("savings_remaining", self.savings_remaining),
            ("remaining_income", self.remaining_income),
            ("budget_left", self.budget_left),
            ("remaining_money", self.remaining_money),
            ("month_spent", self.burn.month_spent),
        ];

        for (metric, value) in scalars {
            csv_writer.write_record([metric.to_string(), format!("{:.2}", value)])?;
        }
        csv_writer.write_record(["budget_zone".to_string(), self.zone.to_string()])?;

        for day in &self.daily_spending {
            csv_writer.write_record([format!("spent_{}", day.label()), format!("{:.2}", day.amount)])?;
        }
        for day in &self.daily_savings {
            csv_writer.write_record([format!("saved_{}", day.label()), format!("{:.2}", day.amount)])?;
        }
        for total in &self.categories {
            csv_writer.write_record([
                format!("category:{}", total.category),
                format!("{:.2}", total.amount),
            ])?;
        }
        for total in &self.categories {
            csv_writer.write_record([
                format!("budget_share:{}", total.category),
                format!("{:.1}", category_budget_share(total.amount, self.params.monthly_budget)),
            ])?;
        }

        csv_writer
            .flush()
            .map_err(|e| ExpenseWiseError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Render a weekday series as one bar per day, scaled to the largest day
pub fn format_day_series(series: &[DayTotal; 7], symbol: &str) -> String {
    let max = series
        .iter()
        .map(|d| d.amount.abs())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for day in series {
        output.push_str(&format!(
            "  {} {} {:>12}\n",
            day.label(),
            format_bar(day.amount.abs(), max, BAR_WIDTH),
            format_amount(day.amount, symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    fn sample() -> (Vec<ExpenseRecord>, Vec<SavingRecord>) {
        let expenses = vec![
            ExpenseRecord::new(120.0, "Food", "2025-01-15"),
            ExpenseRecord::new("80", "Transport", "2025-01-16"),
            ExpenseRecord::new(50.0, "Food", "2025-01-18").mark_paid_from_savings(),
        ];
        let savings = vec![
            SavingRecord::new(300.0, "2025-01-13"),
            SavingRecord::new(-50.0, "2025-01-18"),
        ];
        (expenses, savings)
    }

    #[test]
    fn test_generate() {
        let (expenses, savings) = sample();
        let params = FinanceParameters::new(2000.0, 500.0, 1000.0);

        let report = DashboardReport::generate(&expenses, &savings, params, as_of());

        assert_eq!(report.total_spent, 250.0);
        assert_eq!(report.budget_percentage, 50.0);
        assert_eq!(report.zone, BudgetZone::Yellow);
        assert_eq!(report.remaining_budget, 250.0);
        assert_eq!(report.net_available, 2000.0 - (250.0 + 250.0));
        assert_eq!(report.total_savings, 250.0);
        assert_eq!(report.savings_remaining, 750.0);
        assert_eq!(report.remaining_income, 2000.0 - (200.0 + 300.0));
        assert_eq!(report.budget_left, 0.0);
        assert_eq!(report.burn.month_spent, 250.0);
        assert_eq!(report.burn.percent, 50.0);
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.daily_spending[2].amount, 120.0);
    }

    #[test]
    fn test_format_terminal_mentions_key_figures() {
        let (expenses, savings) = sample();
        let params = FinanceParameters::new(2000.0, 500.0, 1000.0);
        let report = DashboardReport::generate(&expenses, &savings, params, as_of());

        let text = report.format_terminal("$");
        assert!(text.contains("ExpenseWise Dashboard (2025-01-20)"));
        assert!(text.contains("$250.00"));
        assert!(text.contains("50% (yellow)"));
        assert!(text.contains("Transport"));
        assert!(text.contains("Mon"));
        assert!(text.contains("Sun"));
    }

    #[test]
    fn test_empty_dashboard() {
        let report = DashboardReport::generate(&[], &[], FinanceParameters::default(), as_of());

        assert_eq!(report.total_spent, 0.0);
        assert_eq!(report.zone, BudgetZone::Green);
        assert_eq!(report.daily_spending.len(), 7);
        assert!(report.format_terminal("$").contains("No expenses recorded."));
    }

    #[test]
    fn test_empty_dashboard_has_no_negative_zero() {
        let report = DashboardReport::generate(&[], &[], FinanceParameters::default(), as_of());

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(!csv.contains("-0.00"));
        assert!(csv.contains("total_spent,0.00\n"));
        assert!(csv.contains("month_spent,0.00\n"));
        assert_eq!(serde_json::to_string(&report.total_spent).unwrap(), "0.0");
        assert!(report.format_terminal("$").contains("0% (green)"));
        assert!(!report.format_terminal("$").contains("-0%"));
    }

    #[test]
    fn test_category_share_is_of_budget() {
        let expenses = vec![
            ExpenseRecord::new(50.0, "Food", "2025-01-15"),
            ExpenseRecord::new(150.0, "Rent", "2025-01-16"),
        ];
        let none: Vec<SavingRecord> = Vec::new();
        let params = FinanceParameters::new(2000.0, 400.0, 0.0);
        let report = DashboardReport::generate(&expenses, &none, params, as_of());

        let text = report.format_terminal("$");
        assert!(text.contains("12.5%"));
        assert!(text.contains("37.5%"));

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("budget_share:Food,12.5\n"));
        assert!(csv.contains("budget_share:Rent,37.5\n"));
    }

    #[test]
    fn test_export_csv() {
        let (expenses, savings) = sample();
        let params = FinanceParameters::new(2000.0, 500.0, 1000.0);
        let report = DashboardReport::generate(&expenses, &savings, params, as_of());

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("metric,value\n"));
        assert!(csv.contains("total_spent,250.00\n"));
        assert!(csv.contains("budget_zone,yellow\n"));
        assert!(csv.contains("spent_Wed,120.00\n"));
        assert!(csv.contains("category:Food,170.00\n"));
    }
}
