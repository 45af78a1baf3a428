//! CLI commands for reports

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::report::{format_amount, format_bar, format_percentage, separator, truncate};
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::models::FinanceRecord;
use crate::reports::dashboard::format_day_series;
use crate::reports::{
    category_budget_share, daily_totals, monthly_totals, top_categories, within_period,
    DashboardReport, Period,
};
use crate::storage::Storage;

const BAR_WIDTH: usize = 30;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Budget, income and savings overview
    Dashboard {
        /// Export to CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals per day of the week
    Trend {
        /// Show savings movements instead of spending
        #[arg(long)]
        savings: bool,

        /// Only count records from a trailing window
        #[arg(long, value_enum)]
        period: Option<Period>,
    },

    /// Spending per category, with each category's share of the budget
    Categories {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Only count expenses from a trailing window
        #[arg(long, value_enum)]
        period: Option<Period>,
    },

    /// Totals per calendar month
    Monthly {
        /// Show savings movements instead of spending
        #[arg(long)]
        savings: bool,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseWiseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Dashboard { output } => handle_dashboard(storage, settings, output),

        ReportCommands::Trend { savings, period } => {
            let today = Local::now().date_naive();
            let (title, series) = if savings {
                let records = windowed(storage.savings.get_all()?, period, today);
                (with_period("Savings by weekday", period), daily_totals(&records))
            } else {
                let records = windowed(storage.expenses.get_all()?, period, today);
                (with_period("Spending by weekday", period), daily_totals(&records))
            };

            println!("{}", title);
            println!("{}", separator(title.chars().count()));
            print!("{}", format_day_series(&series, symbol));
            Ok(())
        }

        ReportCommands::Categories { top, period } => {
            let today = Local::now().date_naive();
            let expenses = windowed(storage.expenses.get_all()?, period, today);
            let categories = top_categories(&expenses, top.unwrap_or(usize::MAX));

            if categories.is_empty() {
                println!("No expenses recorded.");
                return Ok(());
            }

            let max = categories.first().map(|c| c.amount).unwrap_or(0.0);
            let title = with_period("Spending by category (share of budget)", period);

            println!("{}", title);
            println!("{}", separator(title.chars().count()));
            for category in &categories {
                let share = category_budget_share(category.amount, settings.monthly_budget);
                println!(
                    "  {:<20} {} {:>12} {:>6}",
                    truncate(&category.category, 20),
                    format_bar(category.amount, max, BAR_WIDTH),
                    format_amount(category.amount, symbol),
                    format_percentage(share)
                );
            }
            Ok(())
        }

        ReportCommands::Monthly { savings } => {
            let (title, series) = if savings {
                ("Savings by month", monthly_totals(&storage.savings.get_all()?))
            } else {
                ("Spending by month", monthly_totals(&storage.expenses.get_all()?))
            };

            let max = series.iter().map(|m| m.amount.abs()).fold(0.0_f64, f64::max);

            println!("{}", title);
            println!("{}", separator(title.chars().count()));
            for month in &series {
                println!(
                    "  {} {} {:>12}",
                    month.label(),
                    format_bar(month.amount.abs(), max, BAR_WIDTH),
                    format_amount(month.amount, symbol)
                );
            }
            Ok(())
        }
    }
}

/// Narrow records to a trailing window when one was requested
fn windowed<R: FinanceRecord + Clone>(
    records: Vec<R>,
    period: Option<Period>,
    today: NaiveDate,
) -> Vec<R> {
    match period {
        Some(period) => within_period(&records, period, today),
        None => records,
    }
}

fn with_period(title: &str, period: Option<Period>) -> String {
    match period {
        Some(period) => format!("{} ({})", title, period),
        None => title.to_string(),
    }
}

fn handle_dashboard(
    storage: &Storage,
    settings: &Settings,
    output: Option<PathBuf>,
) -> ExpenseWiseResult<()> {
    let report = DashboardReport::generate(
        &storage.expenses.get_all()?,
        &storage.savings.get_all()?,
        settings.finance_parameters(),
        Local::now().date_naive(),
    );

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            ExpenseWiseError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Dashboard exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
