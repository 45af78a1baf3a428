//! CLI commands for settings

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::report::format_amount;
use crate::error::ExpenseWiseResult;
use crate::services::{SettingsService, SettingsUpdate};
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Change one or more settings
    Set {
        /// Monthly income
        #[arg(long)]
        income: Option<f64>,
        /// Monthly spending budget
        #[arg(long)]
        budget: Option<f64>,
        /// Savings goal
        #[arg(long)]
        goal: Option<f64>,
        /// Currency symbol for display
        #[arg(long)]
        currency: Option<String>,
        /// Budget alert notifications
        #[arg(long)]
        budget_alert: Option<bool>,
        /// Large expense notifications
        #[arg(long)]
        large_expense: Option<bool>,
        /// Monthly summary email
        #[arg(long)]
        monthly_email: Option<bool>,
    },
}

/// Handle settings commands
pub fn handle_settings_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: SettingsCommands,
) -> ExpenseWiseResult<()> {
    match cmd {
        SettingsCommands::Show => print!("{}", format_settings(settings)),

        SettingsCommands::Set {
            income,
            budget,
            goal,
            currency,
            budget_alert,
            large_expense,
            monthly_email,
        } => {
            let update = SettingsUpdate {
                monthly_income: income,
                monthly_budget: budget,
                savings_goal: goal,
                currency_symbol: currency,
                budget_alert,
                large_expense,
                monthly_email,
            };

            if update.is_empty() {
                println!("Nothing to change. See 'expensewise settings set --help'.");
                return Ok(());
            }

            if SettingsService::new(storage).update(settings, update)? {
                println!("Settings updated.");
                print!("{}", format_settings(settings));
            } else {
                println!("Settings unchanged.");
            }
        }
    }

    Ok(())
}

fn format_settings(settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let on_off = |flag: bool| if flag { "on" } else { "off" };

    let mut output = String::new();
    output.push_str(&format!("Monthly income:  {}\n", format_amount(settings.monthly_income, symbol)));
    output.push_str(&format!("Monthly budget:  {}\n", format_amount(settings.monthly_budget, symbol)));
    output.push_str(&format!("Savings goal:    {}\n", format_amount(settings.savings_goal, symbol)));
    output.push_str(&format!("Currency symbol: {}\n", symbol));
    output.push_str(&format!("Date format:     {}\n", settings.date_format));
    output.push_str("Notifications:\n");
    output.push_str(&format!("  Budget alert:  {}\n", on_off(settings.notifications.budget_alert)));
    output.push_str(&format!("  Large expense: {}\n", on_off(settings.notifications.large_expense)));
    output.push_str(&format!("  Monthly email: {}\n", on_off(settings.notifications.monthly_email)));
    output
}
