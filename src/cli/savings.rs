//! CLI commands for the savings ledger

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::report::format_amount;
use crate::display::{format_saving_table, format_savings_summary};
use crate::error::ExpenseWiseResult;
use crate::services::{SavingsService, UseSavings};
use crate::storage::Storage;

/// Savings subcommands
#[derive(Subcommand, Debug)]
pub enum SavingsCommands {
    /// Add money to savings
    Add {
        /// Amount to deposit
        amount: f64,
        /// Note for the ledger
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// Spend from savings (also records an expense)
    Use {
        /// Amount to spend
        amount: f64,
        /// Expense category (defaults to Misc)
        #[arg(short, long)]
        category: Option<String>,
        /// Expense description
        #[arg(long = "desc", default_value = "")]
        description: String,
        /// Note for the ledger
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List ledger entries, newest first
    #[command(alias = "ls")]
    List {
        /// Show at most N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show totals and balance
    Summary,

    /// Delete a ledger entry
    #[command(alias = "rm")]
    Delete {
        /// Entry ID (full, short form or prefix)
        id: String,
    },
}

/// Handle savings commands
pub fn handle_savings_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SavingsCommands,
) -> ExpenseWiseResult<()> {
    let service = SavingsService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SavingsCommands::Add { amount, note } => {
            let saving = service.deposit(amount, &note)?;
            println!(
                "Saved {} ({})",
                format_amount(amount, symbol),
                saving.id.short()
            );
        }

        SavingsCommands::Use {
            amount,
            category,
            description,
            note,
        } => {
            let (saving, expense) = service.use_savings(UseSavings {
                amount,
                category,
                description,
                note,
            })?;
            println!(
                "Used {} from savings ({}), recorded expense {} in {}",
                format_amount(amount, symbol),
                saving.id.short(),
                expense.id.short(),
                expense.category_label()
            );
        }

        SavingsCommands::List { limit } => {
            let mut savings = service.list()?;
            if let Some(limit) = limit {
                savings.truncate(limit);
            }
            print!("{}", format_saving_table(&savings, symbol));
        }

        SavingsCommands::Summary => {
            let summary = service.summary()?;
            print!(
                "{}",
                format_savings_summary(&summary, settings.savings_goal, symbol)
            );
        }

        SavingsCommands::Delete { id } => {
            let saving = service.delete(&id)?;
            println!("Deleted savings entry {}", saving.id.short());
        }
    }

    Ok(())
}
