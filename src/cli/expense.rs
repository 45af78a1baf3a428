//! CLI commands for expenses

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::display::report::format_amount;
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::models::FinanceRecord;
use crate::services::{ExpenseService, ExpenseUpdate, NewExpense, SavingsService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount spent
        amount: f64,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(long = "desc", default_value = "")]
        description: String,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Show at most N expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense
    Show {
        /// Expense ID (full, short form or prefix)
        id: String,
    },

    /// Change fields of an expense
    Edit {
        /// Expense ID (full, short form or prefix)
        id: String,
        /// New amount
        #[arg(long)]
        amount: Option<f64>,
        /// New category label
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Move part or all of an expense back into savings
    Recover {
        /// Expense ID (full, short form or prefix)
        id: String,
        /// Amount to recover, at most the expense amount
        amount: f64,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full, short form or prefix)
        id: String,
    },
}

/// Handle expense commands
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseWiseResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let expense = service.add(NewExpense {
                amount,
                category,
                date,
                description,
            })?;

            println!(
                "Added expense {}: {} in {}",
                expense.id.short(),
                format_amount(expense.amount_value(), symbol),
                expense.category_label()
            );
        }

        ExpenseCommands::List { limit } => {
            let mut expenses = service.list()?;
            let total = expenses.len();
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            print!("{}", format_expense_table(&expenses, symbol));
            if expenses.len() < total {
                println!("Showing {} of {} expenses.", expenses.len(), total);
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service
                .find(&id)?
                .ok_or_else(|| ExpenseWiseError::expense_not_found(&id))?;
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let expense = service.update(
                &id,
                ExpenseUpdate {
                    amount,
                    category,
                    date,
                    description,
                },
            )?;
            println!(
                "Updated expense {}: {} in {}",
                expense.id.short(),
                format_amount(expense.amount_value(), symbol),
                expense.category_label()
            );
        }

        ExpenseCommands::Recover { id, amount } => {
            let recovery = SavingsService::new(storage).recover_from_expense(&id, amount)?;
            match recovery.expense {
                Some(expense) => println!(
                    "Recovered {} into savings; expense {} is now {}",
                    format_amount(amount, symbol),
                    expense.id.short(),
                    format_amount(expense.amount_value(), symbol)
                ),
                None => println!(
                    "Recovered {} into savings; expense removed",
                    format_amount(amount, symbol)
                ),
            }
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!(
                "Deleted expense {} ({} in {})",
                expense.id.short(),
                format_amount(expense.amount_value(), symbol),
                expense.category_label()
            );
        }
    }

    Ok(())
}
