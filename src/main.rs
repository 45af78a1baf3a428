use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expensewise::cli::{
    handle_audit_command, handle_expense_command, handle_export_command, handle_report_command,
    handle_savings_command, handle_settings_command, AuditArgs, ExpenseCommands, ExportArgs,
    ReportCommands, SavingsCommands, SettingsCommands,
};
use expensewise::config::{paths::ExpenseWisePaths, settings::Settings};
use expensewise::storage::{initialize_storage, json_file_valid, Storage};

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSEWISE_LOG";

#[derive(Parser)]
#[command(
    name = "expensewise",
    version,
    about = "Track expenses, budget and savings from the terminal",
    long_about = "ExpenseWise records expenses and savings in local JSON files and \
                  reports how much of the monthly budget is spent, what is left of \
                  income, and where the money goes by weekday, month and category."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show paths and data file status
    Config,

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Savings ledger commands
    #[command(subcommand)]
    Savings(SavingsCommands),

    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all data
    Export(ExportArgs),

    /// Show recent audit log entries
    Audit(AuditArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("expensewise=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = ExpenseWisePaths::new()?;
    tracing::debug!(dir = %paths.base_dir().display(), "using data directory");

    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing ExpenseWise at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  expensewise settings set --income 3000 --budget 1500");
            println!("  expensewise expense add 12.50 -c Food");
            println!("  expensewise report dashboard");
        }
        Some(Commands::Config) => {
            let status = |path: &std::path::Path| {
                if !path.exists() {
                    "missing"
                } else if json_file_valid(path) {
                    "ok"
                } else {
                    "invalid JSON"
                }
            };

            println!("ExpenseWise Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!(
                "Settings:       {} ({})",
                paths.settings_file().display(),
                status(&paths.settings_file())
            );
            println!(
                "Expenses:       {} ({})",
                paths.expenses_file().display(),
                status(&paths.expenses_file())
            );
            println!(
                "Savings:        {} ({})",
                paths.savings_file().display(),
                status(&paths.savings_file())
            );
            println!("Audit log:      {}", paths.audit_log().display());

            let skipped = storage.expenses.skipped()? + storage.savings.skipped()?;
            if skipped > 0 {
                println!();
                println!("{} unreadable record(s) were ignored while loading.", skipped);
            }
        }
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Savings(cmd)) => handle_savings_command(&storage, &settings, cmd)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&storage, &mut settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        Some(Commands::Audit(args)) => handle_audit_command(&storage, args)?,
        None => {
            println!("ExpenseWise - expenses, budget and savings from the terminal");
            println!();
            println!("Run 'expensewise --help' for usage information.");
            if !storage.is_initialized() {
                println!("Run 'expensewise init' to get started.");
            }
        }
    }

    Ok(())
}
