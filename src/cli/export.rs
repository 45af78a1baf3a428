//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::export::{export_full_json, export_full_yaml, export_records_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Expenses and savings entries as one CSV sheet
    Csv,
    /// Settings and all records as JSON
    Json,
    /// Settings and all records as YAML
    Yaml,
}

/// Arguments for `expensewise export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> ExpenseWiseResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        ExpenseWiseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_records_csv(storage, &mut writer)?,
        ExportFormat::Json => export_full_json(storage, settings, &mut writer, !args.compact)?,
        ExportFormat::Yaml => export_full_yaml(storage, settings, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseWiseError::Export(e.to_string()))?;

    println!(
        "Exported {} expenses and {} savings entries to {}",
        storage.expenses.count()?,
        storage.savings.count()?,
        args.output.display()
    );

    Ok(())
}
