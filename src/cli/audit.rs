//! CLI command for reading the audit log

use clap::Args;

use crate::error::ExpenseWiseResult;
use crate::storage::Storage;

/// Arguments for `expensewise audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of most recent entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Print recent audit entries, newest last
pub fn handle_audit_command(storage: &Storage, args: AuditArgs) -> ExpenseWiseResult<()> {
    let entries = storage.audit().read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
