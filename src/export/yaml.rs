//! YAML export of the complete data set

use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Write the full export as YAML with a short header comment
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> ExpenseWiseResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    let header = format!(
        "# ExpenseWise export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ExpenseWiseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}
