//! First-run setup of the data directory

use crate::config::paths::ExpenseWisePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseWiseError;
use crate::models::{ExpenseRecord, SavingRecord};

use super::records::RecordRepository;

/// Create directories, empty collection files and default settings
///
/// Existing files are left alone, so running it twice is harmless. Returns
/// the settings now on disk.
pub fn initialize_storage(paths: &ExpenseWisePaths) -> Result<Settings, ExpenseWiseError> {
    paths.ensure_directories()?;

    if !paths.expenses_file().exists() {
        RecordRepository::<ExpenseRecord>::new(paths.expenses_file()).save()?;
    }

    if !paths.savings_file().exists() {
        RecordRepository::<SavingRecord>::new(paths.savings_file()).save()?;
    }

    let settings = Settings::load_or_create(paths)?;
    if !paths.settings_file().exists() {
        settings.save(paths)?;
        tracing::info!(dir = %paths.base_dir().display(), "initialized data directory");
    }

    Ok(settings)
}
