//! Path management for ExpenseWise
//!
//! Resolves where settings, record files and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSEWISE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/expensewise` on Linux,
//!    `~/Library/Application Support/expensewise` on macOS,
//!    `%APPDATA%\expensewise` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::ExpenseWiseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSEWISE_DATA_DIR";

/// Manages all paths used by ExpenseWise
#[derive(Debug, Clone)]
pub struct ExpenseWisePaths {
    /// Base directory for all ExpenseWise data
    base_dir: PathBuf,
}

impl ExpenseWisePaths {
    /// Create a new ExpenseWisePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform config
    /// directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseWiseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpenseWisePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to savings.json
    pub fn savings_file(&self) -> PathBuf {
        self.data_dir().join("savings.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseWiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseWiseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseWiseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if ExpenseWise has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseWiseError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        ExpenseWiseError::Config(format!(
            "Could not determine a config directory; set {} instead",
            DATA_DIR_ENV
        ))
    })?;
    Ok(dirs.config_dir().join("expensewise"))
}
