//! User settings for ExpenseWise
//!
//! Holds the scalar finance parameters (monthly income, monthly budget,
//! savings goal) together with display and notification preferences.

use serde::{Deserialize, Serialize};

use super::paths::ExpenseWisePaths;
use crate::error::ExpenseWiseError;
use crate::models::FinanceParameters;

/// Notification toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Warn when spending crosses into the red zone
    #[serde(default)]
    pub budget_alert: bool,

    /// Warn on unusually large single expenses
    #[serde(default)]
    pub large_expense: bool,

    /// Monthly summary email opt-in
    #[serde(default)]
    pub monthly_email: bool,
}

/// User settings for ExpenseWise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Expected income per month
    #[serde(default)]
    pub monthly_income: f64,

    /// Spending budget per month
    #[serde(default)]
    pub monthly_budget: f64,

    /// Target savings balance
    #[serde(default)]
    pub savings_goal: f64,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Notification preferences
    #[serde(default)]
    pub notifications: NotificationSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_income: 0.0,
            monthly_budget: 0.0,
            savings_goal: 0.0,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl Settings {
    /// The scalar inputs the finance aggregator needs
    pub fn finance_parameters(&self) -> FinanceParameters {
        FinanceParameters {
            monthly_income: self.monthly_income,
            monthly_budget: self.monthly_budget,
            savings_goal: self.savings_goal,
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpenseWisePaths) -> Result<Self, ExpenseWiseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseWiseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseWiseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpenseWisePaths) -> Result<(), ExpenseWiseError> {
        paths.ensure_directories()?;
        crate::storage::file_io::write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.monthly_budget, 0.0);
        assert_eq!(settings.currency_symbol, "$");
        assert!(!settings.notifications.budget_alert);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.monthly_income = 4200.0;
        settings.monthly_budget = 2500.0;
        settings.notifications.large_expense = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"monthly_budget": 900}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_budget, 900.0);
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_finance_parameters() {
        let settings = Settings {
            monthly_income: 1000.0,
            monthly_budget: 600.0,
            savings_goal: 5000.0,
            ..Settings::default()
        };
        let params = settings.finance_parameters();
        assert_eq!(params.monthly_income, 1000.0);
        assert_eq!(params.monthly_budget, 600.0);
        assert_eq!(params.savings_goal, 5000.0);
    }
}
