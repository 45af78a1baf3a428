//! Settings service
//!
//! Validates and persists changes to the finance parameters and
//! preferences, recording a field diff in the audit log.

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::storage::Storage;

/// Requested changes; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    pub monthly_income: Option<f64>,
    pub monthly_budget: Option<f64>,
    pub savings_goal: Option<f64>,
    pub currency_symbol: Option<String>,
    pub budget_alert: Option<bool>,
    pub large_expense: Option<bool>,
    pub monthly_email: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Service for settings changes
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Apply an update to `settings`, persist and audit it
    ///
    /// Returns `false` when nothing changed. Nothing is applied if any field
    /// fails validation.
    pub fn update(&self, settings: &mut Settings, update: SettingsUpdate) -> ExpenseWiseResult<bool> {
        let before = settings.clone();
        let mut after = settings.clone();

        if let Some(income) = update.monthly_income {
            after.monthly_income = non_negative("monthly income", income)?;
        }
        if let Some(budget) = update.monthly_budget {
            after.monthly_budget = non_negative("monthly budget", budget)?;
        }
        if let Some(goal) = update.savings_goal {
            after.savings_goal = non_negative("savings goal", goal)?;
        }
        if let Some(symbol) = update.currency_symbol {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(ExpenseWiseError::Validation(
                    "currency symbol cannot be empty".into(),
                ));
            }
            after.currency_symbol = symbol.to_string();
        }
        if let Some(flag) = update.budget_alert {
            after.notifications.budget_alert = flag;
        }
        if let Some(flag) = update.large_expense {
            after.notifications.large_expense = flag;
        }
        if let Some(flag) = update.monthly_email {
            after.notifications.monthly_email = flag;
        }

        if after == before {
            return Ok(false);
        }

        after.save(self.storage.paths())?;
        self.storage
            .log_update(EntityType::Settings, "settings", None, &before, &after)?;

        *settings = after;
        Ok(true)
    }
}

fn non_negative(field: &str, value: f64) -> ExpenseWiseResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ExpenseWiseError::Validation(format!(
            "{} must be a non-negative number",
            field
        )))
    }
}
