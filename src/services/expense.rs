//! Expense service
//!
//! Entry-time validation, storage and audit logging for expenses.

use chrono::Local;

use crate::audit::EntityType;
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::models::{ExpenseRecord, FinanceRecord, RawAmount};
use crate::storage::Storage;

/// User input for a new expense
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    /// ISO date; today when absent
    pub date: Option<String>,
    pub description: String,
}

/// Partial edit of an existing expense; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.description.is_none()
    }
}

/// Today's local date as `YYYY-MM-DD`
pub(crate) fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Audit label for an expense
pub(crate) fn expense_label(expense: &ExpenseRecord) -> String {
    format!("{} {:.2}", expense.category_label(), expense.amount_value())
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate, store and audit a new expense
    pub fn add(&self, input: NewExpense) -> ExpenseWiseResult<ExpenseRecord> {
        let date = input
            .date
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(today_string);

        let expense = ExpenseRecord::new(input.amount, input.category.trim(), date)
            .with_description(input.description.trim());

        expense
            .validate()
            .map_err(|e| ExpenseWiseError::Validation(e.to_string()))?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.as_str(),
            Some(expense_label(&expense)),
            &expense,
        )?;

        tracing::info!(id = %expense.id, "expense added");
        Ok(expense)
    }

    /// Apply a partial edit to an expense
    ///
    /// The merged record is validated as a whole, so an edit that only
    /// touches the description still fails on a stored record whose date
    /// never parsed.
    pub fn update(&self, id: &str, changes: ExpenseUpdate) -> ExpenseWiseResult<ExpenseRecord> {
        if changes.is_empty() {
            return Err(ExpenseWiseError::Validation(
                "No valid fields to update".to_string(),
            ));
        }

        let before = self
            .find(id)?
            .ok_or_else(|| ExpenseWiseError::expense_not_found(id))?;
        let mut expense = before.clone();

        if let Some(amount) = changes.amount {
            expense.amount = RawAmount::from(amount);
        }
        if let Some(category) = changes.category {
            expense.category = Some(category.trim().to_string());
        }
        if let Some(date) = changes.date {
            expense.date = Some(date.trim().to_string());
        }
        if let Some(description) = changes.description {
            expense.description = description.trim().to_string();
        }

        expense
            .validate()
            .map_err(|e| ExpenseWiseError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.as_str(),
            Some(expense_label(&expense)),
            &before,
            &expense,
        )?;

        tracing::info!(id = %expense.id, "expense updated");
        Ok(expense)
    }

    /// All expenses, newest first
    pub fn list(&self) -> ExpenseWiseResult<Vec<ExpenseRecord>> {
        self.storage.expenses.list()
    }

    /// Look up an expense by full ID, short form or prefix
    pub fn find(&self, id: &str) -> ExpenseWiseResult<Option<ExpenseRecord>> {
        self.storage.expenses.find(id)
    }

    /// Delete an expense and return it
    pub fn delete(&self, id: &str) -> ExpenseWiseResult<ExpenseRecord> {
        let expense = self
            .find(id)?
            .ok_or_else(|| ExpenseWiseError::expense_not_found(id))?;

        self.storage.expenses.delete(expense.id.as_str())?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.as_str(),
            Some(expense_label(&expense)),
            &expense,
        )?;

        Ok(expense)
    }
}
