//! Savings service
//!
//! Deposits and withdrawals on the savings ledger. Spending from savings
//! also records the matching expense so it shows up in spending totals.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{ExpenseWiseError, ExpenseWiseResult};
use crate::models::{ExpenseRecord, FinanceRecord, RawAmount, SavingRecord};
use crate::reports::{savings_summary, SavingsSummary};
use crate::storage::Storage;

use super::expense::{expense_label, today_string};

/// Category used when spending from savings without one
pub const DEFAULT_USE_CATEGORY: &str = "Misc";

/// Ledger note for money moved back from an expense
pub const RECOVERY_NOTE: &str = "Recovered from expense";

/// Result of moving part of an expense back into savings
#[derive(Debug, Clone)]
pub struct Recovery {
    /// The new savings deposit
    pub saving: SavingRecord,
    /// The reduced expense, or `None` when it was recovered in full and removed
    pub expense: Option<ExpenseRecord>,
}

/// Input for spending from savings
#[derive(Debug, Clone, Default)]
pub struct UseSavings {
    pub amount: f64,
    pub category: Option<String>,
    pub description: String,
    pub note: Option<String>,
}

/// Service for the savings ledger
pub struct SavingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SavingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add money to savings
    pub fn deposit(&self, amount: f64, note: &str) -> ExpenseWiseResult<SavingRecord> {
        check_positive(amount)?;

        let saving = SavingRecord::new(amount, today_string()).with_note(note.trim());

        self.storage.savings.insert(saving.clone())?;
        self.storage.savings.save()?;
        self.storage.log_create(
            EntityType::Saving,
            saving.id.as_str(),
            Some(format!("deposit {:.2}", amount)),
            &saving,
        )?;

        Ok(saving)
    }

    /// Spend from savings
    ///
    /// Records a negative ledger entry and an expense flagged as paid from
    /// savings. Overdrawing is allowed but logged.
    pub fn use_savings(&self, input: UseSavings) -> ExpenseWiseResult<(SavingRecord, ExpenseRecord)> {
        check_positive(input.amount)?;

        let category = input
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_USE_CATEGORY)
            .to_string();
        let note = input
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Spent from savings")
            .to_string();

        let balance = self.summary()?.balance;
        if input.amount > balance {
            tracing::warn!(balance, amount = input.amount, "savings use exceeds balance");
        }

        let today = today_string();
        let saving = SavingRecord::new(-input.amount, today.clone()).with_note(note);
        let expense = ExpenseRecord::new(input.amount, category, today)
            .with_description(input.description.trim())
            .mark_paid_from_savings();

        self.storage.savings.insert(saving.clone())?;
        self.storage.expenses.insert(expense.clone())?;
        self.storage.save_all()?;

        self.storage.audit().log_batch(&[
            AuditEntry::create(
                EntityType::Saving,
                saving.id.as_str(),
                Some(format!("use {:.2}", input.amount)),
                &saving,
            ),
            AuditEntry::create(
                EntityType::Expense,
                expense.id.as_str(),
                Some(expense_label(&expense)),
                &expense,
            ),
        ])?;

        Ok((saving, expense))
    }

    /// Move part or all of an expense back into savings
    ///
    /// The amount must be positive and no larger than the expense. The
    /// expense is reduced by that amount, or removed once nothing is left,
    /// and a deposit dated today is added to the ledger.
    pub fn recover_from_expense(
        &self,
        expense_id: &str,
        amount: f64,
    ) -> ExpenseWiseResult<Recovery> {
        check_positive(amount)?;

        let before = self
            .storage
            .expenses
            .find(expense_id)?
            .ok_or_else(|| ExpenseWiseError::expense_not_found(expense_id))?;

        let current = before.amount_value();
        if amount > current {
            return Err(ExpenseWiseError::Validation(format!(
                "cannot recover {:.2} from an expense of {:.2}",
                amount, current
            )));
        }

        let remaining = current - amount;
        let saving = SavingRecord::new(amount, today_string()).with_note(RECOVERY_NOTE);

        let (expense, expense_entry) = if remaining > 0.0 {
            let mut reduced = before.clone();
            reduced.amount = RawAmount::from(remaining);
            self.storage.expenses.upsert(reduced.clone())?;
            let entry = AuditEntry::update(
                EntityType::Expense,
                reduced.id.as_str(),
                Some(expense_label(&reduced)),
                &before,
                &reduced,
            );
            (Some(reduced), entry)
        } else {
            self.storage.expenses.delete(before.id.as_str())?;
            let entry = AuditEntry::delete(
                EntityType::Expense,
                before.id.as_str(),
                Some(expense_label(&before)),
                &before,
            );
            (None, entry)
        };

        self.storage.savings.insert(saving.clone())?;
        self.storage.save_all()?;

        self.storage.audit().log_batch(&[
            expense_entry,
            AuditEntry::create(
                EntityType::Saving,
                saving.id.as_str(),
                Some(format!("recover {:.2}", amount)),
                &saving,
            ),
        ])?;

        tracing::info!(expense = %before.id, amount, "recovered into savings");
        Ok(Recovery { saving, expense })
    }

    /// All ledger entries, newest first
    pub fn list(&self) -> ExpenseWiseResult<Vec<SavingRecord>> {
        self.storage.savings.list()
    }

    /// Totals added, used and the balance
    pub fn summary(&self) -> ExpenseWiseResult<SavingsSummary> {
        Ok(savings_summary(&self.storage.savings.get_all()?))
    }

    /// Delete a ledger entry and return it
    pub fn delete(&self, id: &str) -> ExpenseWiseResult<SavingRecord> {
        let saving = self
            .storage
            .savings
            .find(id)?
            .ok_or_else(|| ExpenseWiseError::saving_not_found(id))?;

        self.storage.savings.delete(saving.id.as_str())?;
        self.storage.savings.save()?;
        self.storage
            .log_delete(EntityType::Saving, saving.id.as_str(), None, &saving)?;

        Ok(saving)
    }
}

fn check_positive(amount: f64) -> ExpenseWiseResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ExpenseWiseError::Validation(
            "amount must be a positive number".into(),
        ))
    }
}
