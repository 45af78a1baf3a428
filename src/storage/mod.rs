//! Record store for ExpenseWise
//!
//! Expenses and savings live in one JSON file each under `data/`, loaded
//! leniently and written back atomically. Every change made through the
//! services is also appended to the audit log.

pub mod expenses;
pub mod file_io;
pub mod init;
pub mod records;
pub mod savings;

pub use expenses::ExpenseRepository;
pub use file_io::{json_file_valid, read_records, write_json_atomic, LoadedRecords};
pub use init::initialize_storage;
pub use records::{RecordRepository, StoredRecord};
pub use savings::SavingRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpenseWisePaths;
use crate::error::ExpenseWiseError;

/// Access to both record collections and the audit log
pub struct Storage {
    paths: ExpenseWisePaths,
    pub expenses: ExpenseRepository,
    pub savings: SavingRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a storage handle, creating directories as needed
    pub fn new(paths: ExpenseWisePaths) -> Result<Self, ExpenseWiseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            savings: SavingRepository::new(paths.savings_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &ExpenseWisePaths {
        &self.paths
    }

    /// Load both collections from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseWiseError> {
        self.expenses.load()?;
        self.savings.load()?;
        Ok(())
    }

    /// Save both collections to disk
    pub fn save_all(&self) -> Result<(), ExpenseWiseError> {
        self.expenses.save()?;
        self.savings.save()?;
        Ok(())
    }

    /// True once `init` has written the settings file
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        record: &T,
    ) -> Result<(), ExpenseWiseError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, label, record))
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), ExpenseWiseError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            label,
            before,
            after,
        ))
    }

    /// Record a deletion in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        record: &T,
    ) -> Result<(), ExpenseWiseError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, label, record))
    }
}
