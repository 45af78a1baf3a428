//! Generic repository for record collections
//!
//! Expenses and savings are both flat lists of loosely-shaped records kept
//! in one JSON file each. This repository holds a collection in memory,
//! preserving file order, and writes it back atomically.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::error::ExpenseWiseError;
use crate::models::FinanceRecord;

use super::file_io::{read_records, write_json_atomic};

/// A record type that can live in a collection file
pub trait StoredRecord: FinanceRecord + Clone + Serialize + DeserializeOwned {
    /// Key of the array inside the collection file
    const COLLECTION: &'static str;

    /// Entity name used in errors and log lines
    const ENTITY: &'static str;

    /// Raw identifier
    fn record_id(&self) -> &str;

    /// Whether user input refers to this record
    fn matches_id(&self, input: &str) -> bool;
}

/// Repository for one collection file
pub struct RecordRepository<T: StoredRecord> {
    path: PathBuf,
    records: RwLock<Vec<T>>,
    skipped: RwLock<usize>,
}

impl<T: StoredRecord> RecordRepository<T> {
    /// Create a new repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
            skipped: RwLock::new(0),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load records from disk, replacing what is in memory
    pub fn load(&self) -> Result<(), ExpenseWiseError> {
        let loaded = read_records::<T, _>(&self.path, T::COLLECTION)?;

        if loaded.skipped > 0 {
            tracing::warn!(
                skipped = loaded.skipped,
                "ignored {} unreadable {} record(s) in {}",
                loaded.skipped,
                T::ENTITY,
                self.path.display()
            );
        }

        *self.write_records()? = loaded.records;
        *self
            .skipped
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))? =
            loaded.skipped;

        Ok(())
    }

    /// Save records to disk as `{"<collection>": [...]}`
    pub fn save(&self) -> Result<(), ExpenseWiseError> {
        let records = self.read_records()?;

        let items = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        let mut root = Map::new();
        root.insert(T::COLLECTION.to_string(), Value::Array(items));

        write_json_atomic(&self.path, &Value::Object(root))
    }

    /// Number of entries skipped during the last load
    pub fn skipped(&self) -> Result<usize, ExpenseWiseError> {
        self.skipped
            .read()
            .map(|s| *s)
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    /// All records in storage order
    pub fn get_all(&self) -> Result<Vec<T>, ExpenseWiseError> {
        Ok(self.read_records()?.clone())
    }

    /// All records, newest date first; undated or unparseable dates last
    pub fn list(&self) -> Result<Vec<T>, ExpenseWiseError> {
        let mut records = self.get_all()?;
        records.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
        Ok(records)
    }

    /// Find a record by full ID, short form, or unambiguous prefix
    pub fn find(&self, input: &str) -> Result<Option<T>, ExpenseWiseError> {
        let records = self.read_records()?;

        if let Some(exact) = records.iter().find(|r| r.record_id() == input.trim()) {
            return Ok(Some(exact.clone()));
        }

        let mut matches = records.iter().filter(|r| r.matches_id(input));
        let first = matches.next();
        if matches.next().is_some() {
            return Err(ExpenseWiseError::Validation(format!(
                "'{}' matches more than one {}; use a longer ID",
                input,
                T::ENTITY
            )));
        }

        Ok(first.cloned())
    }

    /// Append a record
    pub fn insert(&self, record: T) -> Result<(), ExpenseWiseError> {
        self.write_records()?.push(record);
        Ok(())
    }

    /// Replace the record with the same raw ID in place, or append it
    pub fn upsert(&self, record: T) -> Result<(), ExpenseWiseError> {
        let mut records = self.write_records()?;
        match records.iter().position(|r| r.record_id() == record.record_id()) {
            Some(index) => records[index] = record,
            None => records.push(record),
        }
        Ok(())
    }

    /// Remove the record with the given raw ID
    pub fn delete(&self, id: &str) -> Result<bool, ExpenseWiseError> {
        let mut records = self.write_records()?;
        let before = records.len();
        records.retain(|r| r.record_id() != id);
        Ok(records.len() != before)
    }

    /// Count records
    pub fn count(&self) -> Result<usize, ExpenseWiseError> {
        Ok(self.read_records()?.len())
    }

    fn read_records(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<T>>, ExpenseWiseError> {
        self.records
            .read()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_records(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<T>>, ExpenseWiseError> {
        self.records
            .write()
            .map_err(|e| ExpenseWiseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
