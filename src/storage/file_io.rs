//! File I/O utilities with atomic writes and lenient record loading
//!
//! Record files may have been written by other clients (or by hand), so
//! loading tolerates malformed entries: anything that isn't a usable record
//! object is skipped and counted rather than failing the whole file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::ExpenseWiseError;

/// Records read from a collection file, plus how many entries were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecords<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for LoadedRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

/// Read a record collection leniently
///
/// Accepts either `{"<collection>": [...]}` or a bare `[...]`. A missing
/// file yields an empty collection. Entries that are not JSON objects or
/// don't deserialize are skipped with a warning. A file that isn't JSON, or
/// whose top level has the wrong shape, is an error.
pub fn read_records<T, P>(path: P, collection: &str) -> Result<LoadedRecords<T>, ExpenseWiseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(LoadedRecords::default());
    }

    let file = File::open(path).map_err(|e| {
        ExpenseWiseError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let root: Value = serde_json::from_reader(reader).map_err(|e| {
        ExpenseWiseError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    let entries = match root {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(collection) {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => Vec::new(),
            Some(_) => {
                return Err(ExpenseWiseError::Storage(format!(
                    "Expected '{}' to be an array in {}",
                    collection,
                    path.display()
                )))
            }
        },
        _ => {
            return Err(ExpenseWiseError::Storage(format!(
                "Unexpected top-level JSON in {}",
                path.display()
            )))
        }
    };

    let mut loaded = LoadedRecords::default();
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            tracing::warn!(file = %path.display(), index, "skipping non-object {} entry", collection);
            loaded.skipped += 1;
            continue;
        }

        match serde_json::from_value::<T>(entry) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                tracing::warn!(file = %path.display(), index, error = %e, "skipping malformed {} entry", collection);
                loaded.skipped += 1;
            }
        }
    }

    tracing::debug!(
        file = %path.display(),
        loaded = loaded.records.len(),
        skipped = loaded.skipped,
        "loaded {}",
        collection
    );

    Ok(loaded)
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseWiseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseWiseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseWiseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExpenseWiseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseWiseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseWiseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseWiseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Check if a JSON file exists and is valid
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if !path.exists() {
        return false;
    }

    if let Ok(file) = File::open(path) {
        let reader = BufReader::new(file);
        serde_json::from_reader::<_, Value>(reader).is_ok()
    } else {
        false
    }
}
