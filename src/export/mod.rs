//! Data export
//!
//! - CSV: expenses and savings entries in one spreadsheet-friendly sheet
//! - JSON: machine-readable snapshot of settings and all records
//! - YAML: the same snapshot in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_records_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
