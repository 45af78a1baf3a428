//! ExpenseWise - personal expense, budget and savings tracking
//!
//! This library provides the core of the `expensewise` command-line tool:
//! a record store for expenses and savings entries, and a pure finance
//! aggregator that turns those records plus a few monthly parameters into
//! totals, budget zones and weekday/month/category breakdowns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and path management
//! - `error`: Custom error types
//! - `models`: Expense and savings records, tolerant amount/date parsing
//! - `reports`: The finance aggregator and the dashboard report
//! - `storage`: JSON file storage layer
//! - `services`: Validation and write paths on top of storage
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expensewise::models::ExpenseRecord;
//! use expensewise::reports::{budget_percentage, budget_zone};
//!
//! let expenses = vec![ExpenseRecord::new(60.0, "Food", "2025-01-06")];
//! let pct = budget_percentage(&expenses, 100.0);
//! assert_eq!(budget_zone(pct).to_string(), "yellow");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseWiseError, ExpenseWiseResult};
