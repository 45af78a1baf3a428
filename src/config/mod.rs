//! Configuration module for ExpenseWise
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence (income, budget, savings goal)

pub mod paths;
pub mod settings;

pub use paths::ExpenseWisePaths;
pub use settings::{NotificationSettings, Settings};
