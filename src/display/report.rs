//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the dashboard and trend reports.

use crate::reports::BudgetZone;

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount.abs())
    }
}

/// Format an amount with color hints for terminal display
pub fn format_amount_colored(amount: f64, symbol: &str) -> String {
    let text = format_amount(amount, symbol);
    if amount < 0.0 {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount > 0.0 {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// ANSI color escape for a budget zone
pub fn zone_color(zone: BudgetZone) -> &'static str {
    match zone {
        BudgetZone::Green => "\x1b[32m",
        BudgetZone::Yellow => "\x1b[33m",
        BudgetZone::Red => "\x1b[31m",
    }
}

/// Wrap text in the color of a budget zone
pub fn paint_zone(text: &str, zone: BudgetZone) -> String {
    format!("{}{}\x1b[0m", zone_color(zone), text)
}

/// Format a percentage to one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
