//! Record date parsing
//!
//! Record dates are stored as ISO 8601 strings of a few shapes. The calendar
//! date is taken as written; no local-timezone conversion happens.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a record date, or `None` when it isn't a recognizable ISO date
///
/// Accepted forms:
/// - `2025-01-15`
/// - `2025-01-15T10:30:00Z`, `2025-01-15T10:30:00+02:00` (RFC 3339)
/// - `2025-01-15T10:30:00`, `2025-01-15T10:30:00.123456` (no offset)
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.date())
        .ok()
}
