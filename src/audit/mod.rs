//! Append-only audit trail of record changes
//!
//! Every expense, savings entry and settings change made through the
//! services is recorded as one JSON line in `audit.log`, with the record as
//! it looked before and after. The `audit` command reads it back.

mod diff;
mod entry;
mod logger;

pub use diff::summarize_changes;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
