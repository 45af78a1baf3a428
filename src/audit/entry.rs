//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of change recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// What kind of record changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Saving,
    Settings,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Saving => write!(f, "Saving"),
            EntityType::Settings => write!(f, "Settings"),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Raw ID of the record, or "settings"
    pub entity_id: String,

    /// Short label, e.g. "Food $12.50"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Field-level change summary for updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            label,
            before: None,
            after: None,
            changes: None,
        }
    }

    /// Entry for a newly created record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        record: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(record).ok(),
            ..Self::new(Operation::Create, entity_type, entity_id, label)
        }
    }

    /// Entry for a changed record, with a change summary when anything differs
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let changes = match (&before, &after) {
            (Some(b), Some(a)) => super::diff::summarize_changes(b, a),
            _ => None,
        };

        Self {
            before,
            after,
            changes,
            ..Self::new(Operation::Update, entity_type, entity_id, label)
        }
    }

    /// Entry for a removed record
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        label: Option<String>,
        record: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(record).ok(),
            ..Self::new(Operation::Delete, entity_type, entity_id, label)
        }
    }

    /// One or two lines for terminal output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(label) = &self.label {
            output.push_str(&format!(" ({})", label));
        }

        if let Some(changes) = &self.changes {
            output.push_str(&format!("\n  Changes: {}", changes));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_entry() {
        let record = json!({"amount": 12.5, "category": "Food"});
        let entry = AuditEntry::create(
            EntityType::Expense,
            "1234abcd",
            Some("Food $12.50".to_string()),
            &record,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(record));
        assert!(entry.changes.is_none());
    }

    #[test]
    fn test_update_entry_summarizes_changes() {
        let before = json!({"monthlyBudget": 1000.0, "currencySymbol": "$"});
        let after = json!({"monthlyBudget": 1200.0, "currencySymbol": "$"});

        let entry = AuditEntry::update(EntityType::Settings, "settings", None, &before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.changes.as_deref(), Some("monthlyBudget: 1000.0 -> 1200.0"));
    }

    #[test]
    fn test_delete_entry() {
        let record = json!({"amount": -20});
        let entry = AuditEntry::delete(EntityType::Saving, "sav1", None, &record);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let entry = AuditEntry::create(EntityType::Expense, "e1", None, &json!({}));
        let line = serde_json::to_string(&entry).unwrap();

        assert!(line.contains(r#""operation":"create""#));
        assert!(line.contains(r#""entity_type":"expense""#));
        assert!(!line.contains("label"));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Settings,
            "settings",
            None,
            &json!({"savingsGoal": 0}),
            &json!({"savingsGoal": 500}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Settings settings"));
        assert!(formatted.contains("Changes: savingsGoal: 0 -> 500"));
    }
}
