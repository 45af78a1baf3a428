//! Field-level change summaries for audit entries

use serde_json::Value;

/// Describe what changed between two JSON values
///
/// Nested objects are walked and reported with dotted paths
/// (`notifications.budgetAlert: false -> true`). Returns `None` when the
/// values are equal.
pub fn summarize_changes(before: &Value, after: &Value) -> Option<String> {
    let mut changes = Vec::new();
    collect_changes(before, after, "", &mut changes);

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(before: &Value, after: &Value, path: &str, out: &mut Vec<String>) {
    match (before, after) {
        (Value::Object(b), Value::Object(a)) => {
            for (key, old) in b {
                let field = join_path(path, key);
                match a.get(key) {
                    Some(new) => collect_changes(old, new, &field, out),
                    None => out.push(format!("{}: {} -> (removed)", field, render(old))),
                }
            }
            for (key, new) in a {
                if !b.contains_key(key) {
                    out.push(format!("{}: (added) -> {}", join_path(path, key), render(new)));
                }
            }
        }
        _ if before != after => {
            if path.is_empty() {
                out.push(format!("{} -> {}", render(before), render(after)));
            } else {
                out.push(format!("{}: {} -> {}", path, render(before), render(after)));
            }
        }
        _ => {}
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 40 => {
            let head: String = s.chars().take(37).collect();
            format!("\"{}...\"", head)
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}
