//! Text output for records, kinds and notifications.

use anyhow::Result;
use menagerie_sync::{Notification, Severity};
use menagerie_types::{Record, ResourceKind};
use serde_json::Value;

/// One line per record: id, name, then the remaining fields as `key=value`.
pub fn record_line(record: &Record) -> String {
    let mut line = format!("{}  {}", record.id(), record.name());
    if let Ok(Value::Object(fields)) = serde_json::to_value(record) {
        for (key, value) in fields {
            if key == "id" || key == "name" {
                continue;
            }
            match value {
                Value::String(s) => line.push_str(&format!("  {key}={s}")),
                other => line.push_str(&format!("  {key}={other}")),
            }
        }
    }
    line
}

pub fn record_json(record: &Record) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

pub fn kind_line(kind: ResourceKind) -> String {
    format!(
        "{:<16} /{:<16} required: {}",
        kind.label(),
        kind.path_segment(),
        kind.required_fields().join(", ")
    )
}

pub fn notification_line(notification: &Notification) -> String {
    let tag = match notification.severity {
        Severity::Success => "ok",
        Severity::Error => "error",
    };
    format!("[{tag}] {}", notification.text)
}
