//! Upgrade of stored snapshots to the current schema.
//!
//! The persistence layer runs this once at load time; the analytics
//! functions only ever see an up-to-date [`Snapshot`].

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::errors::CoreError;

use super::snapshot::{Snapshot, CURRENT_SCHEMA_VERSION};

/// Upgrades a stored snapshot value to the current schema and
/// deserializes it.
///
/// Missing optional fields are backfilled with defaults by serde. The v0
/// shape carried an `is_magic_wand` boolean on every goal; it is folded
/// into the single `priority_goal` reference, first flagged goal winning.
pub fn upgrade(mut value: Value) -> Result<Snapshot, CoreError> {
    let version = value
        .get("schema_version")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    if version > u64::from(CURRENT_SCHEMA_VERSION) {
        return Err(CoreError::UnsupportedSchema(version));
    }

    if version == 0 {
        debug!("upgrading stored snapshot from schema v0");
        fold_magic_wand_flags(&mut value);
    }

    if let Some(root) = value.as_object_mut() {
        root.insert(
            "schema_version".into(),
            Value::from(CURRENT_SCHEMA_VERSION),
        );
    }

    let snapshot: Snapshot = serde_json::from_value(value)?;
    Ok(snapshot)
}

/// Reads and upgrades a stored snapshot file.
pub fn load_from_path(path: &Path) -> Result<Snapshot, CoreError> {
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    upgrade(value)
}

fn fold_magic_wand_flags(value: &mut Value) {
    let mut priority: Option<Value> = None;
    if let Some(goals) = value.get_mut("goals").and_then(Value::as_array_mut) {
        for goal in goals.iter_mut() {
            if let Some(fields) = goal.as_object_mut() {
                let flagged = fields
                    .remove("is_magic_wand")
                    .and_then(|flag| flag.as_bool())
                    .unwrap_or(false);
                if flagged && priority.is_none() {
                    priority = fields.get("id").cloned();
                }
            }
        }
    }
    if let (Some(root), Some(id)) = (value.as_object_mut(), priority) {
        root.insert("priority_goal".into(), id);
    }
}
