use super::store::Store;
use crate::domain::AppData;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// One-time migration from the legacy `todos.json` schema
/// (`{current, history, timerHistory}`) to the modern record.
///
/// Runs at startup. A legacy record is migrated only when no modern record
/// exists yet; an existing tasks.json is never overwritten. Failure to read
/// or parse the legacy file is logged and the migration skipped - the next
/// load simply default-initializes.
pub fn migrate_legacy(store: &Store) {
    if let Err(e) = try_migrate(store) {
        eprintln!("Warning: legacy storage migration failed: {e}");
    }
}

fn try_migrate(store: &Store) -> Result<()> {
    let legacy_path = store.legacy_path();
    if store.state_path().exists() || !legacy_path.exists() {
        return Ok(());
    }

    let content = std::fs::read_to_string(&legacy_path)
        .with_context(|| format!("Failed to read {}", legacy_path.display()))?;
    let legacy: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", legacy_path.display()))?;

    // Each legacy field maps independently; a missing or malformed field
    // degrades to the empty container of the right shape.
    let migrated = AppData {
        active: field_or_default(&legacy, "current"),
        completed: field_or_default(&legacy, "history"),
        time_records: field_or_default(&legacy, "timerHistory"),
    };

    store.save(&migrated)
}

fn field_or_default<T: DeserializeOwned + Default>(value: &serde_json::Value, field: &str) -> T {
    value
        .get(field)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}
