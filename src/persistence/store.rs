use super::files::{atomic_write, ensure_tally_dir, read_file};
use crate::domain::{generate_id, AppData};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Modern state file inside the tally directory.
const STATE_FILE: &str = "tasks.json";
/// Legacy state file (read once, migrated, never written again).
const LEGACY_FILE: &str = "todos.json";
/// Single-value theme selection file.
const THEME_FILE: &str = "theme";

/// The persisted record exists but failed to parse. This is fatal to the
/// caller: the store never silently replaces data it cannot read.
#[derive(Debug, Error)]
#[error("{path} is not valid task data: {source}")]
pub struct MalformedState {
    pub path: PathBuf,
    #[source]
    pub source: serde_json::Error,
}

/// Sole owner of the persisted record. All reads and writes of tasks.json
/// go through here; the UI never touches storage directly.
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open the store against the discovered tally directory, creating the
    /// directory if needed.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(ensure_tally_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_path(&self) -> PathBuf {
        self.root.join(STATE_FILE)
    }

    pub(crate) fn legacy_path(&self) -> PathBuf {
        self.root.join(LEGACY_FILE)
    }

    fn theme_path(&self) -> PathBuf {
        self.root.join(THEME_FILE)
    }

    /// Load the persisted record.
    ///
    /// A missing file is treated as the default empty record, which is
    /// persisted back before returning (the first load after a fresh
    /// install writes the file). A present-but-malformed file propagates a
    /// [`MalformedState`] error. Active tasks missing an id are assigned
    /// fresh ones, and the record is re-saved if any were assigned.
    pub fn load(&self) -> Result<AppData> {
        let path = self.state_path();
        if !path.exists() {
            let data = AppData::default();
            self.save(&data)?;
            return Ok(data);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut data: AppData = serde_json::from_str(&content)
            .map_err(|source| MalformedState { path, source })?;

        if backfill_ids(&mut data) > 0 {
            self.save(&data)?;
        }
        Ok(data)
    }

    /// Serialize and overwrite the entire record in one atomic write.
    pub fn save(&self, data: &AppData) -> Result<()> {
        let json =
            serde_json::to_string_pretty(data).context("Failed to serialize task data")?;
        atomic_write(self.state_path(), &json)
    }

    /// Selected theme name, if one is stored.
    pub fn load_theme(&self) -> Option<String> {
        let name = read_file(self.theme_path()).ok()?;
        let name = name.trim().to_string();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    pub fn save_theme(&self, name: &str) -> Result<()> {
        atomic_write(self.theme_path(), name)
    }

    pub fn clear_theme(&self) -> Result<()> {
        let path = self.theme_path();
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

fn backfill_ids(data: &mut AppData) -> usize {
    let mut assigned = 0;
    for task in &mut data.active {
        if task.id.is_empty() {
            task.id = generate_id();
            assigned += 1;
        }
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TimeRecord};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_first_load_persists_default() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());

        assert!(!store.state_path().exists());
        let data = store.load().unwrap();
        assert_eq!(data, AppData::default());
        // read-with-side-effect: the default is written back
        assert!(store.state_path().exists());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());

        let mut data = AppData::default();
        data.active.push(Task::new("buy milk"));
        data.active.push(Task {
            completed: true,
            note: "2%".to_string(),
            ..Task::new("return books")
        });
        data.completed
            .insert("2024-01-05_090307".to_string(), vec![Task::new("old")]);
        data.time_records
            .insert("2024-01-06".to_string(), TimeRecord::from_ms(5_000));

        store.save(&data).unwrap();
        assert_eq!(store.load().unwrap(), data);
        // loading immediately after saving changes nothing
        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(store.load().unwrap(), data);
    }

    #[test]
    fn test_malformed_state_is_fatal() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());
        std::fs::write(store.state_path(), "{not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.downcast_ref::<MalformedState>().is_some());
    }

    #[test]
    fn test_backfill_missing_ids_and_resave() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());
        std::fs::write(
            store.state_path(),
            r#"{"active":[{"text":"old","completed":false},{"id":"keep1","text":"kept","completed":true}]}"#,
        )
        .unwrap();

        let data = store.load().unwrap();
        assert!(!data.active[0].id.is_empty());
        assert_eq!(data.active[1].id, "keep1");

        // the backfilled id was written through to disk
        let on_disk = std::fs::read_to_string(store.state_path()).unwrap();
        assert!(on_disk.contains(&data.active[0].id));
    }

    #[test]
    fn test_theme_round_trip() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());

        assert_eq!(store.load_theme(), None);
        store.save_theme("midnight").unwrap();
        assert_eq!(store.load_theme(), Some("midnight".to_string()));
        store.clear_theme().unwrap();
        assert_eq!(store.load_theme(), None);
        // clearing twice is fine
        store.clear_theme().unwrap();
    }
}
