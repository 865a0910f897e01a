use super::format::format_duration;
use super::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The sole persisted record: active tasks, archived task buckets, and
/// timer history. Field names match the JSON wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    /// Active tasks in display order.
    #[serde(default)]
    pub active: Vec<Task>,
    /// History buckets, keyed by archive key (`YYYY-MM-DD_HHMMSS`).
    #[serde(default)]
    pub completed: BTreeMap<String, Vec<Task>>,
    /// Timer entries, keyed by day key (today's live entry) or archive key
    /// (archived snapshots).
    #[serde(default)]
    pub time_records: BTreeMap<String, TimeRecord>,
}

/// Elapsed time for one day or one archival event.
///
/// `formatted_time` is a derived cache of `time`; every writer goes through
/// `from_ms` so the two never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    pub time: u64,
    pub formatted_time: String,
}

impl TimeRecord {
    pub fn from_ms(ms: u64) -> Self {
        Self {
            time: ms,
            formatted_time: format_duration(ms),
        }
    }
}
