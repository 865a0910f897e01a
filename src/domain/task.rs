use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest note the note editor accepts, in characters.
pub const NOTE_MAX_CHARS: usize = 501;

/// A user-entered to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, stable for the task's lifetime, never reused. Empty only
    /// in records written before ids existed; backfilled on load.
    #[serde(default)]
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub note: String,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            text: text.into(),
            completed: false,
            note: String::new(),
        }
    }

    /// Whether the task carries a non-blank note.
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Value space of the 5-character id suffix (36^5).
const SUFFIX_SPACE: u64 = 60_466_176;

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Generate a task id: base-36 local timestamp plus a 5-character base-36
/// random suffix. Practically unique for a single-user store; not
/// cryptographically secure.
pub fn generate_id() -> String {
    let millis = chrono::Local::now().timestamp_millis().unsigned_abs();
    let mut entropy_bytes = [0u8; 8];
    entropy_bytes.copy_from_slice(&Uuid::new_v4().as_bytes()[..8]);
    let entropy = u64::from_le_bytes(entropy_bytes);
    format!(
        "{}{:0>5}",
        to_base36(millis),
        to_base36(entropy % SUFFIX_SPACE)
    )
}

/// Percentage of tasks marked complete, rounded to the nearest integer and
/// clamped to 0..=100. An empty list counts as 0.
pub fn completion_ratio(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.completed).count();
    let raw = (done as f64 / tasks.len() as f64 * 100.0).round() as i64;
    raw.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("buy milk");
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
        assert_eq!(task.note, "");
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<String> = (0..200).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_id_shape() {
        // base36 millisecond timestamps are 8 chars wide this era, plus
        // the 5-char suffix
        let id = generate_id();
        assert_eq!(id.len(), 13);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36), "100");
    }

    #[test]
    fn test_has_note() {
        let mut task = Task::new("x");
        assert!(!task.has_note());
        task.note = "   ".to_string();
        assert!(!task.has_note());
        task.note = "remember the receipt".to_string();
        assert!(task.has_note());
    }

    #[test]
    fn test_completion_ratio_empty() {
        assert_eq!(completion_ratio(&[]), 0);
    }

    #[test]
    fn test_completion_ratio_rounds() {
        let mut tasks = vec![Task::new("a"), Task::new("b"), Task::new("c")];
        tasks[0].completed = true;
        // 1 of 3 -> 33.33 rounds to 33
        assert_eq!(completion_ratio(&tasks), 33);
        tasks[1].completed = true;
        // 2 of 3 -> 66.67 rounds to 67
        assert_eq!(completion_ratio(&tasks), 67);
        tasks[2].completed = true;
        assert_eq!(completion_ratio(&tasks), 100);
    }
}
