use crate::domain::{
    archive_key, completion_ratio, sort_bucket_keys, today_key, AppData, ColorBand, Task,
    TimeRecord, NOTE_MAX_CHARS,
};
use crate::persistence::{migrate_legacy, Store};
use crate::timer::{now_ms, TimerSession};
use crate::ui::styles::Theme;
use anyhow::Result;
use std::time::{Duration, Instant};

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_millis(3_100);

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingNote,
    Confirming,
}

/// Which pane keyboard navigation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    Tasks,
    History,
}

/// Destructive action awaiting user confirmation.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    RemoveTask(String),
    DeleteBucket(String),
}

/// Transient success message, auto-dismissed after a few seconds.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// Main application state: the persisted record, the one timer session,
/// and the UI's transient state. All task and timer mutation goes through
/// the methods here; panes only read.
pub struct AppState {
    pub store: Store,
    pub data: AppData,
    pub timer: TimerSession,
    pub ui_mode: UiMode,
    pub focus: PaneFocus,
    pub selected_task: usize,
    pub selected_bucket: usize,
    pub show_history: bool,
    pub input_buffer: String,
    pub note_buffer: String,
    note_target: Option<String>,
    pub confirm: Option<ConfirmAction>,
    pub toast: Option<Toast>,
    pub theme: Theme,
    /// Bucket keys in display order; refreshed after every archival change.
    pub bucket_keys: Vec<String>,
}

impl AppState {
    pub fn new(store: Store) -> Result<Self> {
        migrate_legacy(&store);
        let data = store.load()?;

        // Restore today's in-progress entry into a stopped session
        let timer = match data.time_records.get(&today_key()) {
            Some(record) => TimerSession::with_elapsed(record.time),
            None => TimerSession::new(),
        };

        let theme = store
            .load_theme()
            .map(|name| Theme::from_name(&name))
            .unwrap_or_default();

        let mut app = Self {
            store,
            data,
            timer,
            ui_mode: UiMode::Normal,
            focus: PaneFocus::Tasks,
            selected_task: 0,
            selected_bucket: 0,
            show_history: false,
            input_buffer: String::new(),
            note_buffer: String::new(),
            note_target: None,
            confirm: None,
            toast: None,
            theme,
            bucket_keys: Vec::new(),
        };
        app.refresh_buckets();
        Ok(app)
    }

    fn refresh_buckets(&mut self) {
        let mut keys: Vec<String> = self.data.completed.keys().cloned().collect();
        sort_bucket_keys(&mut keys);
        self.bucket_keys = keys;
        self.selected_bucket = self
            .selected_bucket
            .min(self.bucket_keys.len().saturating_sub(1));
    }

    // --- Task list ---

    /// Add a task from user input. Whitespace-only text is rejected and
    /// nothing is persisted.
    pub fn add_task(&mut self, text: &str) -> Result<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let task = Task::new(text);
        self.data.active.push(task.clone());
        self.store.save(&self.data)?;
        Ok(Some(task))
    }

    /// Flip the completion flag on the matching active task. Unknown ids
    /// are a silent no-op.
    pub fn toggle_completion(&mut self, id: &str) -> Result<()> {
        if let Some(task) = self.data.active.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            self.store.save(&self.data)?;
        }
        Ok(())
    }

    /// Overwrite the note on the matching active task, truncated to
    /// [`NOTE_MAX_CHARS`]. Unknown ids are a silent no-op.
    pub fn set_note(&mut self, id: &str, note: &str) -> Result<()> {
        let note: String = note.chars().take(NOTE_MAX_CHARS).collect();
        if let Some(task) = self.data.active.iter_mut().find(|t| t.id == id) {
            task.note = note;
            self.store.save(&self.data)?;
        }
        Ok(())
    }

    /// Delete the matching active task by id. Idempotent.
    pub fn remove_task(&mut self, id: &str) -> Result<()> {
        self.data.active.retain(|t| t.id != id);
        self.selected_task = self
            .selected_task
            .min(self.data.active.len().saturating_sub(1));
        self.store.save(&self.data)?;
        Ok(())
    }

    pub fn completion_ratio(&self) -> u8 {
        completion_ratio(&self.data.active)
    }

    // --- Timer ---

    pub fn start_timer(&mut self) {
        self.timer.start(now_ms());
    }

    pub fn stop_timer(&mut self) -> Result<()> {
        self.timer.stop(now_ms());
        self.persist_elapsed()
    }

    /// Force elapsed to zero and delete today's entry from the store.
    /// Other days' records are untouched, and the save is skipped when
    /// there was nothing to clear.
    pub fn reset_timer(&mut self) -> Result<()> {
        self.timer.reset();
        if self.data.time_records.remove(&today_key()).is_some() {
            self.store.save(&self.data)?;
        }
        self.persist_elapsed()
    }

    /// Write today's elapsed time to the store. Zero is never written;
    /// clearing happens through explicit deletion in `reset_timer`, not by
    /// overwriting with zero.
    pub fn persist_elapsed(&mut self) -> Result<()> {
        let elapsed = self.timer.elapsed_ms();
        if elapsed > 0 {
            self.data
                .time_records
                .insert(today_key(), TimeRecord::from_ms(elapsed));
            self.store.save(&self.data)?;
        }
        Ok(())
    }

    /// Event-loop tick: sample the running timer, persist today's entry,
    /// expire any stale toast.
    pub fn tick(&mut self) -> Result<()> {
        if self.timer.is_running() {
            self.timer.sample(now_ms());
            self.persist_elapsed()?;
        }
        self.expire_toast();
        Ok(())
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.timer.elapsed_ms()
    }

    pub fn band(&self) -> ColorBand {
        ColorBand::for_ms(self.timer.elapsed_ms())
    }

    // --- Archival ---

    /// Snapshot active tasks and elapsed time into a new dated bucket, then
    /// clear the active list, all in one persisted write.
    ///
    /// Today's live day-key entry is deliberately left in place; only an
    /// explicit `reset_timer` removes it.
    pub fn archive_today(&mut self) -> Result<()> {
        let key = archive_key(chrono::Local::now());
        if !self.data.active.is_empty() {
            self.data
                .completed
                .insert(key.clone(), self.data.active.clone());
        }
        let elapsed = self.timer.elapsed_ms();
        if elapsed > 0 {
            self.data
                .time_records
                .insert(key, TimeRecord::from_ms(elapsed));
        }
        self.data.active.clear();
        self.store.save(&self.data)?;
        self.refresh_buckets();
        Ok(())
    }

    /// Remove a history bucket and its timer entry. Idempotent: deleting an
    /// already-absent key still succeeds.
    pub fn delete_archive_bucket(&mut self, key: &str) -> Result<()> {
        self.data.completed.remove(key);
        self.data.time_records.remove(key);
        self.store.save(&self.data)?;
        self.refresh_buckets();
        Ok(())
    }

    /// The archive action as the user sees it: snapshot, then reset the
    /// live timer so a fresh day starts at zero.
    pub fn archive_and_reset(&mut self) -> Result<()> {
        self.archive_today()?;
        self.reset_timer()?;
        self.selected_task = 0;
        self.show_toast("Tasks and timer archived");
        Ok(())
    }

    // --- Selection and transient UI state ---

    pub fn selected_task_id(&self) -> Option<String> {
        self.data
            .active
            .get(self.selected_task)
            .map(|t| t.id.clone())
    }

    pub fn selected_bucket_key(&self) -> Option<String> {
        self.bucket_keys.get(self.selected_bucket).cloned()
    }

    pub fn move_selection_up(&mut self) {
        match self.focus {
            PaneFocus::Tasks => self.selected_task = self.selected_task.saturating_sub(1),
            PaneFocus::History => self.selected_bucket = self.selected_bucket.saturating_sub(1),
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.focus {
            PaneFocus::Tasks => {
                if self.selected_task + 1 < self.data.active.len() {
                    self.selected_task += 1;
                }
            }
            PaneFocus::History => {
                if self.selected_bucket + 1 < self.bucket_keys.len() {
                    self.selected_bucket += 1;
                }
            }
        }
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
        if !self.show_history {
            self.focus = PaneFocus::Tasks;
        }
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            PaneFocus::Tasks if self.show_history && !self.bucket_keys.is_empty() => {
                PaneFocus::History
            }
            _ => PaneFocus::Tasks,
        };
    }

    pub fn begin_add_task(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    /// Submit the add-task form. Blank input closes the form without
    /// creating anything.
    pub fn submit_new_task(&mut self) -> Result<()> {
        let text = std::mem::take(&mut self.input_buffer);
        self.add_task(&text)?;
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    pub fn begin_edit_note(&mut self) {
        if let Some(task) = self.data.active.get(self.selected_task) {
            self.note_buffer = task.note.clone();
            self.note_target = Some(task.id.clone());
            self.ui_mode = UiMode::EditingNote;
        }
    }

    pub fn submit_note(&mut self) -> Result<()> {
        if let Some(id) = self.note_target.take() {
            let note = std::mem::take(&mut self.note_buffer);
            self.set_note(&id, &note)?;
        }
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    pub fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.note_buffer.clear();
        self.note_target = None;
        self.confirm = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Ask for confirmation before deleting whatever the focused pane has
    /// selected.
    pub fn request_delete_selected(&mut self) {
        let action = match self.focus {
            PaneFocus::Tasks => self.selected_task_id().map(ConfirmAction::RemoveTask),
            PaneFocus::History => self.selected_bucket_key().map(ConfirmAction::DeleteBucket),
        };
        if let Some(action) = action {
            self.confirm = Some(action);
            self.ui_mode = UiMode::Confirming;
        }
    }

    pub fn confirm_pending(&mut self) -> Result<()> {
        match self.confirm.take() {
            Some(ConfirmAction::RemoveTask(id)) => self.remove_task(&id)?,
            Some(ConfirmAction::DeleteBucket(key)) => self.delete_archive_bucket(&key)?,
            None => {}
        }
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    pub fn cycle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.next();
        match self.theme.name() {
            Some(name) => self.store.save_theme(name)?,
            None => self.store.clear_theme()?,
        }
        Ok(())
    }

    pub fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast {
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }

    fn expire_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.shown_at.elapsed() >= TOAST_DURATION {
                self.toast = None;
            }
        }
    }
}
