use crate::app::{AppState, PaneFocus, UiMode};
use crate::domain::NOTE_MAX_CHARS;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_add_task_mode(app, key),
        UiMode::EditingNote => handle_note_mode(app, key),
        UiMode::Confirming => handle_confirm_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }
        KeyCode::Tab => {
            app.switch_focus();
            Ok(false)
        }

        // Task list
        KeyCode::Char('a') => {
            app.begin_add_task();
            Ok(false)
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if app.focus == PaneFocus::Tasks {
                if let Some(id) = app.selected_task_id() {
                    app.toggle_completion(&id)?;
                }
            }
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            if app.focus == PaneFocus::Tasks {
                app.begin_edit_note();
            }
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.request_delete_selected();
            Ok(false)
        }

        // Timer; start and stop mirror each other's disabled state
        KeyCode::Char('s') => {
            if !app.timer.is_running() {
                app.start_timer();
                app.show_toast("Timer started");
            }
            Ok(false)
        }
        KeyCode::Char('x') => {
            if app.timer.is_running() {
                app.stop_timer()?;
            }
            Ok(false)
        }
        KeyCode::Char('r') => {
            app.reset_timer()?;
            Ok(false)
        }

        // Archival
        KeyCode::Char('A') => {
            app.archive_and_reset()?;
            Ok(false)
        }
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.toggle_history();
            Ok(false)
        }

        // Theme
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.cycle_theme()?;
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add-task prompt is open
fn handle_add_task_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_new_task().map(|_| false),
        KeyCode::Esc => {
            app.cancel_input();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while the note editor is open
fn handle_note_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_note().map(|_| false),
        KeyCode::Esc => {
            app.cancel_input();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.note_buffer.pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            // The editor enforces the same cap the store does
            if app.note_buffer.chars().count() < NOTE_MAX_CHARS {
                app.note_buffer.push(c);
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while a confirmation modal is showing
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_pending().map(|_| false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_input();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::Store;
    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, press(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_add_task_flow() {
        let dir = tempdir().unwrap();
        let mut app = AppState::new(Store::new(dir.path())).unwrap();

        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        type_text(&mut app, "buy milk");
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.data.active.len(), 1);
        assert_eq!(app.data.active[0].text, "buy milk");
    }

    #[test]
    fn test_blank_submit_adds_nothing() {
        let dir = tempdir().unwrap();
        let mut app = AppState::new(Store::new(dir.path())).unwrap();

        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "   ");
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.data.active.is_empty());
    }

    #[test]
    fn test_note_editor_caps_length() {
        let dir = tempdir().unwrap();
        let mut app = AppState::new(Store::new(dir.path())).unwrap();
        app.add_task("x").unwrap();

        handle_key(&mut app, press(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingNote);
        for _ in 0..(NOTE_MAX_CHARS + 10) {
            handle_key(&mut app, press(KeyCode::Char('z'))).unwrap();
        }
        assert_eq!(app.note_buffer.chars().count(), NOTE_MAX_CHARS);

        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.data.active[0].note.chars().count(), NOTE_MAX_CHARS);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let dir = tempdir().unwrap();
        let mut app = AppState::new(Store::new(dir.path())).unwrap();
        app.add_task("x").unwrap();

        handle_key(&mut app, press(KeyCode::Char('d'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Confirming);
        // declining keeps the task
        handle_key(&mut app, press(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.data.active.len(), 1);

        handle_key(&mut app, press(KeyCode::Char('d'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('y'))).unwrap();
        assert!(app.data.active.is_empty());
    }

    #[test]
    fn test_quit_key() {
        let dir = tempdir().unwrap();
        let mut app = AppState::new(Store::new(dir.path())).unwrap();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
    }
}
