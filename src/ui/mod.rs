pub mod history_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;
pub mod timer_pane;

use crate::app::{AppState, UiMode};
use history_pane::render_history_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_confirm_modal, render_toast};
use ratatui::Frame;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size, app.show_history);

    render_keybindings(f, app, layout.keybindings_area);
    render_timer_pane(f, app, layout.timer_area);
    render_list_pane(f, app, layout.tasks_area);

    if let Some(history_area) = layout.history_area {
        render_history_pane(f, app, history_area);
    }

    // Overlays
    match app.ui_mode {
        UiMode::AddingTask | UiMode::EditingNote => render_input_form(f, app, size),
        UiMode::Confirming => render_confirm_modal(f, app, size),
        UiMode::Normal => {}
    }

    render_toast(f, app, size);
}
