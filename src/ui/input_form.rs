use crate::app::{AppState, UiMode};
use crate::domain::NOTE_MAX_CHARS;
use crate::ui::layout::centered_rect;
use crate::ui::styles::{hint_style, modal_bg_style, modal_title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add-task prompt or the note editor, depending on mode.
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    match app.ui_mode {
        UiMode::AddingTask => render_add_task(f, app, area),
        UiMode::EditingNote => render_note_editor(f, app, area),
        _ => {}
    }
}

fn render_add_task(f: &mut Frame, app: &AppState, area: Rect) {
    let popup = centered_rect(60, 20, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::raw(format!("> {}_", app.input_buffer))),
        Line::from(Span::styled("Enter to add, Esc to cancel", hint_style())),
    ];

    let paragraph = Paragraph::new(lines).style(modal_bg_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" New task ", modal_title_style())),
    );
    f.render_widget(paragraph, popup);
}

fn render_note_editor(f: &mut Frame, app: &AppState, area: Rect) {
    let popup = centered_rect(70, 40, area);
    f.render_widget(Clear, popup);

    let counter = format!("{}/{}", app.note_buffer.chars().count(), NOTE_MAX_CHARS);
    let lines = vec![
        Line::from(Span::raw(format!("{}_", app.note_buffer))),
        Line::from(""),
        Line::from(vec![
            Span::styled(counter, hint_style()),
            Span::raw("  "),
            Span::styled("Enter to save, Esc to cancel", hint_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .style(modal_bg_style())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Add/Edit note ", modal_title_style())),
        );
    f.render_widget(paragraph, popup);
}
