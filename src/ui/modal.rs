use crate::app::{AppState, ConfirmAction};
use crate::ui::layout::centered_rect;
use crate::ui::styles::{danger_style, hint_style, modal_bg_style, modal_title_style, toast_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the confirmation modal for a pending destructive action.
pub fn render_confirm_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(action) = &app.confirm else {
        return;
    };

    let (title, message) = match action {
        ConfirmAction::RemoveTask(_) => (
            " Confirm deletion? ",
            "This action cannot be undone.".to_string(),
        ),
        ConfirmAction::DeleteBucket(key) => (
            " Confirm permanent deletion? ",
            format!("All data for {} will be erased.", crate::domain::date_part(key)),
        ),
    };

    let popup = centered_rect(50, 25, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled("⚠", danger_style())),
        Line::from(Span::raw(message)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] delete", danger_style()),
            Span::raw("   "),
            Span::styled("[n] cancel", hint_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(modal_bg_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style())),
        );
    f.render_widget(paragraph, popup);
}

/// Render the transient toast in the bottom-right corner.
pub fn render_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(toast) = &app.toast else {
        return;
    };

    let width = (toast.message.len() as u16 + 4).min(area.width);
    let rect = Rect::new(
        area.right().saturating_sub(width + 1),
        area.bottom().saturating_sub(3),
        width,
        3,
    );

    f.render_widget(Clear, rect);
    let paragraph = Paragraph::new(Span::raw(toast.message.clone()))
        .alignment(Alignment::Center)
        .style(toast_style())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, rect);
}
