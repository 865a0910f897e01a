use crate::app::{AppState, PaneFocus};
use crate::ui::styles::{
    border_style, default_style, done_style, gauge_style, note_badge_style, selected_style,
    title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

/// Render the active task list with a completion gauge underneath.
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == PaneFocus::Tasks;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app.theme, focused))
        .title(Span::styled(" Tasks ", title_style(app.theme)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if app.data.active.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No tasks yet - press 'a' to add one",
            default_style(),
        ));
        f.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = app
            .data
            .active
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let checkbox = if task.completed { "[x] " } else { "[ ] " };
                let text_style = if task.completed {
                    done_style()
                } else {
                    default_style()
                };

                let mut spans = vec![
                    Span::raw(checkbox),
                    Span::styled(task.text.clone(), text_style),
                ];
                if task.has_note() {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled("≡ note", note_badge_style()));
                }

                let item = ListItem::new(Line::from(spans));
                if focused && i == app.selected_task {
                    item.style(selected_style(app.theme))
                } else {
                    item
                }
            })
            .collect();

        f.render_widget(List::new(items), chunks[0]);
    }

    let percent = app.completion_ratio();
    let gauge = Gauge::default()
        .gauge_style(gauge_style(app.theme))
        .percent(percent as u16)
        .label(format!("{percent}% done"));
    f.render_widget(gauge, chunks[1]);
}
