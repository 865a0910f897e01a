use crate::app::{AppState, PaneFocus};
use crate::domain::{display_key, ColorBand};
use crate::ui::styles::{
    band_color, border_style, default_style, done_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render archived buckets as cards, most recent first: a dated header,
/// the snapshot's timer entry tinted by its band, and the frozen task
/// list. The selected card's header is highlighted.
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == PaneFocus::History;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app.theme, focused))
        .title(Span::styled(" History ", title_style(app.theme)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.bucket_keys.is_empty() {
        let empty = Paragraph::new(Span::styled("Nothing archived yet", hint_style()));
        f.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = app
        .bucket_keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let header_style = if focused && i == app.selected_bucket {
                selected_style(app.theme)
            } else {
                title_style(app.theme)
            };

            let mut lines = vec![Line::from(Span::styled(display_key(key), header_style))];

            if let Some(record) = app.data.time_records.get(key) {
                lines.push(Line::from(Span::styled(
                    format!("⏱ {}", record.formatted_time),
                    Style::default().fg(band_color(ColorBand::for_ms(record.time))),
                )));
            }

            if let Some(tasks) = app.data.completed.get(key) {
                for task in tasks {
                    let checkbox = if task.completed { "  [x] " } else { "  [ ] " };
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
                        spans.push(Span::styled(format!("  ({})", task.note), hint_style()));
                    }
                    lines.push(Line::from(spans));
                }
            }

            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    f.render_widget(List::new(items), inner);
}
