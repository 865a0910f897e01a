use crate::app::AppState;
use crate::domain::format_duration;
use crate::ui::styles::{band_color, border_style, hint_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the stopwatch: elapsed time tinted by its color band, a running
/// marker, and the start/stop affordances with the inactive one dimmed.
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let elapsed = app.elapsed_ms();
    let running = app.timer.is_running();

    let time_style = Style::default()
        .fg(band_color(app.band()))
        .add_modifier(Modifier::BOLD);

    let mut time_line = vec![Span::styled(format_duration(elapsed), time_style)];
    if running {
        time_line.push(Span::raw("  "));
        time_line.push(Span::styled("● running", title_style(app.theme)));
    }

    let controls = if running {
        Line::from(vec![
            Span::styled("[s]tart", hint_style()),
            Span::raw("  "),
            Span::raw("[x] stop"),
            Span::raw("  "),
            Span::raw("[r]eset"),
        ])
    } else {
        Line::from(vec![
            Span::raw("[s]tart"),
            Span::raw("  "),
            Span::styled("[x] stop", hint_style()),
            Span::raw("  "),
            Span::raw("[r]eset"),
        ])
    };

    let paragraph = Paragraph::new(vec![Line::from(time_line), controls])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(app.theme, false))
                .title(Span::styled(" Timer ", title_style(app.theme))),
        );

    f.render_widget(paragraph, area);
}
