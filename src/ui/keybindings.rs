use crate::app::AppState;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

/// Render the one-line keybindings bar.
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = format!(
        "a:add  space:toggle  n:note  d:delete  s/x/r:timer  A:archive  h:history  tab:focus  t:theme({})  q:quit",
        app.theme.label()
    );
    f.render_widget(Paragraph::new(Span::styled(hints, hint_style())), area);
}
