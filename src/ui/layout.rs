use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub tasks_area: Rect,
    pub history_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Timer pane (5 rows)
/// - Main area: tasks alone, or tasks (55%) | history (45%) when the
///   history pane is shown
pub fn create_layout(area: Rect, show_history: bool) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(5), // Timer pane
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = chunks[0];
    let timer_area = chunks[1];
    let content_area = chunks[2];

    if show_history {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // Task list
                Constraint::Percentage(45), // History cards
            ])
            .split(content_area);

        MainLayout {
            keybindings_area,
            timer_area,
            tasks_area: horizontal[0],
            history_area: Some(horizontal[1]),
        }
    } else {
        MainLayout {
            keybindings_area,
            timer_area,
            tasks_area: content_area,
            history_area: None,
        }
    }
}

/// Centered rect for modals, sized as a percentage of the parent area
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_pane_toggles() {
        let area = Rect::new(0, 0, 120, 40);

        let layout = create_layout(area, false);
        assert!(layout.history_area.is_none());
        assert_eq!(layout.tasks_area.width, 120);

        let layout = create_layout(area, true);
        assert!(layout.history_area.is_some());
        assert!(layout.tasks_area.width < 120);
    }

    #[test]
    fn test_centered_rect_is_inside_parent() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, area);
        assert!(inner.x > 0 && inner.y > 0);
        assert!(inner.right() <= area.right());
        assert!(inner.bottom() <= area.bottom());
    }
}
