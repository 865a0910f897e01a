use crate::domain::ColorBand;
use ratatui::style::{Color, Modifier, Style};

/// Named color palette, persisted under the separate theme key. `Default`
/// is stored as absence of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Sunrise,
    Green,
    Dark,
    Midnight,
    Rose,
    Mint,
    Lavender,
    Sunset,
    Ice,
}

impl Theme {
    /// Stored name, or `None` for the default palette.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Theme::Default => None,
            Theme::Sunrise => Some("sunrise"),
            Theme::Green => Some("green"),
            Theme::Dark => Some("dark"),
            Theme::Midnight => Some("midnight"),
            Theme::Rose => Some("rose"),
            Theme::Mint => Some("mint"),
            Theme::Lavender => Some("lavender"),
            Theme::Sunset => Some("sunset"),
            Theme::Ice => Some("ice"),
        }
    }

    /// Unknown stored names fall back to the default palette.
    pub fn from_name(name: &str) -> Self {
        match name {
            "sunrise" => Theme::Sunrise,
            "green" => Theme::Green,
            "dark" => Theme::Dark,
            "midnight" => Theme::Midnight,
            "rose" => Theme::Rose,
            "mint" => Theme::Mint,
            "lavender" => Theme::Lavender,
            "sunset" => Theme::Sunset,
            "ice" => Theme::Ice,
            _ => Theme::Default,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Theme::Default => Theme::Sunrise,
            Theme::Sunrise => Theme::Green,
            Theme::Green => Theme::Dark,
            Theme::Dark => Theme::Midnight,
            Theme::Midnight => Theme::Rose,
            Theme::Rose => Theme::Mint,
            Theme::Mint => Theme::Lavender,
            Theme::Lavender => Theme::Sunset,
            Theme::Sunset => Theme::Ice,
            Theme::Ice => Theme::Default,
        }
    }

    /// Display label for the keybindings bar.
    pub fn label(&self) -> &'static str {
        self.name().unwrap_or("default")
    }

    /// Accent color used for titles and the selection highlight.
    pub fn accent(&self) -> Color {
        match self {
            Theme::Default => Color::Cyan,
            Theme::Sunrise => Color::Rgb(255, 153, 102),
            Theme::Green => Color::Green,
            Theme::Dark => Color::Gray,
            Theme::Midnight => Color::Rgb(100, 120, 220),
            Theme::Rose => Color::Rgb(235, 120, 160),
            Theme::Mint => Color::Rgb(120, 220, 180),
            Theme::Lavender => Color::Rgb(180, 150, 230),
            Theme::Sunset => Color::Rgb(240, 110, 90),
            Theme::Ice => Color::Rgb(150, 210, 240),
        }
    }
}

/// Terminal color for a timer color band.
pub fn band_color(band: ColorBand) -> Color {
    match band {
        ColorBand::Blue => Color::Blue,
        ColorBand::Green => Color::Green,
        ColorBand::Orange => Color::Rgb(255, 165, 0),
        ColorBand::Red => Color::Red,
        ColorBand::Purple => Color::Magenta,
    }
}

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style(theme: Theme) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(theme.accent())
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style(theme: Theme) -> Style {
    Style::default()
        .fg(theme.accent())
        .add_modifier(Modifier::BOLD)
}

/// Border style; focused panes use the accent
pub fn border_style(theme: Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.accent())
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Note badge style
pub fn note_badge_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Destructive-action emphasis inside modals
pub fn danger_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Toast style
pub fn toast_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Completion gauge style
pub fn gauge_style(theme: Theme) -> Style {
    Style::default().fg(theme.accent()).bg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_round_trip() {
        let mut theme = Theme::Default;
        for _ in 0..10 {
            match theme.name() {
                Some(name) => assert_eq!(Theme::from_name(name), theme),
                None => assert_eq!(theme, Theme::Default),
            }
            theme = theme.next();
        }
        // the cycle returns to the default palette
        assert_eq!(theme, Theme::Default);
    }

    #[test]
    fn test_unknown_theme_name_falls_back() {
        assert_eq!(Theme::from_name("plaid"), Theme::Default);
    }

    #[test]
    fn test_each_band_has_a_distinct_color() {
        let colors = [
            band_color(ColorBand::Blue),
            band_color(ColorBand::Green),
            band_color(ColorBand::Orange),
            band_color(ColorBand::Red),
            band_color(ColorBand::Purple),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
