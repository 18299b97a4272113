//! Ratatui styling for widget colors and messages.
//!
//! Maps the widget's CSS color values onto terminal styles so the core
//! crate stays framework-agnostic.

use rating_widget::CssColor;
use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// Ratatui-specific theme for the rating page.
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Style for an icon carrying the given CSS color.
    ///
    /// `inherit` maps to the terminal default, matching its CSS meaning of
    /// deferring to the host's own styling.
    pub fn icon_style(&self, color: CssColor) -> Style {
        let fg = match color {
            CssColor::Inherit => Color::Reset,
            CssColor::Named(name) => match name {
                "red" => Color::Red,
                "orange" => Color::Rgb(0xFF, 0xA5, 0x00),
                "yellow" => Color::Yellow,
                _ => Color::White,
            },
            CssColor::Rgb { r, g, b } => Color::Rgb(r, g, b),
        };

        Style::default().fg(fg)
    }

    /// Emphasis applied to the icon under the hover cursor.
    pub fn emphasize_cursor(&self, base_style: Style) -> Style {
        base_style
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }
}

impl Default for RatatuiTheme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rating_widget::COLOR_RAMP;

    #[test]
    fn neutral_icons_use_terminal_default() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.icon_style(CssColor::Inherit).fg, Some(Color::Reset));
    }

    #[test]
    fn ramp_colors_map_onto_terminal_colors() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.icon_style(COLOR_RAMP[0]).fg, Some(Color::Red));
        assert_eq!(theme.icon_style(COLOR_RAMP[2]).fg, Some(Color::Yellow));
        assert_eq!(
            theme.icon_style(COLOR_RAMP[3]).fg,
            Some(Color::Rgb(0x9A, 0xFF, 0x00))
        );
        assert_eq!(
            theme.icon_style(COLOR_RAMP[4]).fg,
            Some(Color::Rgb(0x09, 0xB4, 0x11))
        );
    }

    #[test]
    fn cursor_emphasis_adds_modifiers() {
        let theme = RatatuiTheme::new();
        let style = theme.emphasize_cursor(Style::default());
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
