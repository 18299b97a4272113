//! CLI-specific configuration for the terminal UI.
use std::env;

/// Terminal UI configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RATING_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `RATING_ICON_GLYPH` - Glyph drawn for each of the five icons (default: `★`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("RATING_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        if let Some(glyph) = read_env::<char>("RATING_ICON_GLYPH") {
            config.ui.icon_glyph = glyph;
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Glyph drawn for each icon.
    pub icon_glyph: char,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            icon_glyph: '★',
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
