//! UI rendering composing all widgets into the page layout.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::message::MessageLog;
use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use crate::state::AppState;

/// Rendering context containing all state and configuration needed for a
/// frame.
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
    pub icon_glyph: char,
}

/// Render the rating page.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Length(5),                        // Rating bar
                Constraint::Length(4),                        // Form panel
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Min(2),                           // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0]);
        widgets::rating_bar::render(frame, chunks[1], ctx.state, &theme, ctx.icon_glyph);
        widgets::form::render(frame, chunks[2], ctx.state);
        widgets::messages::render(
            frame,
            chunks[3],
            ctx.messages,
            ctx.message_panel_height,
            &theme,
        );
        widgets::footer::render(frame, chunks[4]);
    })?;

    Ok(())
}
