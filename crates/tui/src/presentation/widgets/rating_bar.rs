//! The five-icon rating bar.
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::state::AppState;

/// Render the five icons, each styled with its current display color, with
/// the hover cursor emphasized.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &RatatuiTheme, glyph: char) {
    let mut icon_spans = Vec::new();
    let mut label_spans = Vec::new();

    for (slot, icon) in state.widget.icons().iter().enumerate() {
        let mut style = theme.icon_style(icon.color());
        if slot == state.cursor {
            style = theme.emphasize_cursor(style);
        }

        icon_spans.push(Span::styled(format!("  {glyph}  "), style));
        label_spans.push(Span::styled(
            format!("  {}  ", slot + 1),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(vec![
        Line::from(icon_spans),
        Line::from(label_spans),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Rating "));

    frame.render_widget(paragraph, area);
}
