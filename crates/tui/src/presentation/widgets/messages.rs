//! Message panel beneath the form.
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::message::MessageLog;
use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    messages: &MessageLog,
    panel_height: u16,
    theme: &RatatuiTheme,
) {
    // Borders take two lines; show newest entries in chronological order.
    let visible = panel_height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| Line::styled(entry.text.clone(), theme.style_message(entry.level)))
        .collect();
    lines.reverse();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Messages "));

    frame.render_widget(paragraph, area);
}
