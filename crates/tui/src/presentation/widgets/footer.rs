//! Footer with key hints.
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(
        "1-5: rate | \u{2190}/\u{2192}: hover | Enter: confirm | s: submit | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);

    frame.render_widget(hints, area);
}
