//! Form panel showing the output field the surrounding form would read.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rate_value = match state.widget.rating() {
        Some(rate) => rate.to_string(),
        None => "(empty)".to_string(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Rate: ", Style::default().fg(Color::White)),
            Span::raw(rate_value),
        ]),
        Line::from(vec![
            Span::styled("Last submission: ", Style::default().fg(Color::White)),
            Span::raw(
                state
                    .last_submission
                    .as_deref()
                    .unwrap_or("(none)")
                    .to_string(),
            ),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Form "));

    frame.render_widget(paragraph, area);
}
