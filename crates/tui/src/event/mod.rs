//! Pumps user input and rendering for the rating page.
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use serde::Serialize;
use tokio::time::{self, Duration};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::presentation::{terminal::Tui, ui};
use crate::state::AppState;

const FRAME_INTERVAL_MS: u64 = 16;
const MESSAGE_LOG_CAPACITY: usize = 64;

/// Form payload the surrounding page would post on submission.
#[derive(Debug, Serialize)]
struct Submission {
    rate: u8,
}

pub struct EventLoop {
    input: InputHandler,
    state: AppState,
    messages: MessageLog,
    config: CliConfig,
}

impl EventLoop {
    pub fn new(config: CliConfig) -> Self {
        let mut messages = MessageLog::new(MESSAGE_LOG_CAPACITY);
        messages.push_text("Pick a rating: 1-5, or hover with \u{2190}/\u{2192} and press Enter.");

        Self {
            input: InputHandler::new(),
            state: AppState::new(),
            messages,
            config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        loop {
            time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)).await;
            if self.handle_input_tick(terminal)? {
                break;
            }
        }

        Ok(())
    }

    /// Poll for keyboard input and handle UI interactions.
    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            Event::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to the appropriate handler.
    fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                self.messages.push_text("Quitting...");
                self.render(terminal)?;
                Ok(true)
            }
            KeyAction::Select(index) => {
                self.apply_selection(index);
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::MoveCursor(delta) => {
                self.state.move_cursor(delta);
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::Confirm => {
                self.apply_selection(self.state.cursor);
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::SubmitForm => {
                self.submit_form()?;
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    /// Apply a rating selection to the widget and report the outcome.
    fn apply_selection(&mut self, index: usize) {
        match self.state.widget.select(index) {
            Ok(()) => {
                self.state.cursor = index;
                let color = self.state.widget.icons()[index].color();
                tracing::debug!(rating = index, %color, "rating selected");
                self.messages
                    .push_text(format!("Rated {}/5 ({color})", index + 1));
            }
            Err(err) => {
                tracing::warn!(%err, "selection rejected");
                self.messages
                    .push(MessageEntry::new(err.to_string(), MessageLevel::Error));
            }
        }
    }

    /// Serialize the form value the way the surrounding page would post it.
    fn submit_form(&mut self) -> Result<()> {
        match self.state.widget.rating() {
            Some(rate) => {
                let payload = serde_json::to_string(&Submission { rate })?;
                tracing::info!(%payload, "form submitted");
                self.messages.push_text(format!("Submitted {payload}"));
                self.state.last_submission = Some(payload);
            }
            None => {
                self.messages.push(MessageEntry::new(
                    "No rating selected yet.",
                    MessageLevel::Warning,
                ));
            }
        }

        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            state: &self.state,
            messages: &self.messages,
            message_panel_height: self.config.ui.message_panel_height,
            icon_glyph: self.config.ui.icon_glyph,
        };
        ui::render(terminal, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_loop() -> EventLoop {
        EventLoop::new(CliConfig::default())
    }

    fn last_entry(event_loop: &EventLoop) -> &MessageEntry {
        event_loop.messages.recent(1).next().unwrap()
    }

    #[test]
    fn selection_moves_cursor_and_reports() {
        let mut event_loop = event_loop();
        event_loop.apply_selection(3);

        assert_eq!(event_loop.state.widget.rating(), Some(3));
        assert_eq!(event_loop.state.cursor, 3);

        let entry = last_entry(&event_loop);
        assert_eq!(entry.level, MessageLevel::Info);
        assert!(entry.text.contains("Rated 4/5"));
    }

    #[test]
    fn rejected_selection_leaves_state_and_logs_error() {
        let mut event_loop = event_loop();
        event_loop.apply_selection(9);

        assert_eq!(event_loop.state.widget.rating(), None);
        assert_eq!(event_loop.state.cursor, 0);
        assert_eq!(last_entry(&event_loop).level, MessageLevel::Error);
    }

    #[test]
    fn submission_records_the_payload() {
        let mut event_loop = event_loop();
        event_loop.apply_selection(2);
        event_loop.submit_form().unwrap();

        assert_eq!(
            event_loop.state.last_submission.as_deref(),
            Some(r#"{"rate":2}"#)
        );
        assert!(last_entry(&event_loop).text.contains(r#"{"rate":2}"#));
    }

    #[test]
    fn submission_without_rating_warns() {
        let mut event_loop = event_loop();
        event_loop.submit_form().unwrap();

        assert_eq!(event_loop.state.last_submission, None);
        assert_eq!(last_entry(&event_loop).level, MessageLevel::Warning);
    }
}
