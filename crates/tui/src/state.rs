//! Application state for the rating page.

use rating_widget::{RATING_LEVELS, RatingWidget};

/// Mutable application state: the widget plus page-level UI context.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The rating widget embedded in this page.
    pub widget: RatingWidget,
    /// Icon the hover cursor currently sits on.
    pub cursor: usize,
    /// Last serialized form submission, if any.
    pub last_submission: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the hover cursor, clamped to the five icons.
    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = self
            .cursor
            .saturating_add_signed(delta)
            .min(RATING_LEVELS - 1);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            widget: RatingWidget::new(),
            cursor: 0,
            last_submission: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut state = AppState::new();
        state.move_cursor(-1);
        assert_eq!(state.cursor, 0);

        state.move_cursor(10);
        assert_eq!(state.cursor, RATING_LEVELS - 1);

        state.move_cursor(-2);
        assert_eq!(state.cursor, 2);
    }
}
