//! Widget errors.

use crate::color::RATING_LEVELS;

/// Errors raised while applying a rating selection.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum WidgetError {
    /// An expected icon or output field is absent from the host document.
    #[error("element `{id}` not found in host document")]
    ElementNotFound {
        /// Id of the missing element.
        id: String,
    },

    /// The selected rating lies outside the supported range.
    #[error("rating index {index} out of range (0..{max})", max = RATING_LEVELS)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
}
