//! Host-page elements the widget reads and writes.

use crate::color::{CssColor, RATING_LEVELS};

/// Element ids of the five icons in the host page template,
/// index-aligned with the color ramp.
pub const ICON_IDS: [&str; RATING_LEVELS] = ["I0", "I1", "I2", "I3", "I4"];

/// Element id of the output field read by the surrounding form.
pub const RATING_FIELD_ID: &str = "Rate";

/// One of the five icon elements. Its color is mutated only by the widget
/// and starts at the neutral `inherit` value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Icon {
    color: CssColor,
}

impl Icon {
    pub fn new() -> Self {
        Self {
            color: CssColor::Inherit,
        }
    }

    /// Current display color.
    pub fn color(&self) -> CssColor {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: CssColor) {
        self.color = color;
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::new()
    }
}

/// Output field holding the last-selected rating.
///
/// `None` until the first selection, like an untouched hidden form input.
/// Mutated only by the widget; read by the surrounding form on submission.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RatingField {
    value: Option<u8>,
}

impl RatingField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last-selected rating, if any selection has happened.
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: u8) {
        self.value = Some(value);
    }
}
