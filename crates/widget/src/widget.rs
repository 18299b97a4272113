//! The rating widget context: five icon handles plus the output field.

use crate::color::{COLOR_RAMP, CssColor, RATING_LEVELS};
use crate::element::{Icon, RatingField};
use crate::error::WidgetError;

/// Owned rating context: an ordered array of five icons and one output
/// field, addressed directly instead of through ambient lookup-by-id.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RatingWidget {
    icons: [Icon; RATING_LEVELS],
    field: RatingField,
}

impl RatingWidget {
    /// Create a widget with all icons neutral and no rating recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a rating selection.
    ///
    /// Resets every icon to `inherit`, colors the icon at `index` from the
    /// ramp, and stores `index` in the output field. Idempotent: repeating
    /// the same index yields the same visible state.
    ///
    /// An out-of-range index is rejected before any mutation, so a failed
    /// call leaves the widget exactly as it was.
    pub fn select(&mut self, index: usize) -> Result<(), WidgetError> {
        if index >= RATING_LEVELS {
            return Err(WidgetError::IndexOutOfRange { index });
        }

        for icon in &mut self.icons {
            icon.set_color(CssColor::Inherit);
        }
        self.icons[index].set_color(COLOR_RAMP[index]);
        self.field.set_value(index as u8);

        Ok(())
    }

    /// The five icons, index-aligned with the ramp.
    pub fn icons(&self) -> &[Icon; RATING_LEVELS] {
        &self.icons
    }

    /// Icon at `index`, if in range.
    pub fn icon(&self, index: usize) -> Option<&Icon> {
        self.icons.get(index)
    }

    /// Last-selected rating, if any selection has happened.
    pub fn rating(&self) -> Option<u8> {
        self.field.value()
    }

    pub(crate) fn icon_mut(&mut self, index: usize) -> Option<&mut Icon> {
        self.icons.get_mut(index)
    }

    pub(crate) fn field_mut(&mut self) -> &mut RatingField {
        &mut self.field
    }
}
