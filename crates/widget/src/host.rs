//! Host-document seam for pages that own their elements.
//!
//! Pages that keep their elements in a document of their own expose them
//! by id (`I0`..`I4`, `Rate`) through [`HostDocument`]. A missing element
//! surfaces as a diagnosable [`WidgetError::ElementNotFound`] instead of a
//! silent fault.

use crate::color::{COLOR_RAMP, CssColor, RATING_LEVELS};
use crate::element::{ICON_IDS, Icon, RATING_FIELD_ID, RatingField};
use crate::error::WidgetError;
use crate::widget::RatingWidget;

/// Read/write access to the rating elements of a host page, addressed by
/// element id.
pub trait HostDocument {
    /// Icon element with the given id, if present.
    fn icon_mut(&mut self, id: &str) -> Option<&mut Icon>;

    /// Output field with the given id, if present.
    fn field_mut(&mut self, id: &str) -> Option<&mut RatingField>;
}

/// Apply a rating selection to a host document.
///
/// Every required element is located before anything is mutated, so a
/// missing element (or an out-of-range index) never leaves partial state
/// behind.
pub fn select_rating<D: HostDocument + ?Sized>(
    doc: &mut D,
    index: usize,
) -> Result<(), WidgetError> {
    if index >= RATING_LEVELS {
        return Err(WidgetError::IndexOutOfRange { index });
    }

    // Verification pass: all elements must exist up front.
    for id in ICON_IDS {
        if doc.icon_mut(id).is_none() {
            return Err(WidgetError::ElementNotFound { id: id.to_string() });
        }
    }
    if doc.field_mut(RATING_FIELD_ID).is_none() {
        return Err(WidgetError::ElementNotFound {
            id: RATING_FIELD_ID.to_string(),
        });
    }

    for (slot, id) in ICON_IDS.iter().enumerate() {
        let icon = doc
            .icon_mut(id)
            .ok_or_else(|| WidgetError::ElementNotFound { id: id.to_string() })?;
        let color = if slot == index {
            COLOR_RAMP[index]
        } else {
            CssColor::Inherit
        };
        icon.set_color(color);
    }

    let field = doc
        .field_mut(RATING_FIELD_ID)
        .ok_or_else(|| WidgetError::ElementNotFound {
            id: RATING_FIELD_ID.to_string(),
        })?;
    field.set_value(index as u8);

    Ok(())
}

/// The owned widget is itself a host document over its own slots, keeping
/// the id mapping (`I0`..`I4`, `Rate`) in one place.
impl HostDocument for RatingWidget {
    fn icon_mut(&mut self, id: &str) -> Option<&mut Icon> {
        let slot = ICON_IDS.iter().position(|icon_id| *icon_id == id)?;
        self.icon_mut(slot)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut RatingField> {
        (id == RATING_FIELD_ID).then(|| self.field_mut())
    }
}
