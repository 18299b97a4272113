//! Five-level rating widget core.
//!
//! Selecting a rating resets all five icons to the neutral `inherit`
//! color, colors the icon at the selected index from a fixed color ramp,
//! and writes the numeric rating into an output field read by the
//! surrounding form.
//!
//! # Architecture
//!
//! The crate is framework-agnostic: it models the widget as an owned
//! context ([`RatingWidget`]) holding five icon handles and one output
//! field, so no ambient document lookup is needed and invalid indices are
//! the only runtime failure of [`RatingWidget::select`]. Hosts that keep
//! their elements in a document of their own instead implement
//! [`HostDocument`] and drive [`select_rating`], which surfaces missing
//! elements as [`WidgetError::ElementNotFound`].

mod color;
mod element;
mod error;
mod host;
mod widget;

pub use color::{COLOR_RAMP, CssColor, RATING_LEVELS};
pub use element::{ICON_IDS, Icon, RATING_FIELD_ID, RatingField};
pub use error::WidgetError;
pub use host::{HostDocument, select_rating};
pub use widget::RatingWidget;
