//! Widgets composing the rating page.

pub mod footer;
pub mod form;
pub mod header;
pub mod messages;
pub mod rating_bar;
