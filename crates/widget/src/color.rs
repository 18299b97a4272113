//! Display colors and the fixed rating ramp.

use std::fmt;

/// Number of rating levels (and icons) in the widget.
pub const RATING_LEVELS: usize = 5;

/// CSS-style color value carried by an icon.
///
/// `Inherit` is the neutral value: the icon takes whatever color the host
/// page styles it with. The [`fmt::Display`] impl produces the exact CSS
/// text (`inherit`, `red`, `#9AFF00`) so hosts can write it back into a
/// style attribute unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CssColor {
    /// Neutral value; defers to the host page's own styling.
    Inherit,
    /// Named CSS color (`red`, `orange`, ...).
    Named(&'static str),
    /// RGB triple, rendered as an uppercase hex code.
    Rgb { r: u8, g: u8, b: u8 },
}

impl CssColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Returns true for the neutral `inherit` value.
    pub fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Named(name) => f.write_str(name),
            Self::Rgb { r, g, b } => write!(f, "#{r:02X}{g:02X}{b:02X}"),
        }
    }
}

/// One color per rating level, index-aligned and lowest to highest.
///
/// Constant for the process lifetime.
pub const COLOR_RAMP: [CssColor; RATING_LEVELS] = [
    CssColor::Named("red"),
    CssColor::Named("orange"),
    CssColor::Named("yellow"),
    CssColor::rgb(0x9A, 0xFF, 0x00),
    CssColor::rgb(0x09, 0xB4, 0x11),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_text_matches_page_values() {
        assert_eq!(COLOR_RAMP[0].to_string(), "red");
        assert_eq!(COLOR_RAMP[1].to_string(), "orange");
        assert_eq!(COLOR_RAMP[2].to_string(), "yellow");
        assert_eq!(COLOR_RAMP[3].to_string(), "#9AFF00");
        assert_eq!(COLOR_RAMP[4].to_string(), "#09B411");
        assert_eq!(CssColor::Inherit.to_string(), "inherit");
    }

    #[test]
    fn ramp_has_no_neutral_entries() {
        assert!(COLOR_RAMP.iter().all(|color| !color.is_inherit()));
    }
}
