//! Font selection values.
//!
//! [CSS Fonts Level 4](https://www.w3.org/TR/css-fonts-4/)

use serde::Serialize;

use super::length::DEFAULT_FONT_SIZE_PX;

/// Font family used when neither the node nor any ancestor sets one.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// The resolved font a text run is measured and drawn with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontDescriptor {
    /// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
    pub family: String,
    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    ///
    /// Size in pixels, always positive after resolution.
    pub size: f32,
}

impl FontDescriptor {
    /// A font with the given family and pixel size.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PX)
    }
}
