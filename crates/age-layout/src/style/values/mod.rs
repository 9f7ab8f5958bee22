//! Style value types.

pub mod border;
pub mod color;
pub mod font;
pub mod length;

use serde::Serialize;

use crate::layout::EdgeSizes;

pub use border::{Border, BorderSide};
pub use color::Color;
pub use font::{DEFAULT_FONT_FAMILY, FontDescriptor};
pub use length::{DEFAULT_FONT_SIZE_PX, Length, percent, px};

/// [§ 6 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// Edge sizes storing unresolved length values (padding and margin).
/// Resolved to pixels during layout once the reference width is known.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EdgeLengths {
    /// Top edge (unresolved).
    pub top: Length,
    /// Right edge (unresolved).
    pub right: Length,
    /// Bottom edge (unresolved).
    pub bottom: Length,
    /// Left edge (unresolved).
    pub left: Length,
}

impl EdgeLengths {
    /// All four edges zero.
    pub const ZERO: Self = Self::all(Length::ZERO);

    /// The same length on every edge.
    #[must_use]
    pub const fn all(value: Length) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `vertical` on top/bottom, `horizontal` on left/right.
    #[must_use]
    pub const fn symmetric(vertical: Length, horizontal: Length) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Explicit values, clockwise from the top.
    #[must_use]
    pub const fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// [§ 6.1 Used Values](https://www.w3.org/TR/css-cascade-4/#used)
    ///
    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    /// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    ///
    /// Percentages on every edge resolve against the reference *width*, even
    /// top and bottom. `Auto` and unresolvable percentages become zero.
    #[must_use]
    pub fn resolve(&self, reference_width: Option<f32>) -> EdgeSizes {
        EdgeSizes {
            top: self.top.resolve_or_zero(reference_width),
            right: self.right.resolve_or_zero(reference_width),
            bottom: self.bottom.resolve_or_zero(reference_width),
            left: self.left.resolve_or_zero(reference_width),
        }
    }

    /// Non-finite edges replaced by zero. Margins keep their sign.
    pub(crate) fn finite(self, property: &str) -> Self {
        Self {
            top: self.top.finite(&format!("{property}-top")),
            right: self.right.finite(&format!("{property}-right")),
            bottom: self.bottom.finite(&format!("{property}-bottom")),
            left: self.left.finite(&format!("{property}-left")),
        }
    }

    /// Negative values clamped to zero (padding cannot be negative).
    pub(crate) fn non_negative(self, property: &str) -> Self {
        Self {
            top: self.top.non_negative(&format!("{property}-top")),
            right: self.right.non_negative(&format!("{property}-right")),
            bottom: self.bottom.non_negative(&format!("{property}-bottom")),
            left: self.left.non_negative(&format!("{property}-left")),
        }
    }
}
