//! Border values.
//!
//! [CSS Backgrounds and Borders Level 3 § 4](https://www.w3.org/TR/css-backgrounds-3/#borders)

use serde::Serialize;

use crate::layout::EdgeSizes;

use super::color::Color;

/// One side of a border: thickness, corner radius and color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BorderSide {
    /// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub thickness: f32,
    /// [§ 5 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    ///
    /// Radius of the corner that starts this side (clockwise from top-left).
    /// Paint-only; never affects geometry.
    pub radius: f32,
    /// [§ 4.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    pub color: Color,
}

impl BorderSide {
    /// A side with the given thickness and color and square corners.
    #[must_use]
    pub const fn new(thickness: f32, color: Color) -> Self {
        Self {
            thickness,
            radius: 0.0,
            color,
        }
    }
}

/// The four border sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Border {
    /// Top side.
    pub top: BorderSide,
    /// Right side.
    pub right: BorderSide,
    /// Bottom side.
    pub bottom: BorderSide,
    /// Left side.
    pub left: BorderSide,
}

impl Border {
    /// The same side on all four edges.
    #[must_use]
    pub const fn all(side: BorderSide) -> Self {
        Self {
            top: side,
            right: side,
            bottom: side,
            left: side,
        }
    }

    /// A uniform border of `thickness` pixels.
    #[must_use]
    pub const fn uniform(thickness: f32, color: Color) -> Self {
        Self::all(BorderSide::new(thickness, color))
    }

    /// Set the corner radius on every side.
    #[must_use]
    pub const fn with_radius(mut self, radius: f32) -> Self {
        self.top.radius = radius;
        self.right.radius = radius;
        self.bottom.radius = radius;
        self.left.radius = radius;
        self
    }

    /// The thickness of each side as edge sizes.
    #[must_use]
    pub const fn widths(&self) -> EdgeSizes {
        EdgeSizes {
            top: self.top.thickness,
            right: self.right.thickness,
            bottom: self.bottom.thickness,
            left: self.left.thickness,
        }
    }

    /// Check if any side has a visible thickness.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .any(|side| side.thickness > 0.0 && !side.color.is_transparent())
    }

    /// Negative thicknesses and radii clamped to zero.
    pub(crate) fn sanitized(mut self) -> Self {
        for (name, side) in [
            ("border-top", &mut self.top),
            ("border-right", &mut self.right),
            ("border-bottom", &mut self.bottom),
            ("border-left", &mut self.left),
        ] {
            if !side.thickness.is_finite() || side.thickness < 0.0 {
                age_common::warning::warn_once(
                    "Style",
                    &format!("negative {name} thickness {}px clamped to 0", side.thickness),
                );
                side.thickness = 0.0;
            }
            side.radius = if side.radius.is_finite() {
                side.radius.max(0.0)
            } else {
                0.0
            };
        }
        self
    }
}
