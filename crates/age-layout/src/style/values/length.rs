//! Length values.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;

use age_common::warning::warn_once;

/// Default font size when neither the node nor any ancestor sets one.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// A size-like value: a definite pixel length, a percentage of some
/// reference length, or `Auto` (derived from content during layout).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum Length {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px(f32),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "Percentages are always relative to another quantity."
    Percent(f32),
    /// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
    ///
    /// "This keyword allows the user agent to compute the value based on
    /// other properties."
    #[default]
    Auto,
}

impl Length {
    /// A zero pixel length.
    pub const ZERO: Self = Self::Px(0.0);

    /// [§ 6.1 Used Values](https://www.w3.org/TR/css-cascade-4/#used)
    ///
    /// Resolve to pixels against `reference`.
    ///
    /// Returns `None` for `Auto`, and for a percentage whose reference is
    /// indefinite: such a percentage behaves as `Auto` until the reference
    /// becomes definite.
    #[must_use]
    pub fn resolve(self, reference: Option<f32>) -> Option<f32> {
        match self {
            Self::Px(px) => Some(px),
            Self::Percent(pct) => reference.map(|r| pct * r / 100.0),
            Self::Auto => None,
        }
    }

    /// Resolve an edge length (padding, margin, border-like values) where
    /// `Auto` and unresolvable percentages mean zero.
    #[must_use]
    pub fn resolve_or_zero(self, reference: Option<f32>) -> f32 {
        self.resolve(reference).unwrap_or(0.0)
    }

    /// Replace a NaN or infinite length with zero, reporting the recovery.
    #[must_use]
    pub fn finite(self, property: &str) -> Self {
        match self {
            Self::Px(v) | Self::Percent(v) if !v.is_finite() => {
                warn_once("Style", &format!("non-finite {property} {v} replaced by 0"));
                Self::ZERO
            }
            other => other,
        }
    }

    /// Clamp a negative or non-finite length to zero, reporting the recovery.
    ///
    /// `property` names the property for the warning message.
    #[must_use]
    pub fn non_negative(self, property: &str) -> Self {
        match self.finite(property) {
            Self::Px(v) if v < 0.0 => {
                warn_once("Style", &format!("negative {property} {v}px clamped to 0"));
                Self::Px(0.0)
            }
            Self::Percent(v) if v < 0.0 => {
                warn_once("Style", &format!("negative {property} {v}% clamped to 0"));
                Self::Percent(0.0)
            }
            other => other,
        }
    }
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Self::Px(px)
    }
}

/// Shorthand for [`Length::Px`].
#[must_use]
pub const fn px(value: f32) -> Length {
    Length::Px(value)
}

/// Shorthand for [`Length::Percent`].
#[must_use]
pub const fn percent(value: f32) -> Length {
    Length::Percent(value)
}
