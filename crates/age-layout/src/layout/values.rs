//! Axis and available-space values shared by the layout passes.

use std::fmt;

use serde::Serialize;

use crate::style::StackDirection;

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    /// The x axis (widths).
    Horizontal,
    /// The y axis (heights).
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// The main axis of a container stacking in `direction`.
    #[must_use]
    pub const fn main_of(direction: StackDirection) -> Self {
        match direction {
            StackDirection::Horizontal => Self::Horizontal,
            StackDirection::Vertical => Self::Vertical,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "width",
            Self::Vertical => "height",
        })
    }
}

/// [§ 2.1 Available Space](https://www.w3.org/TR/css-sizing-3/#available)
///
/// "A size that can be either a definite size or an indefinite size."
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum AvailableSpace {
    /// A known pixel extent.
    Definite(f32),
    /// Content-driven: the box takes its preferred size.
    #[default]
    Indefinite,
}

impl AvailableSpace {
    /// The pixel extent, if definite.
    #[must_use]
    pub const fn definite(self) -> Option<f32> {
        match self {
            Self::Definite(px) => Some(px),
            Self::Indefinite => None,
        }
    }
}

impl From<Option<f32>> for AvailableSpace {
    fn from(value: Option<f32>) -> Self {
        value.map_or(Self::Indefinite, Self::Definite)
    }
}

impl From<f32> for AvailableSpace {
    fn from(px: f32) -> Self {
        Self::Definite(px)
    }
}
