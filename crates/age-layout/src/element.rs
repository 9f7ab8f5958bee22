//! Element kinds and their default styles.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::style::{StackDirection, StyleProperties};

/// The element types applications build box trees from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum ElementKind {
    /// A generic container that stacks its children vertically.
    Div,
    /// A run of text.
    Span,
    /// A container that stacks its children horizontally.
    FlexBox,
}

/// Whether a box holds children or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum BoxKind {
    /// Holds an ordered list of child boxes.
    Container,
    /// Holds a string and no children.
    TextRun,
}

impl ElementKind {
    /// The kind of box this element produces.
    #[must_use]
    pub const fn box_kind(self) -> BoxKind {
        match self {
            Self::Div | Self::FlexBox => BoxKind::Container,
            Self::Span => BoxKind::TextRun,
        }
    }
}

/// The base style an element starts with before any author style.
///
/// Only the stacking direction differs between the container kinds; every
/// other property keeps its initial value.
#[must_use]
pub fn default_style_for_element(kind: ElementKind) -> StyleProperties {
    match kind {
        ElementKind::Div => StyleProperties::new().stack_direction(StackDirection::Vertical),
        ElementKind::FlexBox => StyleProperties::new().stack_direction(StackDirection::Horizontal),
        ElementKind::Span => StyleProperties::new(),
    }
}
