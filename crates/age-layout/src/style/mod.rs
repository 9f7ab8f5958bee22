//! Style model: sparse properties, pseudo-state overrides, and resolution
//! into one effective style per node.
//!
//! # Module Structure
//!
//! - [`values`] - Lengths, colors, borders, fonts
//! - [`properties`] - The sparse [`StyleProperties`] record and its enums
//! - [`pseudo`] - Hover/Focus/Active states and their overrides
//! - [`computed`] - [`resolve_style`] and the resolved [`EffectiveStyle`]

pub mod computed;
pub mod properties;
pub mod pseudo;
pub mod values;

pub use computed::{EffectiveStyle, resolve_style};
pub(crate) use properties::CrossPlacement;
pub use properties::{
    Alignment, BoxSizing, ContentJustification, Overflow, StackDirection, StyleProperties,
    TextWrap, Transform,
};
pub use pseudo::{PseudoState, PseudoStates, StateStyles};
pub use values::{
    Border, BorderSide, Color, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PX, EdgeLengths,
    FontDescriptor, Length, percent, px,
};
