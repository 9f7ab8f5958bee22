//! Conversions from style lengths to border-box pixel sizes.
//!
//! [§ 4.4 box-sizing](https://www.w3.org/TR/css-box-4/#box-sizing)
//!
//! Every size the layout passes exchange is a border-box extent. These
//! helpers apply `box-sizing` and the min/max clamp in one place.

use age_common::warning::warn_once;

use crate::style::{BoxSizing, EffectiveStyle, Length};

use super::box_model::EdgeSizes;
use super::values::Axis;

/// The resolved edges of one box.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Edges {
    pub(crate) padding: EdgeSizes,
    pub(crate) border: EdgeSizes,
    pub(crate) margin: EdgeSizes,
}

impl Edges {
    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    ///
    /// "The percentage is calculated with respect to the width of the
    /// generated box's containing block."
    pub(crate) fn resolve(style: &EffectiveStyle, reference_width: Option<f32>) -> Self {
        Self {
            padding: style.padding.resolve(reference_width),
            border: style.border.widths(),
            margin: style.margin.resolve(reference_width),
        }
    }

    /// Padding plus border.
    pub(crate) fn inset(&self) -> EdgeSizes {
        self.padding + self.border
    }
}

/// Convert a size-like length into a border-box extent.
///
/// Under `BoxSizing::Content` the length is the content box and the inset
/// is added. Under `BoxSizing::Border` the length is the border box itself,
/// even when padding and border exceed it; the content box then collapses
/// to zero in [`BoxDimensions::from_border_box`].
///
/// [`BoxDimensions::from_border_box`]: super::box_model::BoxDimensions::from_border_box
pub(crate) fn border_box_length(
    style: &EffectiveStyle,
    length: Length,
    reference: Option<f32>,
    inset: f32,
) -> Option<f32> {
    let value = length.resolve(reference)?;
    Some(match style.box_sizing {
        BoxSizing::Content => value + inset,
        BoxSizing::Border => value,
    })
}

/// The definite border-box size on `axis`, if the style gives one.
pub(crate) fn definite_size(
    style: &EffectiveStyle,
    axis: Axis,
    reference: Option<f32>,
    inset: f32,
) -> Option<f32> {
    border_box_length(style, style.size(axis), reference, inset)
}

/// [§ 10.4 Minimum and maximum widths](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
///
/// Clamp a border-box extent into `[MinSize, MaxSize]`. The maximum is
/// applied first, so when the bounds cross the minimum wins.
///
/// An auto size never ends up smaller than padding plus border unless a
/// bound forces it. A definite size is taken as given.
pub(crate) fn clamp_size(
    style: &EffectiveStyle,
    axis: Axis,
    value: f32,
    reference: Option<f32>,
    inset: f32,
) -> f32 {
    let mut clamped = if definite_size(style, axis, reference, inset).is_some() {
        value
    } else {
        value.max(inset)
    };
    let max = border_box_length(style, style.max_size(axis), reference, inset);
    let min = border_box_length(style, style.min_size(axis), reference, inset);
    if let (Some(min), Some(max)) = (min, max)
        && max < min
    {
        warn_once(
            "Layout",
            &format!("resolved max {axis} {max}px is below min {axis} {min}px; the minimum wins"),
        );
    }
    if let Some(max) = max {
        clamped = clamped.min(max);
    }
    if let Some(min) = min {
        clamped = clamped.max(min);
    }
    clamped
}
