//! Style resolution: sparse properties in, one effective style out.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."

use serde::Serialize;

use age_common::warning::warn_once;

use crate::layout::Axis;

use super::properties::{
    Alignment, BoxSizing, ContentJustification, Overflow, StackDirection, StyleProperties,
    TextWrap, Transform,
};
use super::values::{Border, Color, DEFAULT_FONT_SIZE_PX, EdgeLengths, FontDescriptor, Length};

/// The fully resolved style of one node. Every field has a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveStyle {
    /// Preferred width.
    pub width: Length,
    /// Preferred height.
    pub height: Length,
    /// Lower width bound (`Auto` = none).
    pub min_width: Length,
    /// Lower height bound (`Auto` = none).
    pub min_height: Length,
    /// Upper width bound (`Auto` = none).
    pub max_width: Length,
    /// Upper height bound (`Auto` = none).
    pub max_height: Length,
    /// Outer spacing; percentages resolve against the parent's content width.
    pub margin: EdgeLengths,
    /// Inner spacing; percentages resolve against the parent's content width.
    pub padding: EdgeLengths,
    /// Border sides.
    pub border: Border,
    /// Which box the size properties measure.
    pub box_sizing: BoxSizing,
    /// Main axis for children.
    pub stack_direction: StackDirection,
    /// Own cross-axis placement; `None` defers to the parent's `items_alignment`.
    pub alignment: Option<Alignment>,
    /// Default cross-axis placement for children; `None` means stretch.
    pub items_alignment: Option<Alignment>,
    /// Main-axis distribution of leftover space.
    pub content_justification: ContentJustification,
    /// Clipping behavior.
    pub overflow: Overflow,
    /// Inherited font.
    pub font: FontDescriptor,
    /// Inherited text color.
    pub color: Color,
    /// Fill behind the border box.
    pub background_color: Option<Color>,
    /// Inherited wrapping mode.
    pub text_wrap: TextWrap,
    /// Paint-time transform.
    pub transform: Transform,
    /// Hidden nodes take no space and paint nothing.
    pub hidden: bool,
}

impl Default for EffectiveStyle {
    fn default() -> Self {
        resolve_style(&StyleProperties::default(), &[], None)
    }
}

impl EffectiveStyle {
    /// The preferred size on `axis`.
    #[must_use]
    pub const fn size(&self, axis: Axis) -> Length {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The lower bound on `axis`.
    #[must_use]
    pub const fn min_size(&self, axis: Axis) -> Length {
        match axis {
            Axis::Horizontal => self.min_width,
            Axis::Vertical => self.min_height,
        }
    }

    /// The upper bound on `axis`.
    #[must_use]
    pub const fn max_size(&self, axis: Axis) -> Length {
        match axis {
            Axis::Horizontal => self.max_width,
            Axis::Vertical => self.max_height,
        }
    }

    /// The effective cross-axis alignment of this node inside a parent whose
    /// `items_alignment` is `parent_default`.
    #[must_use]
    pub fn effective_alignment(&self, parent_default: Option<Alignment>) -> Alignment {
        self.alignment
            .or(parent_default)
            .unwrap_or(Alignment::Stretch)
    }
}

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
///
/// Resolve a node's style.
///
/// `overrides` are the pseudo-state overrides that currently apply, in
/// precedence order; later entries win per field. `parent` supplies the
/// inherited properties (`color`, `font_family`, `font_size`,
/// `text_wrap`). Out-of-range values are clamped, never rejected.
#[must_use]
pub fn resolve_style(
    base: &StyleProperties,
    overrides: &[&StyleProperties],
    parent: Option<&EffectiveStyle>,
) -> EffectiveStyle {
    let mut specified = base.clone();
    for layer in overrides {
        specified.merge_from(layer);
    }

    // [§ 7 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
    //
    // "The inherited value of a property on an element is the computed value
    // of the property on the element's parent element."
    let inherited_font = parent.map(|p| p.font.clone()).unwrap_or_default();
    let font_size = match specified.font_size {
        Some(size) if size > 0.0 => size,
        Some(size) => {
            warn_once(
                "Style",
                &format!("non-positive font-size {size}px replaced by the inherited size"),
            );
            inherited_font.size
        }
        None => inherited_font.size,
    };
    let font = FontDescriptor::new(
        specified
            .font_family
            .clone()
            .unwrap_or(inherited_font.family),
        if font_size.is_finite() {
            font_size
        } else {
            DEFAULT_FONT_SIZE_PX
        },
    );

    let style = EffectiveStyle {
        width: specified.width.unwrap_or_default().non_negative("width"),
        height: specified.height.unwrap_or_default().non_negative("height"),
        min_width: specified.min_width.unwrap_or_default().non_negative("min-width"),
        min_height: specified
            .min_height
            .unwrap_or_default()
            .non_negative("min-height"),
        max_width: specified.max_width.unwrap_or_default().non_negative("max-width"),
        max_height: specified
            .max_height
            .unwrap_or_default()
            .non_negative("max-height"),
        margin: specified.margin.unwrap_or(EdgeLengths::ZERO).finite("margin"),
        padding: specified
            .padding
            .unwrap_or(EdgeLengths::ZERO)
            .non_negative("padding"),
        border: specified.border.unwrap_or_default().sanitized(),
        box_sizing: specified.box_sizing.unwrap_or_default(),
        stack_direction: specified.stack_direction.unwrap_or_default(),
        alignment: specified.alignment,
        items_alignment: specified.items_alignment,
        content_justification: specified.content_justification.unwrap_or_default(),
        overflow: specified.overflow.unwrap_or_default(),
        font,
        color: specified
            .color
            .or_else(|| parent.map(|p| p.color))
            .unwrap_or_default(),
        background_color: specified.background_color,
        text_wrap: specified
            .text_wrap
            .or_else(|| parent.map(|p| p.text_wrap))
            .unwrap_or_default(),
        transform: specified.transform.unwrap_or_default(),
        hidden: specified.hidden.unwrap_or(false),
    };

    report_inverted_bounds(&style);
    style
}

/// [§ 10.4 Minimum and maximum widths](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
///
/// "If the computed value of 'min-width' is greater than the value of
/// 'max-width', 'max-width' is set to the value of 'min-width'."
///
/// The layout clamp already lets the minimum win; this only reports it.
/// Bounds in different units cross only once resolved, which the layout
/// clamp reports.
fn report_inverted_bounds(style: &EffectiveStyle) {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let unit = match (style.min_size(axis), style.max_size(axis)) {
            (Length::Px(min), Length::Px(max)) if max < min => Some(("px", min, max)),
            (Length::Percent(min), Length::Percent(max)) if max < min => Some(("%", min, max)),
            _ => None,
        };
        if let Some((unit, min, max)) = unit {
            warn_once(
                "Style",
                &format!("max {axis} {max}{unit} is below min {axis} {min}{unit}; the minimum wins"),
            );
        }
    }
}
