//! The sparse, per-node style property set.
//!
//! Every field is independently optional. An unset field falls back to the
//! parent's resolved value (for inherited properties) or to the initial
//! value during [resolution](super::resolve_style).

use serde::Serialize;
use strum_macros::Display;

use crate::layout::Rect;

use super::values::{Border, Color, EdgeLengths, Length};

/// [§ 4.4 box-sizing](https://www.w3.org/TR/css-box-4/#box-sizing)
///
/// Which box the `Size`, `MinSize` and `MaxSize` properties measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum BoxSizing {
    /// "content-box: the specified width and height apply to the content box."
    #[default]
    Content,
    /// "border-box: ... the specified width and height apply to the border
    /// box of the element." Padding and border shrink the content box.
    Border,
}

/// [§ 5.1 'flex-direction'](https://www.w3.org/TR/css-flexbox-1/#flex-direction-property)
///
/// The axis children are stacked along (the main axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum StackDirection {
    /// Children are placed left to right.
    Horizontal,
    /// Children are placed top to bottom.
    #[default]
    Vertical,
}

/// [§ 8.3 Cross-axis Alignment](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
///
/// Per-item placement along the container's cross axis. `Left`/`Top` are
/// synonyms for the leading edge and `Right`/`Bottom` for the trailing edge
/// whichever axis is the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Alignment {
    /// Leading cross edge.
    Start,
    /// Centered on the cross axis.
    Center,
    /// Trailing cross edge.
    End,
    /// Leading cross edge.
    Left,
    /// Trailing cross edge.
    Right,
    /// Leading cross edge.
    Top,
    /// Trailing cross edge.
    Bottom,
    /// Align the item's baseline with the line's shared baseline.
    Baseline,
    /// Fill the cross axis (also the behavior when no alignment is set).
    Stretch,
}

/// Where an item ends up on the cross axis, with the synonyms collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CrossPlacement {
    Leading,
    Center,
    Trailing,
    Baseline,
    Stretch,
}

impl Alignment {
    /// Collapse the physical synonyms into a placement.
    pub(crate) const fn placement(self) -> CrossPlacement {
        match self {
            Self::Start | Self::Left | Self::Top => CrossPlacement::Leading,
            Self::End | Self::Right | Self::Bottom => CrossPlacement::Trailing,
            Self::Center => CrossPlacement::Center,
            Self::Baseline => CrossPlacement::Baseline,
            Self::Stretch => CrossPlacement::Stretch,
        }
    }
}

/// [§ 8.2 'justify-content'](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
///
/// "The justify-content property aligns flex items along the main axis of
/// the current line of the flex container."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum ContentJustification {
    /// "Flex items are packed toward the start of the line."
    #[default]
    Start,
    /// "Flex items are packed toward the center of the line."
    Center,
    /// "Flex items are packed toward the end of the line."
    End,
    /// "Flex items are evenly distributed in the line."
    SpaceBetween,
    /// "Flex items are evenly distributed in the line, with half-size
    /// spaces on either end."
    SpaceAround,
    /// Every gap, including the leading and trailing ones, is equal.
    SpaceEvenly,
}

/// [§ 11.1.1 'overflow'](https://www.w3.org/TR/CSS2/visufx.html#overflow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum Overflow {
    /// Content may paint outside the box.
    #[default]
    None,
    /// Content is clipped to the padding box.
    Clipping,
    /// Content is clipped and the overflowing extent is scrollable.
    Scroll,
}

/// [§ 5.2 'text-wrap-mode'](https://www.w3.org/TR/css-text-4/#text-wrap-mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
pub enum TextWrap {
    /// Lines may break at whitespace.
    #[default]
    Wrap,
    /// Lines only break at forced breaks.
    NoWrap,
}

/// [CSS Transforms Level 1](https://www.w3.org/TR/css-transforms-1/)
///
/// A paint-time translation. Transforms never affect layout geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Transform {
    /// Horizontal offset in pixels.
    pub translate_x: f32,
    /// Vertical offset in pixels.
    pub translate_y: f32,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// A pure translation.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
        }
    }

    /// Apply the transform to a rectangle.
    #[must_use]
    pub fn apply(&self, rect: Rect) -> Rect {
        rect.translate(self.translate_x, self.translate_y)
    }

    /// Compose: `self` followed by `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self::translate(
            self.translate_x + other.translate_x,
            self.translate_y + other.translate_y,
        )
    }
}

/// A sparse style record. `None` means "not set here".
///
/// Built with the chained setters:
///
/// ```
/// use age_layout::style::{StyleProperties, StackDirection, px};
///
/// let style = StyleProperties::new()
///     .width(px(300.0))
///     .stack_direction(StackDirection::Horizontal);
/// assert_eq!(style.width, Some(px(300.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleProperties {
    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    pub width: Option<Length>,
    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    pub height: Option<Length>,
    /// [§ 10.4 'min-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    pub min_width: Option<Length>,
    /// [§ 10.7 'min-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    pub min_height: Option<Length>,
    /// [§ 10.4 'max-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    pub max_width: Option<Length>,
    /// [§ 10.7 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    pub max_height: Option<Length>,
    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    pub margin: Option<EdgeLengths>,
    /// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    pub padding: Option<EdgeLengths>,
    /// [§ 8.5 Border properties](https://www.w3.org/TR/CSS2/box.html#border-properties)
    pub border: Option<Border>,
    /// Which box `width`/`height` measure.
    pub box_sizing: Option<BoxSizing>,
    /// Main axis for children.
    pub stack_direction: Option<StackDirection>,
    /// This node's own cross-axis placement inside its parent.
    pub alignment: Option<Alignment>,
    /// Default cross-axis placement for this node's children.
    pub items_alignment: Option<Alignment>,
    /// Main-axis distribution of leftover space among children.
    pub content_justification: Option<ContentJustification>,
    /// Clipping behavior.
    pub overflow: Option<Overflow>,
    /// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop) (inherited)
    pub font_family: Option<String>,
    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop) (inherited)
    pub font_size: Option<f32>,
    /// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property) (inherited)
    pub color: Option<Color>,
    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    pub background_color: Option<Color>,
    /// Line wrapping for text runs (inherited).
    pub text_wrap: Option<TextWrap>,
    /// Paint-time transform.
    pub transform: Option<Transform>,
    /// A hidden node and its subtree take no space and paint nothing.
    pub hidden: Option<bool>,
}

/// Generates a chained setter per field.
macro_rules! setters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

impl StyleProperties {
    /// An empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        /// Set `width`.
        width: Length,
        /// Set `height`.
        height: Length,
        /// Set `min_width`.
        min_width: Length,
        /// Set `min_height`.
        min_height: Length,
        /// Set `max_width`.
        max_width: Length,
        /// Set `max_height`.
        max_height: Length,
        /// Set `margin`.
        margin: EdgeLengths,
        /// Set `padding`.
        padding: EdgeLengths,
        /// Set `border`.
        border: Border,
        /// Set `box_sizing`.
        box_sizing: BoxSizing,
        /// Set `stack_direction`.
        stack_direction: StackDirection,
        /// Set `alignment`.
        alignment: Alignment,
        /// Set `items_alignment`.
        items_alignment: Alignment,
        /// Set `content_justification`.
        content_justification: ContentJustification,
        /// Set `overflow`.
        overflow: Overflow,
        /// Set `font_family`.
        font_family: String,
        /// Set `font_size`.
        font_size: f32,
        /// Set `color`.
        color: Color,
        /// Set `background_color`.
        background_color: Color,
        /// Set `text_wrap`.
        text_wrap: TextWrap,
        /// Set `transform`.
        transform: Transform,
        /// Set `hidden`.
        hidden: bool,
    }

    /// Set both `width` and `height`.
    #[must_use]
    pub fn size(self, width: impl Into<Length>, height: impl Into<Length>) -> Self {
        self.width(width).height(height)
    }

    /// Copy every field that is set in `other` over this set.
    ///
    /// This is the per-field override used for pseudo-state cascading: later
    /// sources win field by field, unset fields leave earlier values alone.
    pub fn merge_from(&mut self, other: &Self) {
        macro_rules! merge {
            ($($field:ident),*) => {
                $(
                    if let Some(value) = &other.$field {
                        self.$field = Some(value.clone());
                    }
                )*
            };
        }
        merge!(
            width,
            height,
            min_width,
            min_height,
            max_width,
            max_height,
            margin,
            padding,
            border,
            box_sizing,
            stack_direction,
            alignment,
            items_alignment,
            content_justification,
            overflow,
            font_family,
            font_size,
            color,
            background_color,
            text_wrap,
            transform,
            hidden
        );
    }

    /// A copy of `self` with `other` merged over it.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.merge_from(other);
        out
    }
}
