//! Per-node layout output.

use serde::Serialize;

use super::box_model::{EdgeSizes, Rect, Size};

/// [§ 5.1 Intrinsic Sizes](https://www.w3.org/TR/css-sizing-3/#intrinsic)
///
/// A box's natural sizes, measured as border-box extents (content plus
/// padding plus border, margins excluded) and already clamped by the box's
/// own min/max sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IntrinsicSizes {
    /// "The smallest size a box could take that doesn't lead to overflow."
    pub min: Size<f32>,
    /// "The size a box would take if it had infinite available space."
    pub preferred: Size<f32>,
}

/// One positioned line of a text run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextLine {
    /// The characters on this line, trailing whitespace excluded.
    pub text: String,
    /// The line box: the line's advance width by the run's line height.
    pub rect: Rect,
    /// Absolute y coordinate of the line's baseline.
    pub baseline: f32,
}

/// The geometry computed for one node by a layout pass.
///
/// After [`run_layout_pass`](super::run_layout_pass) returns, every
/// rectangle is in absolute pixel coordinates. Hidden nodes keep the
/// default (all zero) result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutResult {
    /// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
    pub content_box: Rect,
    /// Content box plus padding.
    pub padding_box: Rect,
    /// Padding box plus border.
    pub border_box: Rect,
    /// Resolved margins around the border box.
    pub margin: EdgeSizes,
    /// Border-box size below which the content overflows.
    pub intrinsic_min_size: Size<f32>,
    /// Border-box size the content would take given unlimited space.
    pub intrinsic_preferred_size: Size<f32>,
    /// Distance from the top of the border box to the node's baseline.
    ///
    /// For text runs this is the first line's baseline; for containers it
    /// comes from the children. A box with no baseline of its own uses its
    /// bottom edge.
    pub baseline: f32,
    /// The padding box, for nodes with `Overflow::Clipping` or
    /// `Overflow::Scroll`.
    pub clip_rect: Option<Rect>,
    /// How far descendant content extends beyond the clip rectangle, per
    /// axis. Zero unless `Overflow::Scroll`.
    ///
    /// A descendant that clips or scrolls contributes only its own border
    /// box; content it hides does not count here.
    pub scrollable_overflow: Size<f32>,
    /// Positioned lines, for text runs.
    pub lines: Vec<TextLine>,
}

impl LayoutResult {
    /// The margin box.
    #[must_use]
    pub fn margin_box(&self) -> Rect {
        Rect {
            x: self.border_box.x - self.margin.left,
            y: self.border_box.y - self.margin.top,
            width: self.border_box.width + self.margin.horizontal(),
            height: self.border_box.height + self.margin.vertical(),
        }
    }

    /// Absolute y coordinate of the node's baseline.
    #[must_use]
    pub fn absolute_baseline(&self) -> f32 {
        self.border_box.y + self.baseline
    }

    /// Move every rectangle of this node (not its descendants).
    pub(crate) fn translate(&mut self, dx: f32, dy: f32) {
        self.content_box = self.content_box.translate(dx, dy);
        self.padding_box = self.padding_box.translate(dx, dy);
        self.border_box = self.border_box.translate(dx, dy);
        for line in &mut self.lines {
            line.rect = line.rect.translate(dx, dy);
            line.baseline += dy;
        }
    }
}
