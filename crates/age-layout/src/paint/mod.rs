//! Painting: walk a laid-out tree and hand draw commands to a renderer.
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
//!
//! # Architecture
//!
//! ```text
//! Style → Layout → Paint → Renderer
//!                    ↓
//!              DisplayList
//! ```
//!
//! The engine never rasterizes. [`Painter`] calls a [`Renderer`] in tree
//! order with absolute geometry and the active clip rectangle;
//! [`DisplayList`] is a `Renderer` that records the calls.

mod display_list;
mod painter;

pub use display_list::{DisplayCommand, DisplayList};
pub use painter::{Painter, ScrollOffsets};

use crate::layout::{Point, Rect};
use crate::style::{Border, Color, FontDescriptor};

/// The drawing interface the engine consumes.
///
/// Every rectangle and point is in absolute pixels with scroll offsets and
/// transforms already applied. `clip` is the intersection of all clipping
/// ancestors' padding boxes; `None` means unclipped.
pub trait Renderer {
    /// Draw a box: background fill (if any) under its border.
    fn draw_rect(
        &mut self,
        border_box: Rect,
        border: &Border,
        background: Option<Color>,
        clip: Option<Rect>,
    );

    /// Draw one line of text whose line box starts at `position` and whose
    /// baseline sits at absolute y `baseline`.
    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        baseline: f32,
        font: &FontDescriptor,
        color: Color,
        clip: Option<Rect>,
    );
}
