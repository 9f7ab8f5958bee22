//! Painter - walks a laid-out box tree and drives a [`Renderer`].
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)

use std::collections::HashMap;

use crate::element::BoxKind;
use crate::error::Result;
use crate::layout::{Point, Rect, Size};
use crate::style::{Overflow, Transform};
use crate::tree::{BoxTree, NodeId};

use super::Renderer;

/// Scroll positions of scroll containers, owned by the input layer.
///
/// An offset moves a container's content up and to the left. Offsets are
/// clamped to the container's scrollable overflow when painting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollOffsets {
    offsets: HashMap<NodeId, Point>,
}

impl ScrollOffsets {
    /// No scrolling anywhere.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scroll position of `id`.
    pub fn set(&mut self, id: NodeId, offset: Point) {
        let _ = self.offsets.insert(id, offset);
    }

    /// The raw scroll position of `id`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Point {
        self.offsets.get(&id).copied().unwrap_or_default()
    }

    /// The scroll position of `id`, clamped to `[0, max]` per axis.
    #[must_use]
    pub fn clamped(&self, id: NodeId, max: Size<f32>) -> Point {
        let offset = self.get(id);
        Point::new(
            offset.x.clamp(0.0, max.width.max(0.0)),
            offset.y.clamp(0.0, max.height.max(0.0)),
        )
    }
}

/// Painter that turns layout results into renderer calls.
///
/// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// For each box: its background and border, then its text, then its
/// children in tree order. Hidden subtrees are skipped.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    tree: &'a BoxTree,
    scroll: &'a ScrollOffsets,
}

/// What a box inherits from its ancestors while painting.
#[derive(Debug, Clone, Copy)]
struct PaintState {
    /// Accumulated transforms and scroll translations.
    transform: Transform,
    /// Intersection of the ancestors' clip rectangles.
    clip: Option<Rect>,
}

impl<'a> Painter<'a> {
    /// A painter over `tree` with the given scroll positions.
    #[must_use]
    pub const fn new(tree: &'a BoxTree, scroll: &'a ScrollOffsets) -> Self {
        Self { tree, scroll }
    }

    /// Paint the subtree rooted at `root`.
    ///
    /// # Errors
    ///
    /// Fails if `root` or a node under it is stale.
    pub fn paint(&self, root: NodeId, renderer: &mut dyn Renderer) -> Result<()> {
        self.paint_box(
            root,
            PaintState {
                transform: Transform::IDENTITY,
                clip: None,
            },
            renderer,
        )
    }

    fn paint_box(&self, id: NodeId, state: PaintState, renderer: &mut dyn Renderer) -> Result<()> {
        let node = self.tree.node(id)?;
        let style = &node.effective;
        if style.hidden {
            return Ok(());
        }
        let layout = &node.layout;

        // [§ 7 The Transform Rendering Model](https://www.w3.org/TR/css-transforms-1/#transform-rendering)
        //
        // The transform applies to the box and everything inside it.
        let transform = state.transform.then(&style.transform);

        // [CSS 2.1 Appendix E.2 Step 2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
        // "the background color of the element" and "the border of the element"
        if style.background_color.is_some() || style.border.is_visible() {
            renderer.draw_rect(
                transform.apply(layout.border_box),
                &style.border,
                style.background_color,
                state.clip,
            );
        }

        // [CSS 2.1 Appendix E.2 Step 7](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
        // "the element's text"
        if node.kind() == BoxKind::TextRun {
            for line in &layout.lines {
                let rect = transform.apply(line.rect);
                renderer.draw_text(
                    &line.text,
                    rect.origin(),
                    line.baseline + transform.translate_y,
                    &style.font,
                    style.color,
                    state.clip,
                );
            }
        }

        // [§ 3 Scrolling and Clipping Overflow](https://www.w3.org/TR/css-overflow-3/#overflow-control)
        //
        // Descendants are clipped to the padding box; a scroll container
        // additionally shifts them by its scroll position.
        let mut child_state = PaintState {
            transform,
            clip: state.clip,
        };
        if let Some(clip_rect) = layout.clip_rect {
            let clip_rect = transform.apply(clip_rect);
            child_state.clip = Some(match state.clip {
                Some(outer) => outer
                    .intersect(&clip_rect)
                    .unwrap_or(Rect::new(clip_rect.x, clip_rect.y, 0.0, 0.0)),
                None => clip_rect,
            });
        }
        if style.overflow == Overflow::Scroll {
            let offset = self.scroll.clamped(id, layout.scrollable_overflow);
            child_state.transform = transform.then(&Transform::translate(-offset.x, -offset.y));
        }

        for &child in &node.children {
            self.paint_box(child, child_state, renderer)?;
        }
        Ok(())
    }
}
