//! Finalization: absolute coordinates, clip rectangles, scrollable overflow.
//!
//! [§ 11.1.1 Overflow](https://www.w3.org/TR/CSS2/visufx.html#overflow)
//!
//! Clipping is a presentation concern over already-computed geometry: it
//! never moves a box. This pass runs once the whole tree is laid out.

use std::collections::HashMap;

use crate::error::Result;
use crate::style::Overflow;
use crate::tree::{BoxTree, NodeId};

use super::box_model::{Point, Rect, Size};

/// Convert the local geometry under `root` to absolute coordinates, then
/// derive clip rectangles and scrollable overflow bottom-up.
///
/// `origin` is the absolute position of the root's border box.
pub(crate) fn finalize(tree: &mut BoxTree, root: NodeId, origin: Point) -> Result<()> {
    // Pre-order: a parent is absolute before its children are offset by it.
    let mut order = Vec::new();
    let mut stack = vec![(root, origin)];
    while let Some((id, offset)) = stack.pop() {
        let node = tree.node_mut(id)?;
        if node.effective.hidden {
            continue;
        }
        node.layout.translate(offset.x, offset.y);
        let child_origin = node.layout.border_box.origin();
        stack.extend(node.children.iter().rev().map(|&child| (child, child_origin)));
        order.push(id);
    }

    // Post-order: every child's extent is known before its parent's.
    let mut extents: HashMap<NodeId, Rect> = HashMap::with_capacity(order.len());
    for &id in order.iter().rev() {
        let node = tree.node(id)?;
        let overflow = node.effective.overflow;
        let border_box = node.layout.border_box;
        let padding_box = node.layout.padding_box;
        let content = node
            .children
            .iter()
            .filter_map(|child| extents.get(child))
            .copied()
            .reduce(|a, b| a.union(&b));

        let (clip_rect, scrollable, extent) = match overflow {
            Overflow::None => (
                None,
                Size::ZERO,
                content.map_or(border_box, |c| border_box.union(&c)),
            ),
            Overflow::Clipping => (Some(padding_box), Size::ZERO, border_box),
            Overflow::Scroll => (
                Some(padding_box),
                content.map_or(Size::ZERO, |c| scrollable_overflow(&padding_box, &c)),
                border_box,
            ),
        };

        let layout = &mut tree.node_mut(id)?.layout;
        layout.clip_rect = clip_rect;
        layout.scrollable_overflow = scrollable;
        let _ = extents.insert(id, extent);
    }
    Ok(())
}

/// [§ 2.2 Scrollable Overflow](https://www.w3.org/TR/css-overflow-3/#scrollable)
///
/// How far `content` extends beyond `clip`, per axis, counting both the
/// trailing and the leading side. Zero when the content fits.
#[must_use]
pub fn scrollable_overflow(clip: &Rect, content: &Rect) -> Size<f32> {
    Size::new(
        (content.right() - clip.right()).max(0.0) + (clip.x - content.x).max(0.0),
        (content.bottom() - clip.bottom()).max(0.0) + (clip.y - content.y).max(0.0),
    )
}
