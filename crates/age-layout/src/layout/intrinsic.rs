//! Intrinsic sizing pass.
//!
//! [CSS Intrinsic & Extrinsic Sizing Module Level 3](https://www.w3.org/TR/css-sizing-3/)
//!
//! Bottom-up: a box's natural sizes are derived from its children's, so the
//! traversal recurses to the leaves before combining. Results are memoized on
//! each node per percentage reference and survive across passes until the
//! node or one of its descendants changes.

use crate::element::BoxKind;
use crate::error::Result;
use crate::style::EffectiveStyle;
use crate::tree::{BoxTree, NodeId};

use super::box_model::Size;
use super::pass::LayoutContext;
use super::result::IntrinsicSizes;
use super::sizing::{Edges, clamp_size, definite_size};
use super::values::Axis;

/// Memo entries kept per node. Most nodes are measured against one or two
/// references per pass.
const CACHE_ENTRIES: usize = 4;

/// [§ 5 Intrinsic Size Determination](https://www.w3.org/TR/css-sizing-3/#intrinsic-sizes)
///
/// The min and preferred border-box sizes of `id`.
///
/// `reference` is the content box of the node's parent, with indefinite
/// axes as `None`; it resolves the node's percentage sizes and padding.
/// A definite axis reports its definite size as both min and preferred.
pub(crate) fn intrinsic_sizes(
    tree: &mut BoxTree,
    ctx: &mut LayoutContext<'_>,
    id: NodeId,
    reference: Size<Option<f32>>,
) -> Result<IntrinsicSizes> {
    let node = tree.node(id)?;
    if let Some((_, sizes)) = node.intrinsic_cache.iter().find(|(key, _)| *key == reference) {
        return Ok(*sizes);
    }
    let style = node.effective.clone();
    let kind = node.kind();

    let inset = Edges::resolve(&style, reference.width).inset();
    let content = match kind {
        BoxKind::TextRun => text_content_sizes(tree, ctx, id)?,
        BoxKind::Container => container_content_sizes(tree, ctx, id, &style, reference)?,
    };

    let mut sizes = IntrinsicSizes::default();
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let axis_reference = reference.get(axis);
        let axis_inset = inset.sum(axis);
        let (min, preferred) = match definite_size(&style, axis, axis_reference, axis_inset) {
            Some(size) => (size, size),
            None => (
                content.min.get(axis) + axis_inset,
                content.preferred.get(axis) + axis_inset,
            ),
        };
        sizes.min.set(
            axis,
            clamp_size(&style, axis, min, axis_reference, axis_inset),
        );
        sizes.preferred.set(
            axis,
            clamp_size(&style, axis, preferred, axis_reference, axis_inset),
        );
    }

    let cache = &mut tree.node_mut(id)?.intrinsic_cache;
    if cache.len() >= CACHE_ENTRIES {
        let _ = cache.remove(0);
    }
    cache.push((reference, sizes));
    Ok(sizes)
}

/// The content-box size `style` fixes on each axis, if definite.
pub(crate) fn definite_content_size(
    style: &EffectiveStyle,
    reference: Size<Option<f32>>,
) -> Size<Option<f32>> {
    let inset = Edges::resolve(style, reference.width).inset();
    let mut out = Size::splat(None);
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let axis_reference = reference.get(axis);
        let axis_inset = inset.sum(axis);
        out.set(
            axis,
            definite_size(style, axis, axis_reference, axis_inset).map(|size| {
                (clamp_size(style, axis, size, axis_reference, axis_inset) - axis_inset).max(0.0)
            }),
        );
    }
    out
}

/// [§ 5.1 Intrinsic Sizes](https://www.w3.org/TR/css-sizing-3/#intrinsic)
///
/// Text: min width is the longest word, preferred width the widest line
/// with no soft wraps. Both heights are the line count at the preferred
/// width times the line height.
fn text_content_sizes(
    tree: &BoxTree,
    ctx: &mut LayoutContext<'_>,
    id: NodeId,
) -> Result<IntrinsicSizes> {
    let run = ctx.text_run(tree, id)?;
    let (preferred_width, line_count) = run.max_content();
    let height = line_count as f32 * run.line_height;
    Ok(IntrinsicSizes {
        min: Size::new(run.min_content_width(), height),
        preferred: Size::new(preferred_width, height),
    })
}

/// Containers: along the stacking axis the preferred size is the sum of the
/// children's outer preferred sizes. The min size is the sum of their min
/// sizes for vertical stacks and the largest min size for horizontal
/// stacks. Across the stacking axis both are the largest child's.
fn container_content_sizes(
    tree: &mut BoxTree,
    ctx: &mut LayoutContext<'_>,
    id: NodeId,
    style: &EffectiveStyle,
    reference: Size<Option<f32>>,
) -> Result<IntrinsicSizes> {
    let main = Axis::main_of(style.stack_direction);
    let cross = main.cross();
    let child_reference = definite_content_size(style, reference);

    let mut sizes = IntrinsicSizes::default();
    let children = tree.node(id)?.children.clone();
    for child in children {
        let child_node = tree.node(child)?;
        if child_node.effective.hidden {
            continue;
        }
        let margin = Edges::resolve(&child_node.effective, child_reference.width).margin;
        let child_sizes = intrinsic_sizes(tree, ctx, child, child_reference)?;

        let main_margin = margin.sum(main);
        let cross_margin = margin.sum(cross);

        let main_min = child_sizes.min.get(main) + main_margin;
        let accumulated_min = match main {
            Axis::Horizontal => sizes.min.get(main).max(main_min),
            Axis::Vertical => sizes.min.get(main) + main_min,
        };
        sizes.min.set(main, accumulated_min);
        sizes.preferred.set(
            main,
            sizes.preferred.get(main) + child_sizes.preferred.get(main) + main_margin,
        );

        sizes.min.set(
            cross,
            sizes.min.get(cross).max(child_sizes.min.get(cross) + cross_margin),
        );
        sizes.preferred.set(
            cross,
            sizes
                .preferred
                .get(cross)
                .max(child_sizes.preferred.get(cross) + cross_margin),
        );
    }
    Ok(sizes)
}
