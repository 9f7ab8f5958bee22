//! Stacking layout for container boxes.
//!
//! [§ 9 Flex Layout Algorithm](https://www.w3.org/TR/css-flexbox-1/#layout-algorithm)
//!
//! A container lays its visible children out in one line along its main
//! axis (`StackDirection`):
//!
//! - Children with a definite main size take exactly that size. The others
//!   start from their preferred size and never grow.
//! - If the line overflows, the flexible children shrink in proportion to
//!   their size, each floored at its minimum (§ 9.7). Children may still
//!   overflow when even the minimums do not fit.
//! - Leftover space is distributed by `ContentJustification` (§ 8.2).
//! - Each child is placed on the cross axis by its alignment (§ 8.3),
//!   with baseline alignment resolved per line (§ 9.4).
//!
//! Not implemented: wrapping onto multiple lines, growing, `order`.

use crate::error::Result;
use crate::style::{ContentJustification, CrossPlacement, EffectiveStyle, Length};
use crate::tree::{BoxTree, NodeId};

use age_common::warning::warn_once;

use super::baseline::{BaselineItem, LineBaseline, column_baseline, row_baseline};
use super::box_model::{BoxDimensions, EdgeSizes, Point, Rect, Size};
use super::intrinsic::intrinsic_sizes;
use super::pass::{
    LayoutContext, NodeInputs, NodeOutput, RunMode, compute_node, place, reset_subtree,
    resolve_height, write_geometry,
};
use super::result::IntrinsicSizes;
use super::sizing::{Edges, clamp_size, definite_size};
use super::values::Axis;

/// Per-child data collected while laying out one line.
///
/// [§ 9.2 Line Length Determination](https://www.w3.org/TR/css-flexbox-1/#algo-main-item)
#[derive(Debug, Clone)]
struct StackItem {
    id: NodeId,
    style: EffectiveStyle,
    edges: Edges,
    intrinsic: IntrinsicSizes,
    placement: CrossPlacement,
    /// Border-box width.
    width: f32,
    /// Border-box height.
    height: f32,
    /// Whether the final height may serve as a percentage reference.
    definite_height: bool,
    /// Baseline from the border-box top, at the final size.
    baseline: f32,
    /// Border-box offset from the container's content-box origin.
    position: Point,
}

/// One entry of the shrink algorithm.
///
/// [§ 9.7 Resolving Flexible Lengths](https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FlexLength {
    /// The hypothetical border-box size on the main axis.
    pub(crate) base_size: f32,
    /// The smallest size the item may shrink to.
    pub(crate) floor: f32,
    /// Margins on the main axis.
    pub(crate) outer: f32,
    /// The resolved size.
    pub(crate) target_size: f32,
    /// Whether the item is excluded from (further) shrinking.
    pub(crate) frozen: bool,
}

impl FlexLength {
    /// A shrinkable item.
    pub(crate) const fn flexible(base_size: f32, floor: f32, outer: f32) -> Self {
        Self {
            base_size,
            floor,
            outer,
            target_size: base_size,
            frozen: false,
        }
    }

    /// An item with a definite size that never shrinks.
    pub(crate) const fn fixed(size: f32, outer: f32) -> Self {
        Self {
            base_size: size,
            floor: size,
            outer,
            target_size: size,
            frozen: true,
        }
    }
}

/// Lay out a container and its children.
pub(crate) fn layout_stack(
    tree: &mut BoxTree,
    ctx: &mut LayoutContext<'_>,
    id: NodeId,
    style: &EffectiveStyle,
    inputs: NodeInputs,
    mode: RunMode,
) -> Result<NodeOutput> {
    let edges = Edges::resolve(style, inputs.containing.width);
    let inset = edges.inset();
    let content_width = (inputs.width - inset.horizontal()).max(0.0);

    // The container's own height, when known before its children are.
    let (border_height, height_is_definite) = match inputs.height {
        Some(height) => (Some(height), inputs.definite_height),
        None => {
            let reference = inputs.containing.height;
            let fixed = definite_size(style, Axis::Vertical, reference, inset.vertical())
                .map(|h| clamp_size(style, Axis::Vertical, h, reference, inset.vertical()));
            (fixed, fixed.is_some())
        }
    };
    let content_height = border_height.map(|h| (h - inset.vertical()).max(0.0));
    let child_containing = Size::new(
        Some(content_width),
        content_height.filter(|_| height_is_definite),
    );

    let mut items = Vec::new();
    for &child in &tree.node(id)?.children.clone() {
        let child_style = tree.node(child)?.effective.clone();
        if child_style.hidden {
            if mode == RunMode::PerformLayout {
                reset_subtree(tree, child)?;
            }
            continue;
        }
        let intrinsic = intrinsic_sizes(tree, ctx, child, child_containing)?;
        let placement = child_style
            .effective_alignment(style.items_alignment)
            .placement();
        items.push(StackItem {
            id: child,
            edges: Edges::resolve(&child_style, child_containing.width),
            style: child_style,
            intrinsic,
            placement,
            width: 0.0,
            height: 0.0,
            definite_height: false,
            baseline: 0.0,
            position: Point::ZERO,
        });
    }

    let line = Line {
        content_width,
        content_height,
        height_is_definite,
        containing: child_containing,
        justification: style.content_justification,
    };
    let (natural_content_height, baseline) = match Axis::main_of(style.stack_direction) {
        Axis::Horizontal => layout_row(tree, ctx, &line, &mut items)?,
        Axis::Vertical => layout_column(tree, ctx, &line, &mut items)?,
    };

    let height = resolve_height(style, &inputs, inset.vertical(), natural_content_height);
    let baseline = baseline.map_or(height, |b| inset.top + b);

    #[cfg(feature = "layout-trace")]
    eprintln!(
        "[STACK] {id} {:?} {} children, width {}, height {height}",
        mode,
        items.len(),
        inputs.width
    );

    if mode == RunMode::PerformLayout {
        let dims = BoxDimensions::from_border_box(
            Rect::new(0.0, 0.0, inputs.width, height),
            edges.padding,
            edges.border,
            edges.margin,
        );
        write_geometry(tree, ctx, id, &dims, inputs.containing, baseline, Vec::new())?;
        for item in &items {
            let child_inputs = NodeInputs {
                width: item.width,
                height: Some(item.height),
                containing: child_containing,
                definite_height: item.definite_height,
            };
            let _ = compute_node(tree, ctx, item.id, child_inputs, RunMode::PerformLayout)?;
            place(
                tree,
                item.id,
                Point::new(
                    inset.left + item.position.x,
                    inset.top + item.position.y,
                ),
            )?;
        }
    }

    Ok(NodeOutput { height, baseline })
}

/// The container-side facts one line is laid out against.
#[derive(Debug, Clone, Copy)]
struct Line {
    content_width: f32,
    content_height: Option<f32>,
    height_is_definite: bool,
    containing: Size<Option<f32>>,
    justification: ContentJustification,
}

/// The definite border-box height the style gives `item`, clamped.
fn definite_item_height(item: &StackItem, line: &Line) -> Option<f32> {
    let reference = line.containing.height;
    let inset = item.edges.inset().vertical();
    if reference.is_none() && matches!(item.style.height, Length::Percent(_)) {
        warn_once(
            "Layout",
            &format!(
                "percentage height on {} has an indefinite reference and is treated as auto",
                item.id
            ),
        );
    }
    definite_size(&item.style, Axis::Vertical, reference, inset)
        .map(|h| clamp_size(&item.style, Axis::Vertical, h, reference, inset))
}

/// Measure `item` at a given width and optional height.
fn measure(
    tree: &mut BoxTree,
    ctx: &mut LayoutContext<'_>,
    item: &StackItem,
    line: &Line,
    width: f32,
    height: Option<f32>,
    definite_height: bool,
) -> Result<NodeOutput> {
    compute_node(
        tree,
        ctx,
        item.id,
        NodeInputs {
            width,
            height,
            containing: line.containing,
            definite_height,
        },
        RunMode::ComputeSize,
    )
}

/// Horizontal main axis. Returns the natural content height and the
/// baseline relative to the content box.
fn layout_row(
    tree: &mut BoxTree,
    ctx: &mut LayoutContext<'_>,
    line: &Line,
    items: &mut [StackItem],
) -> Result<(f32, Option<f32>)> {
    // [§ 9.2 step 3](https://www.w3.org/TR/css-flexbox-1/#algo-main-item)
    //
    // Widths: a definite width is used as is; otherwise the preferred width,
    // floored at the min-content width when shrinking.
    let mut lengths: Vec<FlexLength> = items
        .iter()
        .map(|item| {
            let inset = item.edges.inset().horizontal();
            let outer = item.edges.margin.horizontal();
            match definite_size(&item.style, Axis::Horizontal, Some(line.content_width), inset) {
                Some(width) => FlexLength::fixed(
                    clamp_size(
                        &item.style,
                        Axis::Horizontal,
                        width,
                        Some(line.content_width),
                        inset,
                    ),
                    outer,
                ),
                None => FlexLength::flexible(
                    item.intrinsic.preferred.width,
                    item.intrinsic.min.width,
                    outer,
                ),
            }
        })
        .collect();
    shrink_to_fit(&mut lengths, line.content_width);

    // [§ 9.4 Cross Size Determination](https://www.w3.org/TR/css-flexbox-1/#algo-cross-item)
    //
    // Hypothetical cross sizes at the resolved widths.
    let mut auto_heights = Vec::with_capacity(items.len());
    for (item, length) in items.iter_mut().zip(&lengths) {
        item.width = length.target_size;
        let fixed = definite_item_height(item, line);
        let output = measure(tree, ctx, item, line, item.width, fixed, fixed.is_some())?;
        item.height = output.height;
        item.baseline = output.baseline;
        item.definite_height = fixed.is_some();
        auto_heights.push(fixed.is_none());
    }

    let shared = LineBaseline::resolve(
        items
            .iter()
            .filter(|item| item.placement == CrossPlacement::Baseline)
            .map(|item| BaselineItem {
                margin_top: item.edges.margin.top,
                baseline: item.baseline,
                height: item.height,
                margin_bottom: item.edges.margin.bottom,
            }),
    );
    let natural_extent = items
        .iter()
        .filter(|item| item.placement != CrossPlacement::Baseline)
        .map(|item| item.height + item.edges.margin.vertical())
        .chain(shared.map(|baseline_line| baseline_line.extent()))
        .fold(0.0, f32::max);
    let line_extent = line.content_height.unwrap_or(natural_extent);

    // [§ 9.4 step 11](https://www.w3.org/TR/css-flexbox-1/#algo-stretch)
    //
    // "If a flex item has align-self: stretch, its computed cross size
    // property is auto, and neither of its cross-axis margins are auto, the
    // used outer cross size is the used cross size of its flex line."
    for (item, auto_height) in items.iter_mut().zip(auto_heights) {
        if item.placement == CrossPlacement::Stretch && auto_height {
            let inset = item.edges.inset().vertical();
            let stretched = clamp_size(
                &item.style,
                Axis::Vertical,
                line_extent - item.edges.margin.vertical(),
                line.containing.height,
                inset,
            );
            item.definite_height = line.height_is_definite;
            if stretched != item.height {
                item.height = stretched;
                item.baseline =
                    measure(tree, ctx, item, line, item.width, Some(stretched), item.definite_height)?
                        .baseline;
            }
        }
        item.position.y = cross_offset(
            item.placement,
            line_extent,
            item.height,
            item.edges.margin.top,
            item.edges.margin.bottom,
            shared.map(|baseline_line| baseline_line.offset_for(item.baseline)),
        );
    }

    place_on_main_axis(items, &lengths, Axis::Horizontal, line.content_width, line.justification);

    let baseline = row_baseline(
        0.0,
        shared,
        items.iter().map(|item| (item.position.y, item.baseline)),
    );
    Ok((natural_extent, baseline))
}

/// Vertical main axis. Returns the natural content height and the baseline
/// relative to the content box.
fn layout_column(
    tree: &mut BoxTree,
    ctx: &mut LayoutContext<'_>,
    line: &Line,
    items: &mut [StackItem],
) -> Result<(f32, Option<f32>)> {
    // Widths: a definite width, the line's width when stretched, and the
    // fit-content width otherwise.
    //
    // [§ 10.3.5 Floating, non-replaced elements](https://www.w3.org/TR/CSS2/visudet.html#float-width)
    //
    // "the shrink-to-fit width is: min(max(preferred minimum width,
    // available width), preferred width)."
    for item in items.iter_mut() {
        let inset = item.edges.inset().horizontal();
        let available = line.content_width - item.edges.margin.horizontal();
        let width = definite_size(&item.style, Axis::Horizontal, Some(line.content_width), inset)
            .unwrap_or_else(|| match item.placement {
                CrossPlacement::Stretch => available,
                _ => item
                    .intrinsic
                    .preferred
                    .width
                    .min(item.intrinsic.min.width.max(available)),
            });
        item.width = clamp_size(
            &item.style,
            Axis::Horizontal,
            width,
            Some(line.content_width),
            inset,
        );
    }

    // Heights: a definite height is used as is, otherwise the height the
    // child needs at its width.
    let mut lengths = Vec::with_capacity(items.len());
    for item in items.iter_mut() {
        let outer = item.edges.margin.vertical();
        let length = match definite_item_height(item, line) {
            Some(height) => {
                item.definite_height = true;
                FlexLength::fixed(height, outer)
            }
            None => {
                let hypothetical = measure(tree, ctx, item, line, item.width, None, false)?.height;
                FlexLength::flexible(
                    hypothetical,
                    item.intrinsic.min.height.min(hypothetical),
                    outer,
                )
            }
        };
        lengths.push(length);
    }
    if let Some(available) = line.content_height {
        shrink_to_fit(&mut lengths, available);
    }
    let natural_height: f32 = lengths
        .iter()
        .map(|length| length.target_size + length.outer)
        .sum();

    for (item, length) in items.iter_mut().zip(&lengths) {
        item.height = length.target_size;
        item.baseline = measure(
            tree,
            ctx,
            item,
            line,
            item.width,
            Some(item.height),
            item.definite_height,
        )?
        .baseline;
        // Baseline alignment needs a horizontal line; here it packs to the
        // leading edge.
        let placement = match item.placement {
            CrossPlacement::Baseline => CrossPlacement::Leading,
            other => other,
        };
        item.position.x = cross_offset(
            placement,
            line.content_width,
            item.width,
            item.edges.margin.left,
            item.edges.margin.right,
            None,
        );
    }

    let main_extent = line.content_height.unwrap_or(natural_height);
    place_on_main_axis(items, &lengths, Axis::Vertical, main_extent, line.justification);

    let baseline = column_baseline(
        0.0,
        items.first().map(|item| (item.position.y, item.baseline)),
    );
    Ok((natural_height, baseline))
}

/// [§ 8.3 Cross-axis Alignment](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
///
/// Offset of an item's border box from the start of the line on the cross
/// axis.
fn cross_offset(
    placement: CrossPlacement,
    line_extent: f32,
    size: f32,
    margin_start: f32,
    margin_end: f32,
    baseline_offset: Option<f32>,
) -> f32 {
    match placement {
        CrossPlacement::Leading | CrossPlacement::Stretch => margin_start,
        CrossPlacement::Trailing => line_extent - size - margin_end,
        CrossPlacement::Center => {
            margin_start + (line_extent - margin_start - margin_end - size) / 2.0
        }
        CrossPlacement::Baseline => baseline_offset.unwrap_or(margin_start),
    }
}

/// [§ 9.5 Main-Axis Alignment](https://www.w3.org/TR/css-flexbox-1/#main-alignment)
///
/// Write each item's main-axis offset from its resolved size, its margins
/// and the justification gaps.
fn place_on_main_axis(
    items: &mut [StackItem],
    lengths: &[FlexLength],
    axis: Axis,
    available: f32,
    justification: ContentJustification,
) {
    let used: f32 = lengths
        .iter()
        .map(|length| length.target_size + length.outer)
        .sum();
    let free = (available - used).max(0.0);
    let (initial, gap) = compute_justify_offsets(justification, free, items.len());

    let mut cursor = initial;
    for (item, length) in items.iter_mut().zip(lengths) {
        let margin: EdgeSizes = item.edges.margin;
        let offset = cursor + margin.start(axis);
        match axis {
            Axis::Horizontal => item.position.x = offset,
            Axis::Vertical => item.position.y = offset,
        }
        cursor += length.target_size + length.outer + gap;
    }
}

/// [§ 9.7 Resolving Flexible Lengths](https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths)
///
/// Shrink-only freeze loop. When the outer sizes exceed `available`, every
/// unfrozen item gives up a share of the overflow proportional to its base
/// size ("scaled flex shrink factor" with a shrink factor of one). Items
/// that would drop below their floor are clamped and frozen, and the loop
/// redistributes what they could not absorb.
pub(crate) fn shrink_to_fit(items: &mut [FlexLength], available: f32) {
    let used: f32 = items.iter().map(|item| item.target_size + item.outer).sum();
    if used <= available {
        return;
    }

    loop {
        if items.iter().all(|item| item.frozen) {
            break;
        }

        // "Calculate the remaining free space."
        let remaining_free = available
            - items
                .iter()
                .map(|item| {
                    if item.frozen {
                        item.target_size + item.outer
                    } else {
                        item.base_size + item.outer
                    }
                })
                .sum::<f32>();
        let overflow = (-remaining_free).max(0.0);

        let scaled_shrink_sum: f32 = items
            .iter()
            .filter(|item| !item.frozen)
            .map(|item| item.base_size)
            .sum();
        if scaled_shrink_sum <= 0.0 {
            for item in items.iter_mut() {
                item.frozen = true;
            }
            break;
        }

        for item in items.iter_mut().filter(|item| !item.frozen) {
            let ratio = item.base_size / scaled_shrink_sum;
            item.target_size = overflow.mul_add(-ratio, item.base_size);
        }

        // "Fix min/max violations."
        let mut total_violation = 0.0_f32;
        for item in items.iter_mut().filter(|item| !item.frozen) {
            let clamped = item.target_size.max(item.floor);
            total_violation += clamped - item.target_size;
            item.target_size = clamped;
        }

        // "Freeze over-flexed items."
        if total_violation.abs() < 0.01 {
            for item in items.iter_mut() {
                item.frozen = true;
            }
        } else {
            for item in items.iter_mut().filter(|item| !item.frozen) {
                if item.target_size <= item.floor {
                    item.frozen = true;
                }
            }
        }
    }
}

/// Compute content-justification offsets.
///
/// [§ 8.2 Axis Alignment: the justify-content property](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
///
/// Returns `(initial_offset, gap_between_items)`. A single item under
/// `SpaceAround` or `SpaceEvenly` ends up centered.
#[must_use]
pub fn compute_justify_offsets(
    justification: ContentJustification,
    free_space: f32,
    item_count: usize,
) -> (f32, f32) {
    if item_count == 0 || free_space <= 0.0 {
        return (0.0, 0.0);
    }

    match justification {
        ContentJustification::Start => (0.0, 0.0),

        // "Flex items are packed toward the end of the line."
        ContentJustification::End => (free_space, 0.0),

        // "Flex items are packed toward the center of the line."
        ContentJustification::Center => (free_space / 2.0, 0.0),

        // "If the leftover free-space is negative or there is only a single
        // flex item on the line, this value is identical to flex-start."
        ContentJustification::SpaceBetween => {
            if item_count <= 1 {
                (0.0, 0.0)
            } else {
                (0.0, free_space / (item_count - 1) as f32)
            }
        }

        // "Flex items are evenly distributed in the line, with half-size
        // spaces on either end."
        ContentJustification::SpaceAround => {
            let gap = free_space / item_count as f32;
            (gap / 2.0, gap)
        }

        // Every gap, the leading and trailing ones included, is equal.
        ContentJustification::SpaceEvenly => {
            let gap = free_space / (item_count + 1) as f32;
            (gap, gap)
        }
    }
}
