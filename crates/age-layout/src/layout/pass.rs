//! The layout pass entry point and per-node sizing.
//!
//! [§ 9 Flex Layout Algorithm](https://www.w3.org/TR/css-flexbox-1/#layout-algorithm)
//!
//! A pass runs in three steps:
//!
//! 1. Resolve the styles of every node queued since the last pass.
//! 2. Size and position the tree top-down. Every node is handled by
//!    [`compute_node`], either in [`RunMode::ComputeSize`] (return the
//!    border-box height for a given width, write nothing) or in
//!    [`RunMode::PerformLayout`] (write geometry for the node and its
//!    subtree). Geometry is written relative to the parent's border box.
//! 3. [Finalize](super::overflow::finalize): convert to absolute
//!    coordinates and derive clip rectangles and scrollable overflow.

use std::collections::HashMap;
use std::rc::Rc;

use crate::element::BoxKind;
use crate::error::{LayoutError, Result};
use crate::style::EffectiveStyle;
use crate::tree::{BoxTree, NodeId};

use super::box_model::{BoxDimensions, Point, Rect, Size};
use super::flex::layout_stack;
use super::intrinsic::intrinsic_sizes;
use super::overflow::finalize;
use super::result::{LayoutResult, TextLine};
use super::sizing::{Edges, clamp_size, definite_size};
use super::text::{FontMetrics, TextRun};
use super::values::{AvailableSpace, Axis};

/// Whether a node is only measured or fully laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunMode {
    /// Return the node's size; write nothing.
    ComputeSize,
    /// Write the node's geometry and lay out its subtree.
    PerformLayout,
}

/// What a parent hands a child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NodeInputs {
    /// The border-box width, already decided by the parent.
    pub(crate) width: f32,
    /// The border-box height, if the parent decided it.
    pub(crate) height: Option<f32>,
    /// The parent's content box. `None` on an axis whose size is not
    /// definite, so percentages against it behave as `Auto`.
    pub(crate) containing: Size<Option<f32>>,
    /// Whether `height` may serve as a percentage reference for children.
    pub(crate) definite_height: bool,
}

/// What a child reports back.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct NodeOutput {
    /// The border-box height.
    pub(crate) height: f32,
    /// Distance from the border-box top to the node's baseline.
    pub(crate) baseline: f32,
}

/// Bit-exact key for the per-pass measurement cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MeasureKey {
    id: NodeId,
    width: u32,
    height: Option<u32>,
    containing: Size<Option<u32>>,
    definite_height: bool,
}

impl MeasureKey {
    fn new(id: NodeId, inputs: &NodeInputs) -> Self {
        Self {
            id,
            width: inputs.width.to_bits(),
            height: inputs.height.map(f32::to_bits),
            containing: inputs.containing.map(|axis| axis.map(f32::to_bits)),
            definite_height: inputs.definite_height,
        }
    }
}

/// State shared by every node of one pass.
pub(crate) struct LayoutContext<'a> {
    metrics: &'a dyn FontMetrics,
    runs: HashMap<NodeId, Rc<TextRun>>,
    measured: HashMap<MeasureKey, NodeOutput>,
}

impl<'a> LayoutContext<'a> {
    pub(crate) fn new(metrics: &'a dyn FontMetrics) -> Self {
        Self {
            metrics,
            runs: HashMap::new(),
            measured: HashMap::new(),
        }
    }

    /// The measured run of a text node, shaped at most once per pass.
    pub(crate) fn text_run(&mut self, tree: &BoxTree, id: NodeId) -> Result<Rc<TextRun>> {
        if let Some(run) = self.runs.get(&id) {
            return Ok(Rc::clone(run));
        }
        let node = tree.node(id)?;
        let run = Rc::new(TextRun::shape(
            &node.text,
            &node.effective.font,
            self.metrics,
        ));
        let _ = self.runs.insert(id, Rc::clone(&run));
        Ok(run)
    }
}

/// Lay out the tree rooted at `root` within `available`.
///
/// Percentages on the root resolve against the definite axes of
/// `available`. An `Auto` root fills a definite axis (minus its margins)
/// and takes its content size on an indefinite one. Does nothing when
/// neither the tree nor `available` changed since the last pass.
///
/// # Errors
///
/// Fails if `root` is stale or has a parent.
pub fn run_layout_pass(
    tree: &mut BoxTree,
    root: NodeId,
    available: Size<AvailableSpace>,
    metrics: &dyn FontMetrics,
) -> Result<()> {
    if tree.node(root)?.parent.is_some() {
        return Err(LayoutError::NotARoot(root));
    }
    if !tree.needs_layout(root, available)? {
        return Ok(());
    }

    #[cfg(feature = "layout-trace")]
    eprintln!("[LAYOUT] pass start at root {root}, available {available:?}");

    tree.resolve_styles(root)?;
    let style = tree.node(root)?.effective.clone();
    if style.hidden {
        reset_subtree(tree, root)?;
        return tree.mark_clean(root, available);
    }

    let mut ctx = LayoutContext::new(metrics);
    let containing = available.map(AvailableSpace::definite);
    let edges = Edges::resolve(&style, containing.width);
    let inset = edges.inset();

    // [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    let width = match definite_size(&style, Axis::Horizontal, containing.width, inset.horizontal())
    {
        Some(width) => width,
        None => match containing.width {
            Some(available_width) => available_width - edges.margin.horizontal(),
            None => intrinsic_sizes(tree, &mut ctx, root, containing)?
                .preferred
                .width,
        },
    };
    let width = clamp_size(
        &style,
        Axis::Horizontal,
        width,
        containing.width,
        inset.horizontal(),
    );

    let fixed_height = definite_size(&style, Axis::Vertical, containing.height, inset.vertical())
        .or_else(|| containing.height.map(|h| h - edges.margin.vertical()))
        .map(|h| {
            clamp_size(
                &style,
                Axis::Vertical,
                h,
                containing.height,
                inset.vertical(),
            )
        });

    let mut inputs = NodeInputs {
        width,
        height: fixed_height,
        containing,
        definite_height: fixed_height.is_some(),
    };
    if inputs.height.is_none() {
        let measured = compute_node(tree, &mut ctx, root, inputs, RunMode::ComputeSize)?;
        inputs.height = Some(measured.height);
    }
    let _ = compute_node(tree, &mut ctx, root, inputs, RunMode::PerformLayout)?;

    finalize(
        tree,
        root,
        Point::new(edges.margin.left, edges.margin.top),
    )?;

    #[cfg(feature = "layout-trace")]
    eprintln!(
        "[LAYOUT] pass done, root border box {:?}",
        tree.node(root)?.layout.border_box
    );

    tree.mark_clean(root, available)
}

/// Size (and in [`RunMode::PerformLayout`], lay out) one node.
pub(crate) fn compute_node(
    tree: &mut BoxTree,
    ctx: &mut LayoutContext<'_>,
    id: NodeId,
    inputs: NodeInputs,
    mode: RunMode,
) -> Result<NodeOutput> {
    let key = MeasureKey::new(id, &inputs);
    if mode == RunMode::ComputeSize
        && let Some(output) = ctx.measured.get(&key)
    {
        return Ok(*output);
    }

    let node = tree.node(id)?;
    let style = node.effective.clone();
    let output = match node.kind() {
        BoxKind::TextRun => layout_text(tree, ctx, id, &style, inputs, mode)?,
        BoxKind::Container => layout_stack(tree, ctx, id, &style, inputs, mode)?,
    };

    if mode == RunMode::ComputeSize {
        let _ = ctx.measured.insert(key, output);
    }
    Ok(output)
}

/// The border-box height of a node given the height of its content.
///
/// A height decided by the parent wins. Otherwise the style's definite
/// height, or the content height plus insets, clamped by min/max.
pub(crate) fn resolve_height(
    style: &EffectiveStyle,
    inputs: &NodeInputs,
    inset_vertical: f32,
    content_height: f32,
) -> f32 {
    inputs.height.unwrap_or_else(|| {
        let reference = inputs.containing.height;
        let natural = definite_size(style, Axis::Vertical, reference, inset_vertical)
            .unwrap_or(content_height + inset_vertical);
        clamp_size(style, Axis::Vertical, natural, reference, inset_vertical)
    })
}

/// [§ 9.4.2 Inline formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#inline-formatting)
///
/// A text run: break the text into lines at the content width and stack
/// them. The baseline is the first line's; an empty run has none and
/// reports its bottom edge.
fn layout_text(
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

    let run = ctx.text_run(tree, id)?;
    let spans = run.break_lines(Some(content_width), style.text_wrap);
    let content_height = spans.len() as f32 * run.line_height;
    let height = resolve_height(style, &inputs, inset.vertical(), content_height);
    let baseline = if spans.is_empty() {
        height
    } else {
        inset.top + run.ascent
    };

    if mode == RunMode::PerformLayout {
        let dims = BoxDimensions::from_border_box(
            Rect::new(0.0, 0.0, inputs.width, height),
            edges.padding,
            edges.border,
            edges.margin,
        );
        let content = dims.content_box();
        let lines = spans
            .iter()
            .enumerate()
            .map(|(i, span)| {
                let top = (i as f32).mul_add(run.line_height, content.y);
                TextLine {
                    text: run.line_text(span).to_owned(),
                    rect: Rect::new(content.x, top, span.width, run.line_height),
                    baseline: top + run.ascent,
                }
            })
            .collect();
        write_geometry(tree, ctx, id, &dims, inputs.containing, baseline, lines)?;
    }

    Ok(NodeOutput { height, baseline })
}

/// Store a node's local geometry.
pub(crate) fn write_geometry(
    tree: &mut BoxTree,
    ctx: &mut LayoutContext<'_>,
    id: NodeId,
    dims: &BoxDimensions,
    containing: Size<Option<f32>>,
    baseline: f32,
    lines: Vec<TextLine>,
) -> Result<()> {
    let intrinsic = intrinsic_sizes(tree, ctx, id, containing)?;
    tree.node_mut(id)?.layout = LayoutResult {
        content_box: dims.content_box(),
        padding_box: dims.padding_box(),
        border_box: dims.border_box(),
        margin: dims.margin,
        intrinsic_min_size: intrinsic.min,
        intrinsic_preferred_size: intrinsic.preferred,
        baseline,
        clip_rect: None,
        scrollable_overflow: Size::ZERO,
        lines,
    };
    Ok(())
}

/// Move a laid-out child to `offset` within its parent's border box.
pub(crate) fn place(tree: &mut BoxTree, id: NodeId, offset: Point) -> Result<()> {
    tree.node_mut(id)?.layout.translate(offset.x, offset.y);
    Ok(())
}

/// Give a hidden subtree empty geometry.
pub(crate) fn reset_subtree(tree: &mut BoxTree, id: NodeId) -> Result<()> {
    let ids: Vec<NodeId> = tree.descendants(id)?.collect();
    for node_id in ids {
        tree.node_mut(node_id)?.layout = LayoutResult::default();
    }
    Ok(())
}
