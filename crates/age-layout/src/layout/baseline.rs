//! Baseline resolution for stacking lines.
//!
//! [§ 9.4 Cross Size Determination](https://www.w3.org/TR/css-flexbox-1/#algo-cross-line)
//!
//! "Collect all the flex items whose inline-axis is parallel to the
//! main-axis, whose align-self is baseline... Find the largest of the
//! distances between each item's baseline and its hypothetical outer
//! cross-start edge, and the largest of the distances between each item's
//! baseline and its hypothetical outer cross-end edge, and sum these two
//! values."
//!
//! Baselines flow bottom-up (a child's baseline is known once it is sized)
//! and are applied top-down when the line positions its items, so a
//! container's baseline can never depend on itself.

/// A baseline-aligned item as the line sees it: outer edges and baseline
/// measured from the top of its border box.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaselineItem {
    pub(crate) margin_top: f32,
    pub(crate) baseline: f32,
    pub(crate) height: f32,
    pub(crate) margin_bottom: f32,
}

/// The shared baseline of one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LineBaseline {
    /// Distance from the line's top to the shared baseline: the largest
    /// ascent (outer top to baseline) among participants.
    pub(crate) shared: f32,
    /// The largest outer descent below the baseline among participants.
    pub(crate) descent: f32,
}

impl LineBaseline {
    /// The shared baseline of `items`, or `None` if nothing participates.
    pub(crate) fn resolve(items: impl IntoIterator<Item = BaselineItem>) -> Option<Self> {
        items.into_iter().fold(None, |line, item| {
            let ascent = item.margin_top + item.baseline;
            let descent = item.height - item.baseline + item.margin_bottom;
            Some(match line {
                None => Self {
                    shared: ascent,
                    descent,
                },
                Some(line) => Self {
                    shared: line.shared.max(ascent),
                    descent: line.descent.max(descent),
                },
            })
        })
    }

    /// The cross extent the participants need: tallest ascent plus deepest
    /// descent.
    pub(crate) fn extent(&self) -> f32 {
        self.shared + self.descent
    }

    /// Offset of an item's border-box top from the line's top so that its
    /// baseline lands on the shared one.
    pub(crate) fn offset_for(&self, baseline: f32) -> f32 {
        self.shared - baseline
    }
}

/// Baseline of a horizontal stack, from the top of its border box.
///
/// `content_top` is the border-box offset of the content box, and
/// `children` gives each visible child's border-box top (relative to the
/// content box) and own baseline. With baseline participants the line's
/// shared baseline wins; otherwise the lowest child baseline does.
pub(crate) fn row_baseline(
    content_top: f32,
    line: Option<LineBaseline>,
    children: impl IntoIterator<Item = (f32, f32)>,
) -> Option<f32> {
    if let Some(line) = line {
        return Some(content_top + line.shared);
    }
    children
        .into_iter()
        .map(|(top, baseline)| content_top + top + baseline)
        .reduce(f32::max)
}

/// Baseline of a vertical stack: its first child's.
pub(crate) fn column_baseline(
    content_top: f32,
    first_child: Option<(f32, f32)>,
) -> Option<f32> {
    first_child.map(|(top, baseline)| content_top + top + baseline)
}
