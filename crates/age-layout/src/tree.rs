//! The box tree: an arena of styled nodes addressed by generational handles.
//!
//! # Design
//!
//! Nodes live in a flat slot vector. Parents own their children through an
//! ordered list of [`NodeId`]s; the parent link is a plain handle used for
//! navigation only. Removing a node frees its whole subtree and bumps the
//! generation of every freed slot, so stale handles are reported as
//! [`LayoutError::NodeFreed`] instead of aliasing a reused slot.
//!
//! Mutations never lay anything out. They mark nodes dirty and return whether
//! a relayout is needed; the caller decides when to run
//! [`run_layout_pass`](crate::layout::run_layout_pass).

use std::fmt;

use serde::Serialize;

use crate::element::{BoxKind, ElementKind, default_style_for_element};
use crate::error::{LayoutError, Result};
use crate::layout::{AvailableSpace, IntrinsicSizes, LayoutResult, Size};
use crate::style::{
    EffectiveStyle, PseudoState, PseudoStates, StateStyles, StyleProperties, resolve_style,
};

/// A handle to a node in a [`BoxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Slot index, stable for the node's lifetime.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Per-node storage.
#[derive(Debug, Clone)]
pub(crate) struct BoxNode {
    pub(crate) element: ElementKind,
    pub(crate) text: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Author style, merged over the element's default style.
    pub(crate) style: StyleProperties,
    pub(crate) state_styles: StateStyles,
    pub(crate) states: PseudoStates,
    /// The style as of the last resolution.
    pub(crate) effective: EffectiveStyle,
    pub(crate) layout: LayoutResult,
    pub(crate) style_dirty: bool,
    pub(crate) layout_dirty: bool,
    /// Intrinsic sizes keyed by the percentage reference they were computed
    /// against. Dropped whenever this node or a descendant changes.
    pub(crate) intrinsic_cache: Vec<(Size<Option<f32>>, IntrinsicSizes)>,
    /// The available space of the last pass rooted here.
    pub(crate) last_available: Option<Size<AvailableSpace>>,
}

impl BoxNode {
    fn new(element: ElementKind, text: String) -> Self {
        Self {
            element,
            text,
            parent: None,
            children: Vec::new(),
            style: StyleProperties::new(),
            state_styles: StateStyles::default(),
            states: PseudoStates::NONE,
            effective: EffectiveStyle::default(),
            layout: LayoutResult::default(),
            style_dirty: true,
            layout_dirty: true,
            intrinsic_cache: Vec::new(),
            last_available: None,
        }
    }

    pub(crate) const fn kind(&self) -> BoxKind {
        self.element.box_kind()
    }

    /// The element defaults with the author style merged over them.
    pub(crate) fn base_style(&self) -> StyleProperties {
        default_style_for_element(self.element).merged(&self.style)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<BoxNode>,
}

/// A mutable tree of box nodes.
#[derive(Debug, Clone, Default)]
pub struct BoxTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    /// Nodes whose style inputs changed since the last resolution.
    worklist: Vec<NodeId>,
}

impl BoxTree {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    /// Whether the tree has no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` refers to a live node of this tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    /// Create a detached element with the element's default style.
    pub fn create_element(&mut self, kind: ElementKind) -> NodeId {
        self.alloc(BoxNode::new(kind, String::new()))
    }

    /// Create a detached text run.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(BoxNode::new(ElementKind::Span, text.into()))
    }

    fn alloc(&mut self, node: BoxNode) -> NodeId {
        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId {
                index,
                generation: 0,
            }
        };
        self.worklist.push(id);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&BoxNode> {
        let slot = self
            .slots
            .get(id.index as usize)
            .ok_or(LayoutError::UnknownNode(id))?;
        if slot.generation != id.generation {
            return Err(LayoutError::NodeFreed(id));
        }
        slot.node.as_ref().ok_or(LayoutError::NodeFreed(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut BoxNode> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .ok_or(LayoutError::UnknownNode(id))?;
        if slot.generation != id.generation {
            return Err(LayoutError::NodeFreed(id));
        }
        slot.node.as_mut().ok_or(LayoutError::NodeFreed(id))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Fails if either handle is stale, `parent` is a text run, `child`
    /// already has a parent, or `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        self.check_attach(parent, child)?;
        self.node_mut(parent)?.children.push(child);
        self.finish_attach(parent, child)
    }

    /// Insert `child` into `parent` immediately before `reference`.
    ///
    /// # Errors
    ///
    /// As [`append_child`](Self::append_child), plus
    /// [`LayoutError::NotAChild`] if `reference` is not a child of `parent`.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: NodeId,
    ) -> Result<bool> {
        self.check_attach(parent, child)?;
        let position = self.child_position(parent, reference)?;
        self.node_mut(parent)?.children.insert(position, child);
        self.finish_attach(parent, child)
    }

    fn check_attach(&self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_node = self.node(parent)?;
        if parent_node.kind() != BoxKind::Container {
            return Err(LayoutError::NotAContainer(parent));
        }
        if self.node(child)?.parent.is_some() {
            return Err(LayoutError::AlreadyAttached(child));
        }
        if parent == child || self.ancestors(parent)?.any(|ancestor| ancestor == child) {
            return Err(LayoutError::WouldCreateCycle { parent, child });
        }
        Ok(())
    }

    fn finish_attach(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        self.node_mut(child)?.parent = Some(parent);
        // Inherited properties now come from the new parent.
        self.mark_style_dirty(child)?;
        Ok(true)
    }

    fn child_position(&self, parent: NodeId, child: NodeId) -> Result<usize> {
        self.node(parent)?
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or(LayoutError::NotAChild { parent, child })
    }

    /// Detach `child` from `parent` and free its entire subtree.
    ///
    /// # Errors
    ///
    /// Fails if either handle is stale or `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        let position = self.child_position(parent, child)?;
        let _ = self.node_mut(parent)?.children.remove(position);
        self.mark_layout_dirty(parent)?;
        self.free_subtree(child)?;
        Ok(true)
    }

    /// Free `id` and its subtree, detaching it from its parent first.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        match self.node(id)?.parent {
            Some(parent) => self.remove_child(parent, id).map(|_| ()),
            None => self.free_subtree(id),
        }
    }

    fn free_subtree(&mut self, id: NodeId) -> Result<()> {
        let doomed: Vec<NodeId> = self.descendants(id)?.collect();
        for node in doomed {
            let slot = &mut self.slots[node.index as usize];
            slot.node = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(node.index);
        }
        Ok(())
    }

    /// The parent of `id`, or `None` for a root.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// The children of `id`, in stacking order.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Whether `id` is a container or a text run.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn kind(&self, id: NodeId) -> Result<BoxKind> {
        Ok(self.node(id)?.kind())
    }

    /// The element `id` was created as.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn element(&self, id: NodeId) -> Result<ElementKind> {
        Ok(self.node(id)?.element)
    }

    /// The text of a text run.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale or a container.
    pub fn text(&self, id: NodeId) -> Result<&str> {
        let node = self.node(id)?;
        match node.kind() {
            BoxKind::TextRun => Ok(&node.text),
            BoxKind::Container => Err(LayoutError::NotAText(id)),
        }
    }

    /// Replace the text of a text run.
    ///
    /// Returns whether a relayout is needed.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale or a container.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<bool> {
        let text = text.into();
        if self.text(id)? == text {
            return Ok(false);
        }
        self.node_mut(id)?.text = text;
        self.mark_layout_dirty(id)?;
        Ok(true)
    }

    /// The author style of `id` (without element defaults or overrides).
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn style(&self, id: NodeId) -> Result<&StyleProperties> {
        Ok(&self.node(id)?.style)
    }

    /// Replace the author style of `id`.
    ///
    /// Returns whether a relayout is needed.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn set_style(&mut self, id: NodeId, style: StyleProperties) -> Result<bool> {
        let node = self.node_mut(id)?;
        if node.style == style {
            return Ok(false);
        }
        node.style = style;
        self.mark_style_dirty(id)?;
        Ok(true)
    }

    /// Set or clear the override applied while `state` is active.
    ///
    /// Returns whether a relayout is needed, which is only the case when
    /// the state is currently active.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn set_state_style(
        &mut self,
        id: NodeId,
        state: PseudoState,
        style: Option<StyleProperties>,
    ) -> Result<bool> {
        let node = self.node_mut(id)?;
        let changed = node.state_styles.set(state, style);
        if changed && node.states.contains(state) {
            self.mark_style_dirty(id)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Turn a pseudo-state on or off.
    ///
    /// Returns whether a relayout is needed, which is only the case when
    /// the node has an override for `state`.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn set_pseudo_state(&mut self, id: NodeId, state: PseudoState, on: bool) -> Result<bool> {
        let node = self.node_mut(id)?;
        let changed = node.states.set(state, on);
        if changed && node.state_styles.get(state).is_some() {
            self.mark_style_dirty(id)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// The pseudo-states currently active on `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn pseudo_states(&self, id: NodeId) -> Result<PseudoStates> {
        Ok(self.node(id)?.states)
    }

    /// Resolve the style of `id` from its current inputs.
    ///
    /// Always reflects the latest mutations, whether or not a pass has run.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn effective_style(&self, id: NodeId) -> Result<EffectiveStyle> {
        let mut chain: Vec<NodeId> = self.ancestors(id)?.collect();
        chain.reverse();
        chain.push(id);

        let mut parent: Option<EffectiveStyle> = None;
        for node_id in chain {
            let node = self.node(node_id)?;
            let overrides = node.state_styles.active(node.states);
            parent = Some(resolve_style(&node.base_style(), &overrides, parent.as_ref()));
        }
        parent.ok_or(LayoutError::UnknownNode(id))
    }

    /// The style the last layout pass used for `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn computed_style(&self, id: NodeId) -> Result<&EffectiveStyle> {
        Ok(&self.node(id)?.effective)
    }

    /// The geometry computed for `id` by the last layout pass.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn layout(&self, id: NodeId) -> Result<&LayoutResult> {
        Ok(&self.node(id)?.layout)
    }

    /// `id` followed by all of its descendants, in pre-order (paint order).
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn descendants(&self, id: NodeId) -> Result<Descendants<'_>> {
        let _ = self.node(id)?;
        Ok(Descendants {
            tree: self,
            stack: vec![id],
        })
    }

    /// The ancestors of `id`, from its parent up to the root.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn ancestors(&self, id: NodeId) -> Result<Ancestors<'_>> {
        Ok(Ancestors {
            tree: self,
            current: self.node(id)?.parent,
        })
    }

    /// Whether the node or anything below it changed since the last pass.
    ///
    /// # Errors
    ///
    /// Fails if `id` is stale.
    pub fn is_dirty(&self, id: NodeId) -> Result<bool> {
        let node = self.node(id)?;
        Ok(node.layout_dirty || node.style_dirty)
    }

    /// Whether [`run_layout_pass`](crate::layout::run_layout_pass) on
    /// `root` with `available` would do any work.
    ///
    /// # Errors
    ///
    /// Fails if `root` is stale or has a parent.
    pub fn needs_layout(&self, root: NodeId, available: Size<AvailableSpace>) -> Result<bool> {
        let node = self.node(root)?;
        if node.parent.is_some() {
            return Err(LayoutError::NotARoot(root));
        }
        Ok(node.layout_dirty || node.last_available != Some(available))
    }

    /// Flag `id` for style resolution and relayout.
    fn mark_style_dirty(&mut self, id: NodeId) -> Result<()> {
        let node = self.node_mut(id)?;
        if !node.style_dirty {
            node.style_dirty = true;
            self.worklist.push(id);
        }
        self.mark_layout_dirty(id)
    }

    /// Flag `id` and every ancestor for relayout, dropping their memoized
    /// intrinsic sizes.
    pub(crate) fn mark_layout_dirty(&mut self, id: NodeId) -> Result<()> {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node_mut(node_id)?;
            node.layout_dirty = true;
            node.intrinsic_cache.clear();
            current = node.parent;
        }
        Ok(())
    }

    /// Resolve the style of every queued node under `root`, and of the
    /// descendants of any node whose resolved style changed. Queued nodes in
    /// other trees stay queued.
    pub(crate) fn resolve_styles(&mut self, root: NodeId) -> Result<()> {
        let queued = std::mem::take(&mut self.worklist);
        for id in queued {
            let Ok(node) = self.node(id) else {
                // Freed since it was queued.
                continue;
            };
            if !node.style_dirty {
                continue;
            }
            if id != root && !self.ancestors(id)?.any(|ancestor| ancestor == root) {
                self.worklist.push(id);
                continue;
            }
            self.resolve_subtree(id)?;
        }
        Ok(())
    }

    fn resolve_subtree(&mut self, id: NodeId) -> Result<()> {
        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            let node = self.node(node_id)?;
            let parent_style = match node.parent {
                Some(parent) => Some(self.node(parent)?.effective.clone()),
                None => None,
            };
            let overrides = node.state_styles.active(node.states);
            let resolved = resolve_style(&node.base_style(), &overrides, parent_style.as_ref());
            let changed = resolved != node.effective;

            let node = self.node_mut(node_id)?;
            node.style_dirty = false;
            if changed {
                node.effective = resolved;
                self.mark_layout_dirty(node_id)?;
            }
            // Descendants inherit from this node; only revisit them when
            // there is something new to inherit.
            if changed {
                stack.extend(self.node(node_id)?.children.iter().rev().copied());
            }
        }
        Ok(())
    }

    /// Clear the dirty flags of `root`'s subtree and remember `available`.
    pub(crate) fn mark_clean(&mut self, root: NodeId, available: Size<AvailableSpace>) -> Result<()> {
        let ids: Vec<NodeId> = self.descendants(root)?.collect();
        for id in ids {
            self.node_mut(id)?.layout_dirty = false;
        }
        self.node_mut(root)?.last_available = Some(available);
        Ok(())
    }
}

/// Pre-order iterator over a subtree. See [`BoxTree::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a BoxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Ok(node) = self.tree.node(id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}

/// Iterator from a node's parent up to its root. See [`BoxTree::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a> {
    tree: &'a BoxTree,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.node(id).ok().and_then(|node| node.parent);
        Some(id)
    }
}
