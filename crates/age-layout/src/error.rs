//! Errors raised by box tree operations.
//!
//! Style input never fails: out-of-range values are clamped and reported
//! through [`age_common::warning::warn_once`]. The variants below are
//! programming-contract violations on the tree itself.

use thiserror::Error;

use crate::tree::NodeId;

/// A violated box tree contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The handle was never issued by this tree.
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),

    /// The handle refers to a node whose subtree has been removed.
    #[error("node {0} was removed from the tree")]
    NodeFreed(NodeId),

    /// Children can only be attached to container boxes.
    #[error("node {0} is a text run and cannot own children")]
    NotAContainer(NodeId),

    /// Text can only be set on text-run boxes.
    #[error("node {0} is a container and has no text")]
    NotAText(NodeId),

    /// The node already has a parent; detach it first.
    #[error("node {0} is already attached to a parent")]
    AlreadyAttached(NodeId),

    /// Attaching the node would make it its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCreateCycle {
        /// The would-be parent.
        parent: NodeId,
        /// The node being attached.
        child: NodeId,
    },

    /// The node is not a child of the given parent.
    #[error("node {child} is not a child of {parent}")]
    NotAChild {
        /// The expected parent.
        parent: NodeId,
        /// The node that was expected under it.
        child: NodeId,
    },

    /// Layout passes start at a root (a node without a parent).
    #[error("node {0} has a parent; layout passes must start at a root")]
    NotARoot(NodeId),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;
