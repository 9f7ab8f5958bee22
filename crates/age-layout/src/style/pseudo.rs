//! Interaction pseudo-states and their style overrides.
//!
//! [Selectors Level 4 § 9 User Action Pseudo-classes](https://www.w3.org/TR/selectors-4/#useraction-pseudos)

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use super::properties::StyleProperties;

/// A user-interaction state a node can be in.
///
/// Variants are declared in precedence order: when several states are
/// active at once, overrides are applied in this order and the later one
/// wins for every field both set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumIter)]
pub enum PseudoState {
    /// The pointer is over the node.
    Hover,
    /// The node has keyboard focus.
    Focus,
    /// The node is being pressed.
    Active,
}

impl PseudoState {
    const fn bit(self) -> u8 {
        match self {
            Self::Hover => 1,
            Self::Focus => 1 << 1,
            Self::Active => 1 << 2,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Hover => 0,
            Self::Focus => 1,
            Self::Active => 2,
        }
    }
}

/// The set of currently active pseudo-states on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PseudoStates(u8);

impl PseudoStates {
    /// No state active.
    pub const NONE: Self = Self(0);

    /// Check if `state` is active.
    #[must_use]
    pub const fn contains(self, state: PseudoState) -> bool {
        self.0 & state.bit() != 0
    }

    /// Turn `state` on or off. Returns `true` if the set changed.
    pub const fn set(&mut self, state: PseudoState, on: bool) -> bool {
        let before = self.0;
        if on {
            self.0 |= state.bit();
        } else {
            self.0 &= !state.bit();
        }
        before != self.0
    }

    /// The active states, in precedence order.
    pub fn iter(self) -> impl Iterator<Item = PseudoState> {
        PseudoState::iter().filter(move |state| self.contains(*state))
    }
}

/// One optional style override per pseudo-state.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StateStyles {
    overrides: [Option<StyleProperties>; 3],
}

impl StateStyles {
    /// The override for `state`, if any.
    #[must_use]
    pub fn get(&self, state: PseudoState) -> Option<&StyleProperties> {
        self.overrides[state.index()].as_ref()
    }

    /// Replace the override for `state`. Returns `true` if it changed.
    pub fn set(&mut self, state: PseudoState, style: Option<StyleProperties>) -> bool {
        let slot = &mut self.overrides[state.index()];
        if *slot == style {
            return false;
        }
        *slot = style;
        true
    }

    /// The overrides that apply for `states`, in precedence order.
    #[must_use]
    pub fn active(&self, states: PseudoStates) -> Vec<&StyleProperties> {
        states.iter().filter_map(|state| self.get(state)).collect()
    }
}
