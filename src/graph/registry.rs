//! The built, immutable table of state instances.

use crate::core::{Behavior, StateKind, Transition, TransitionSet};
use std::collections::HashMap;

/// One built state: its behavior object, its root flag, and its finalized
/// transition set.
pub(crate) struct StateSlot<K: StateKind, C> {
    pub(crate) behavior: Box<dyn Behavior<K, C>>,
    pub(crate) is_root: bool,
    pub(crate) transitions: TransitionSet<K, C>,
}

/// The singleton instance table of one machine.
///
/// Built exactly once from a [`StateGraph`](crate::graph::StateGraph)
/// declaration: one slot per declared kind, finalized with its
/// transitions, then read-only for the life of the machine apart from the
/// behavior objects' own interior state. Lookups are pure reads.
pub struct StateRegistry<K: StateKind, C> {
    pub(crate) slots: HashMap<K, StateSlot<K, C>>,
    pub(crate) roots: Vec<K>,
    pub(crate) children: HashMap<K, Vec<K>>,
}

impl<K: StateKind, C> StateRegistry<K, C> {
    /// The declared root kinds, in declaration order.
    pub fn roots(&self) -> &[K] {
        &self.roots
    }

    /// The declared children of `kind`, in declaration order.
    ///
    /// This map records the declared nesting structure for tooling; the
    /// resolver does not consult it at run time.
    pub fn children(&self, kind: K) -> &[K] {
        self.children.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Whether `kind` was declared.
    pub fn contains(&self, kind: K) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Whether `kind` was declared as a root.
    pub fn is_root(&self, kind: K) -> bool {
        self.slots.get(&kind).is_some_and(|slot| slot.is_root)
    }

    /// Number of declared kinds.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no kinds were declared. A built registry is never empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn slot(&self, kind: K) -> Option<&StateSlot<K, C>> {
        self.slots.get(&kind)
    }

    pub(crate) fn slot_mut(&mut self, kind: K) -> Option<&mut StateSlot<K, C>> {
        self.slots.get_mut(&kind)
    }

    /// Attach a machine-wide global transition to every state's set.
    pub(crate) fn add_global(&mut self, transition: Transition<K, C>) {
        for slot in self.slots.values_mut() {
            slot.transitions.push(transition.clone());
        }
    }
}
