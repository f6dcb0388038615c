//! Lifecycle hook trait implemented by client states.

use crate::core::{StateKind, TransitionSet};

/// The behavior of one declared state.
///
/// Client code implements this trait once per state kind; the registry
/// instantiates exactly one behavior object per kind and keeps it for the
/// life of the machine, so a behavior may carry its own mutable fields
/// (timers, counters) across activations.
///
/// Only [`set_transitions`](Behavior::set_transitions) is mandatory. All
/// lifecycle hooks default to no-ops.
///
/// # Hook ordering
///
/// - `on_enter` runs parent-before-child: entering a state runs its hook,
///   then enters the child the hook requested, recursively down the branch.
/// - `on_exit` runs child-before-parent: a subtree is fully torn down,
///   deepest state first, before the owning state exits.
/// - `on_update`, `on_fixed_update`, and `on_late_update` each cascade
///   parent-before-child down the active branch. They are independent
///   cascades for the host's three scheduling phases.
pub trait Behavior<K: StateKind, C>: Send {
    /// Register this state's outgoing transitions.
    ///
    /// Called exactly once, after every declared state has been
    /// instantiated, so transitions may target any declared kind. An empty
    /// body is legal: such a state is only left through a shallower switch.
    fn set_transitions(&self, transitions: &mut TransitionSet<K, C>);

    /// Invoked when this state becomes active.
    ///
    /// Return `Some(kind)` to enter `kind` as this state's child; the
    /// engine pushes it onto the active branch and enters it in turn,
    /// cascading until a hook returns `None`. The child must be a declared
    /// non-root kind that is not already on the branch.
    fn on_enter(&mut self, _context: &mut C) -> Option<K> {
        None
    }

    /// Invoked when this state is deactivated, after its subtree has fully
    /// exited.
    fn on_exit(&mut self, _context: &mut C) {}

    /// Invoked once per primary tick while this state is on the active
    /// branch.
    fn on_update(&mut self, _context: &mut C) {}

    /// Invoked once per fixed tick while this state is on the active
    /// branch. Fixed ticks never resolve transitions.
    fn on_fixed_update(&mut self, _context: &mut C) {}

    /// Invoked once per late tick while this state is on the active branch.
    /// Late ticks never resolve transitions.
    fn on_late_update(&mut self, _context: &mut C) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
    enum TestKind {
        Solo,
    }

    impl StateKind for TestKind {
        fn name(&self) -> &str {
            "Solo"
        }
    }

    struct Counter {
        entered: u32,
    }

    struct Solo;

    impl Behavior<TestKind, Counter> for Solo {
        fn set_transitions(&self, _transitions: &mut TransitionSet<TestKind, Counter>) {}

        fn on_enter(&mut self, context: &mut Counter) -> Option<TestKind> {
            context.entered += 1;
            None
        }
    }

    #[test]
    fn hooks_default_to_no_ops() {
        let mut solo = Solo;
        let mut counter = Counter { entered: 0 };

        assert_eq!(solo.on_enter(&mut counter), None);
        solo.on_exit(&mut counter);
        solo.on_update(&mut counter);
        solo.on_fixed_update(&mut counter);
        solo.on_late_update(&mut counter);

        assert_eq!(counter.entered, 1);
    }

    #[test]
    fn empty_transition_set_is_legal() {
        let solo = Solo;
        let mut set = TransitionSet::new();
        solo.set_transitions(&mut set);
        assert!(set.is_empty());
    }
}
