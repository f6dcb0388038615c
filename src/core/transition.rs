//! Transition edges and the per-state transition set.

use crate::core::{Condition, StateKind};

/// An immutable edge out of a state: a target kind, a firing condition, and
/// a global/local flag.
///
/// Global transitions are evaluated before local ones at every level of the
/// active branch, which makes them interrupt-style edges: a machine-wide
/// global transition is attached to every state's set at construction, so
/// its target is reachable no matter which branch is active.
pub struct Transition<K: StateKind, C> {
    target: K,
    condition: Condition<C>,
    global: bool,
}

impl<K: StateKind, C> Transition<K, C> {
    /// Create a local transition.
    pub fn new<F>(target: K, condition: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            target,
            condition: Condition::new(condition),
            global: false,
        }
    }

    /// Create a global transition.
    pub fn global<F>(target: K, condition: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            target,
            condition: Condition::new(condition),
            global: true,
        }
    }

    /// The kind this transition switches to.
    pub fn target(&self) -> K {
        self.target
    }

    /// Whether this transition belongs to the global evaluation group.
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Evaluate the firing condition against the current context (pure).
    pub fn check(&self, context: &C) -> bool {
        self.condition.check(context)
    }
}

impl<K: StateKind, C> Clone for Transition<K, C> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            condition: self.condition.clone(),
            global: self.global,
        }
    }
}

/// The outgoing transitions of one state.
///
/// Populated exactly once, when the registry finalizes the state during the
/// second construction phase (see [`Behavior::set_transitions`]). Within the
/// set, evaluation order is global transitions first, then local ones, each
/// group in registration order.
///
/// [`Behavior::set_transitions`]: crate::core::Behavior::set_transitions
pub struct TransitionSet<K: StateKind, C> {
    transitions: Vec<Transition<K, C>>,
}

impl<K: StateKind, C> TransitionSet<K, C> {
    pub(crate) fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Register a local transition to `target`, firing when `condition`
    /// evaluates true.
    pub fn add<F>(&mut self, target: K, condition: F)
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.transitions.push(Transition::new(target, condition));
    }

    /// Register a global transition to `target`.
    ///
    /// A global transition registered here belongs to this state only, but
    /// is evaluated ahead of every local transition at this level.
    pub fn add_global<F>(&mut self, target: K, condition: F)
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.transitions.push(Transition::global(target, condition));
    }

    /// Number of registered transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transitions are registered. A state with an empty set is
    /// legal; it can only be left through a shallower switch.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub(crate) fn push(&mut self, transition: Transition<K, C>) {
        self.transitions.push(transition);
    }

    pub(crate) fn as_slice(&self) -> &[Transition<K, C>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kind::StateKind;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
    enum TestKind {
        Idle,
        Move,
        Dead,
    }

    impl StateKind for TestKind {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Move => "Move",
                Self::Dead => "Dead",
            }
        }
    }

    struct TestContext {
        moving: bool,
        health: u32,
    }

    #[test]
    fn transition_checks_its_condition() {
        let transition: Transition<TestKind, TestContext> =
            Transition::new(TestKind::Move, |ctx: &TestContext| ctx.moving);

        assert_eq!(transition.target(), TestKind::Move);
        assert!(!transition.is_global());
        assert!(transition.check(&TestContext {
            moving: true,
            health: 1
        }));
        assert!(!transition.check(&TestContext {
            moving: false,
            health: 1
        }));
    }

    #[test]
    fn global_constructor_marks_the_group() {
        let transition: Transition<TestKind, TestContext> =
            Transition::global(TestKind::Dead, |ctx: &TestContext| ctx.health == 0);

        assert!(transition.is_global());
        assert_eq!(transition.target(), TestKind::Dead);
    }

    #[test]
    fn cloned_transition_keeps_target_and_flag() {
        let transition: Transition<TestKind, TestContext> =
            Transition::global(TestKind::Dead, |ctx: &TestContext| ctx.health == 0);
        let cloned = transition.clone();

        assert_eq!(cloned.target(), TestKind::Dead);
        assert!(cloned.is_global());
        assert!(cloned.check(&TestContext {
            moving: false,
            health: 0
        }));
    }

    #[test]
    fn set_preserves_registration_order() {
        let mut set: TransitionSet<TestKind, TestContext> = TransitionSet::new();
        assert!(set.is_empty());

        set.add(TestKind::Move, |ctx: &TestContext| ctx.moving);
        set.add_global(TestKind::Dead, |ctx: &TestContext| ctx.health == 0);
        set.add(TestKind::Idle, |ctx: &TestContext| !ctx.moving);

        assert_eq!(set.len(), 3);
        let targets: Vec<TestKind> = set.as_slice().iter().map(|t| t.target()).collect();
        assert_eq!(targets, vec![TestKind::Move, TestKind::Dead, TestKind::Idle]);
        let globals: Vec<bool> = set.as_slice().iter().map(|t| t.is_global()).collect();
        assert_eq!(globals, vec![false, true, false]);
    }
}
