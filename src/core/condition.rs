//! Condition predicates for controlling state transitions.
//!
//! Conditions are pure boolean functions over the machine's context. They
//! decide whether a transition fires, without side effects on the context
//! or the states.

use std::sync::Arc;

/// Pure predicate that determines whether a transition fires.
///
/// Conditions are evaluated by the resolver once per tick against a shared
/// borrow of the context. The same condition value may appear in several
/// transition sets (global transitions are attached to every state), so the
/// predicate is reference-counted and cloning a condition is cheap.
///
/// # Example
///
/// ```rust
/// use stratum::core::Condition;
///
/// struct Input {
///     move_axis: f32,
/// }
///
/// let is_moving = Condition::new(|input: &Input| input.move_axis != 0.0);
///
/// assert!(is_moving.check(&Input { move_axis: 1.0 }));
/// assert!(!is_moving.check(&Input { move_axis: 0.0 }));
/// ```
pub struct Condition<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Condition<C> {
    /// Create a condition from a pure predicate function.
    ///
    /// The predicate must be deterministic for a given context value and
    /// thread-safe (`Send + Sync`).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Condition {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate against the current context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> Clone for Condition<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
