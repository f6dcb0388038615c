//! Structured observation of lifecycle events.
//!
//! Observers replace ad-hoc logging inside the engine: the core emits
//! structured events and stays silent otherwise. No observer is registered
//! by default.

use crate::core::StateKind;
use serde::Serialize;

/// One lifecycle event on the active branch.
///
/// `depth` is the event's position on the branch, root = 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub enum StateEvent<K: StateKind> {
    /// A state became active at `depth`. Emitted after its `on_enter` hook
    /// ran, before any child it requested is entered.
    Entered { kind: K, depth: usize },

    /// A state was deactivated. Emitted deepest-first while a subtree is
    /// torn down.
    Exited { kind: K, depth: usize },

    /// A transition was applied at `depth`, replacing `from` with `to`.
    /// Emitted between the exit of the old subtree and the enter of the
    /// new one.
    Switched { from: K, to: K, depth: usize },
}

/// Callback invoked for every [`StateEvent`] of one machine.
///
/// Closures of type `FnMut(&StateEvent<K>)` implement this trait, so a
/// simple observer registers as
/// `.observer(|event: &StateEvent<_>| { .. })`.
pub trait Observer<K: StateKind>: Send {
    fn notify(&mut self, event: &StateEvent<K>);
}

impl<K: StateKind, F> Observer<K> for F
where
    F: FnMut(&StateEvent<K>) + Send,
{
    fn notify(&mut self, event: &StateEvent<K>) {
        self(event)
    }
}
