//! Transition resolution over the active branch.
//!
//! Once per primary tick the resolver walks the branch top to bottom and
//! picks at most one switch. Selection at each level is two-tier: global
//! transitions first, then local ones, first true condition in each group
//! wins and the rest of the level goes unevaluated. The walk stops at the
//! first level that actually switches; the replaced subtree is never
//! traversed further within the same call, so one tick applies at most one
//! switch and the new subtree's own transitions wait for the next tick.

use crate::core::{StateKind, Transition};
use crate::graph::StateRegistry;
use crate::machine::error::MachineError;

/// A resolved switch: replace the branch from `depth` downwards with
/// `target`.
pub(crate) struct Switch<K> {
    pub(crate) depth: usize,
    pub(crate) target: K,
}

/// Walk the active branch and resolve the switch to apply this tick, if
/// any. Pure: evaluates conditions only.
pub(crate) fn next_switch<K: StateKind, C>(
    registry: &StateRegistry<K, C>,
    branch: &[K],
    context: &C,
) -> Result<Option<Switch<K>>, MachineError<K>> {
    for (depth, &kind) in branch.iter().enumerate() {
        let slot = registry
            .slot(kind)
            .ok_or(MachineError::UnknownKind(kind))?;
        let Some(transition) = select(slot.transitions.as_slice(), context) else {
            continue;
        };

        let target = transition.target();
        if target == kind || target == branch[0] {
            // Already the occupant of this level, or already the active
            // root (a machine-wide global keeps firing while its target
            // holds the top slot). Idempotent; the walk may keep looking
            // deeper.
            continue;
        }

        if depth == 0 {
            if !registry.is_root(target) {
                return Err(MachineError::NotARoot(target));
            }
        } else if registry.is_root(target) {
            return Err(MachineError::RootAsChild(target));
        }
        if depth > 0 && branch[1..depth].contains(&target) {
            return Err(MachineError::EnterCycle(target));
        }

        return Ok(Some(Switch { depth, target }));
    }
    Ok(None)
}

/// Pick the firing transition at one level: globals before locals, first
/// true condition in each group.
fn select<'a, K: StateKind, C>(
    transitions: &'a [Transition<K, C>],
    context: &C,
) -> Option<&'a Transition<K, C>> {
    transitions
        .iter()
        .filter(|t| t.is_global())
        .find(|t| t.check(context))
        .or_else(|| {
            transitions
                .iter()
                .filter(|t| !t.is_global())
                .find(|t| t.check(context))
        })
}
