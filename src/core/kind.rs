//! Core identity trait for declared states.
//!
//! Every state a machine can occupy is named by a `StateKind` value, a
//! stable tag from a closed enumeration. Kinds are the keys of the registry
//! and the currency of the whole API: transitions target kinds, the active
//! branch is a sequence of kinds, and the introspection surface reports
//! kinds.

use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Stable identifier for a declared state.
///
/// Implemented by a closed client enum, one variant per state. Kinds stand
/// in for runtime type identity: the registry indexes by kind, so resolving
/// a transition target is a map lookup rather than reflection.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: kinds are cheap tags used as map keys
/// - `Debug`: kinds appear in error values and diagnostics
/// - `Serialize`: kinds appear in the transition log and introspection
///   output consumed by external viewers
///
/// The [`state_kinds!`](crate::state_kinds) macro generates the enum,
/// derives, and this impl in one declaration.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use stratum::core::StateKind;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
/// enum AgentKind {
///     Idle,
///     Move,
///     Attack,
/// }
///
/// impl StateKind for AgentKind {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Move => "Move",
///             Self::Attack => "Attack",
///         }
///     }
/// }
///
/// assert_eq!(AgentKind::Move.name(), "Move");
/// ```
pub trait StateKind: Copy + Eq + Hash + Debug + Serialize + Send + Sync + 'static {
    /// Get the kind's name for display and diagnostics.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}
