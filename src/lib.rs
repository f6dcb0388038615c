//! Stratum: a hierarchical state machine runtime for tick-driven agents.
//!
//! Client code declares nested, conditionally-transitioning behavior states
//! for an agent, then drives the machine once per simulation tick. The
//! active configuration is always a single branch (the active root, its
//! child, its child's child) and every tick resolves at most one switch:
//! global transitions before local ones at each level, shallow levels
//! before deep ones.
//!
//! # Core Concepts
//!
//! - **[`StateKind`]**: stable identity for a declared state, a tag from a
//!   closed client enum (see [`state_kinds!`])
//! - **[`Behavior`]**: the lifecycle hooks of one state; `on_enter` may
//!   request a child, nesting the branch
//! - **[`StateGraph`]**: the declared roots, nesting structure, and
//!   behavior factories, built once into a singleton registry
//! - **[`StateMachine`]**: the driver, fed by the host's `tick`,
//!   `fixed_tick`, and `late_tick`
//!
//! # Example
//!
//! ```rust
//! use stratum::core::{Behavior, TransitionSet};
//! use stratum::graph::StateGraph;
//! use stratum::machine::StateMachine;
//! use stratum::state_kinds;
//!
//! state_kinds! {
//!     pub enum BotKind {
//!         Idle,
//!         Move,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Input {
//!     move_axis: f32,
//! }
//!
//! struct Idle;
//!
//! impl Behavior<BotKind, Input> for Idle {
//!     fn set_transitions(&self, transitions: &mut TransitionSet<BotKind, Input>) {
//!         transitions.add(BotKind::Move, |input: &Input| input.move_axis != 0.0);
//!     }
//! }
//!
//! struct Move;
//!
//! impl Behavior<BotKind, Input> for Move {
//!     fn set_transitions(&self, transitions: &mut TransitionSet<BotKind, Input>) {
//!         transitions.add(BotKind::Idle, |input: &Input| input.move_axis == 0.0);
//!     }
//! }
//!
//! let mut machine = StateMachine::builder()
//!     .graph(
//!         StateGraph::new()
//!             .root(BotKind::Idle, || Idle)
//!             .root(BotKind::Move, || Move),
//!     )
//!     .context(Input::default())
//!     .initial(BotKind::Idle)
//!     .build()
//!     .unwrap();
//!
//! machine.context_mut().move_axis = 1.0;
//! machine.tick().unwrap();
//! assert_eq!(machine.active_root(), BotKind::Move);
//! ```

pub mod core;
pub mod graph;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Behavior, Condition, StateKind, Transition, TransitionSet};
pub use crate::graph::{GraphError, StateGraph, StateRegistry};
pub use crate::machine::{
    MachineBuilder, MachineError, Observer, StateEvent, StateMachine, SwitchRecord, TransitionLog,
};
