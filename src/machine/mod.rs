//! The machine driver and its supporting surfaces.
//!
//! A [`StateMachine`] owns the built registry, the caller's context, and
//! the active branch. Per primary tick it resolves at most one transition
//! (globals before locals at each level, shallow levels first) and then
//! cascades the update hooks down the branch. Construction goes through
//! [`MachineBuilder`]; lifecycle visibility goes through the
//! [`Observer`] callbacks and the queryable [`TransitionLog`].

mod builder;
mod driver;
mod error;
mod log;
mod observer;
mod resolver;

pub use builder::MachineBuilder;
pub use driver::StateMachine;
pub use error::MachineError;
pub use log::{SwitchRecord, TransitionLog};
pub use observer::{Observer, StateEvent};
