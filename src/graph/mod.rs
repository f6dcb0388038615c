//! Declaration and two-phase construction of the state graph.
//!
//! A [`StateGraph`] collects the declared kinds (roots and nested states)
//! together with a behavior factory per kind. Building it produces a
//! [`StateRegistry`]: phase one instantiates exactly one behavior per
//! declared kind, phase two lets every instance register its transitions
//! against the now-complete kind set. After that the table is read-only.

mod builder;
mod error;
mod registry;

pub use builder::StateGraph;
pub use error::GraphError;
pub use registry::StateRegistry;
