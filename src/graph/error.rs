//! Declaration and construction errors for the state graph.

use crate::core::StateKind;
use thiserror::Error;

/// Errors raised while building a registry from a declared graph.
///
/// All of these are defects in the declared state graph, not runtime
/// conditions: construction aborts and nothing is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError<K: StateKind> {
    #[error("no root states declared. Call .root(kind, factory) before building")]
    NoRoots,

    #[error("state kind {0:?} declared more than once")]
    DuplicateKind(K),

    #[error("child {child:?} declared under undeclared parent {parent:?}")]
    UndeclaredParent { parent: K, child: K },

    #[error("transition from {from:?} targets undeclared kind {target:?}")]
    UndeclaredTarget { from: K, target: K },
}
