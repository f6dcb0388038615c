//! Construction and resolution errors for the machine driver.

use crate::core::StateKind;
use crate::graph::GraphError;
use thiserror::Error;

/// Errors raised while building or driving a machine.
///
/// Every variant is a defect in the declared graph or in the driver's
/// wiring, never a transient runtime condition. Nothing is retried; the
/// error propagates to the embedding application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError<K: StateKind> {
    #[error("no state graph bound. Call .graph(graph) before .build()")]
    MissingGraph,

    #[error("no context bound. Call .context(context) before .build()")]
    MissingContext,

    #[error("initial state not specified. Call .initial(kind) before .build()")]
    MissingInitialState,

    #[error("state kind {0:?} was never declared")]
    UnknownKind(K),

    #[error("{0:?} is not a root state and cannot stand at the top of the active branch")]
    NotARoot(K),

    #[error("root state {0:?} cannot be entered as a child")]
    RootAsChild(K),

    #[error("entering {0:?} would revisit it; the active branch must stay a simple path")]
    EnterCycle(K),

    #[error(transparent)]
    Graph(#[from] GraphError<K>),
}
