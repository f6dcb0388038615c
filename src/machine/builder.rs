//! Builder for wiring up a machine.

use crate::core::{StateKind, Transition};
use crate::graph::StateGraph;
use crate::machine::driver::StateMachine;
use crate::machine::error::MachineError;
use crate::machine::observer::Observer;

/// Builder for constructing state machines with a fluent API.
///
/// A machine needs a declared graph, a context, and an initial root kind.
/// Global transitions and observers are optional and must be registered
/// here, before the first tick.
///
/// # Example
///
/// ```rust
/// use stratum::core::{Behavior, TransitionSet};
/// use stratum::graph::StateGraph;
/// use stratum::machine::StateMachine;
/// use stratum::state_kinds;
///
/// state_kinds! {
///     pub enum LampKind {
///         Off,
///         On,
///     }
/// }
///
/// #[derive(Default)]
/// struct Switchboard {
///     powered: bool,
/// }
///
/// struct Off;
///
/// impl Behavior<LampKind, Switchboard> for Off {
///     fn set_transitions(&self, transitions: &mut TransitionSet<LampKind, Switchboard>) {
///         transitions.add(LampKind::On, |board: &Switchboard| board.powered);
///     }
/// }
///
/// struct On;
///
/// impl Behavior<LampKind, Switchboard> for On {
///     fn set_transitions(&self, transitions: &mut TransitionSet<LampKind, Switchboard>) {
///         transitions.add(LampKind::Off, |board: &Switchboard| !board.powered);
///     }
/// }
///
/// let mut machine = StateMachine::builder()
///     .graph(
///         StateGraph::new()
///             .root(LampKind::Off, || Off)
///             .root(LampKind::On, || On),
///     )
///     .context(Switchboard::default())
///     .initial(LampKind::Off)
///     .build()
///     .unwrap();
///
/// machine.context_mut().powered = true;
/// machine.tick().unwrap();
/// assert_eq!(machine.active_root(), LampKind::On);
/// ```
pub struct MachineBuilder<K: StateKind, C> {
    graph: Option<StateGraph<K, C>>,
    context: Option<C>,
    initial: Option<K>,
    globals: Vec<Transition<K, C>>,
    observers: Vec<Box<dyn Observer<K>>>,
}

impl<K: StateKind, C> MachineBuilder<K, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            graph: None,
            context: None,
            initial: None,
            globals: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Set the declared state graph (required).
    pub fn graph(mut self, graph: StateGraph<K, C>) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Set the context shared by all states of this machine (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the initial root state (required).
    pub fn initial(mut self, kind: K) -> Self {
        self.initial = Some(kind);
        self
    }

    /// Register a machine-wide global transition.
    ///
    /// The transition is attached to every state's set and evaluated ahead
    /// of local transitions at every level of the active branch, making
    /// `target` reachable no matter which branch is active.
    pub fn global_transition<F>(mut self, target: K, condition: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.globals.push(Transition::global(target, condition));
        self
    }

    /// Register an observer for lifecycle events. Observers registered
    /// here also see the construction-time enter cascade.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: Observer<K> + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the machine and enter its initial root.
    ///
    /// Fails if a required piece is missing, if the graph itself fails
    /// validation, or if the initial kind is unknown or not a root.
    pub fn build(self) -> Result<StateMachine<K, C>, MachineError<K>> {
        let graph = self.graph.ok_or(MachineError::MissingGraph)?;
        let context = self.context.ok_or(MachineError::MissingContext)?;
        let initial = self.initial.ok_or(MachineError::MissingInitialState)?;

        let mut registry = graph.build()?;
        for transition in self.globals {
            if !registry.contains(transition.target()) {
                return Err(MachineError::UnknownKind(transition.target()));
            }
            registry.add_global(transition);
        }

        if !registry.contains(initial) {
            return Err(MachineError::UnknownKind(initial));
        }
        if !registry.is_root(initial) {
            return Err(MachineError::NotARoot(initial));
        }

        StateMachine::with_parts(registry, context, initial, self.observers)
    }
}

impl<K: StateKind, C> Default for MachineBuilder<K, C> {
    fn default() -> Self {
        Self::new()
    }
}
