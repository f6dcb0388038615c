//! Fluent declaration of the state graph.

use crate::core::{Behavior, StateKind, TransitionSet};
use crate::graph::error::GraphError;
use crate::graph::registry::{StateRegistry, StateSlot};
use std::collections::{HashMap, HashSet};

/// Factory closure instantiating one state's behavior object.
type BehaviorFactory<K, C> = Box<dyn Fn() -> Box<dyn Behavior<K, C>> + Send + Sync>;

struct Declaration<K: StateKind, C> {
    kind: K,
    is_root: bool,
    factory: BehaviorFactory<K, C>,
}

/// Declarative description of a machine's states: which kinds exist, which
/// are roots, how they nest, and how to instantiate each behavior.
///
/// Declarations are structural. The parent/child relation recorded by
/// [`child`](StateGraph::child) is exposed for introspection and drives
/// nothing at run time; the active nesting is whatever the `on_enter` hooks
/// produce. All validation is deferred to the build step, so declarations
/// may arrive in any order.
///
/// # Example
///
/// ```rust
/// use stratum::core::{Behavior, TransitionSet};
/// use stratum::graph::StateGraph;
/// use stratum::state_kinds;
///
/// state_kinds! {
///     pub enum DoorKind {
///         Open,
///         Closed,
///     }
/// }
///
/// struct Door;
///
/// impl Behavior<DoorKind, ()> for Door {
///     fn set_transitions(&self, _transitions: &mut TransitionSet<DoorKind, ()>) {}
/// }
///
/// let graph = StateGraph::new()
///     .root(DoorKind::Open, || Door)
///     .root(DoorKind::Closed, || Door);
/// ```
pub struct StateGraph<K: StateKind, C> {
    declarations: Vec<Declaration<K, C>>,
    children: HashMap<K, Vec<K>>,
}

impl<K: StateKind, C> StateGraph<K, C> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
            children: HashMap::new(),
        }
    }

    /// Declare a root state: a kind that may stand at the top of the active
    /// branch.
    pub fn root<B, F>(mut self, kind: K, factory: F) -> Self
    where
        B: Behavior<K, C> + 'static,
        F: Fn() -> B + Send + Sync + 'static,
    {
        self.declarations.push(Declaration {
            kind,
            is_root: true,
            factory: Box::new(move || Box::new(factory())),
        });
        self
    }

    /// Declare a nested state under `parent`.
    ///
    /// The parent link is structural only; at run time the state becomes
    /// active when some `on_enter` hook returns it.
    pub fn child<B, F>(mut self, parent: K, kind: K, factory: F) -> Self
    where
        B: Behavior<K, C> + 'static,
        F: Fn() -> B + Send + Sync + 'static,
    {
        self.declarations.push(Declaration {
            kind,
            is_root: false,
            factory: Box::new(move || Box::new(factory())),
        });
        self.children.entry(parent).or_default().push(kind);
        self
    }

    /// Build the registry in two phases: instantiate every behavior, then
    /// let each one register its transitions against the complete kind set.
    ///
    /// [`MachineBuilder`](crate::machine::MachineBuilder) calls this
    /// internally; building a registry directly is useful for tooling that
    /// only wants the declared structure.
    pub fn build(self) -> Result<StateRegistry<K, C>, GraphError<K>> {
        let mut declared = HashSet::new();
        let mut roots = Vec::new();
        for declaration in &self.declarations {
            if !declared.insert(declaration.kind) {
                return Err(GraphError::DuplicateKind(declaration.kind));
            }
            if declaration.is_root {
                roots.push(declaration.kind);
            }
        }
        if roots.is_empty() {
            return Err(GraphError::NoRoots);
        }
        for (parent, kids) in &self.children {
            if !declared.contains(parent) {
                return Err(GraphError::UndeclaredParent {
                    parent: *parent,
                    child: kids[0],
                });
            }
        }

        // Phase 1: one instance per declared kind.
        let order: Vec<K> = self.declarations.iter().map(|d| d.kind).collect();
        let mut slots = HashMap::with_capacity(self.declarations.len());
        for declaration in &self.declarations {
            slots.insert(
                declaration.kind,
                StateSlot {
                    behavior: (declaration.factory)(),
                    is_root: declaration.is_root,
                    transitions: TransitionSet::new(),
                },
            );
        }

        // Phase 2: every instance exists, so transitions may target any
        // declared kind. An undeclared target aborts construction.
        for &kind in &order {
            let mut set = TransitionSet::new();
            if let Some(slot) = slots.get_mut(&kind) {
                slot.behavior.set_transitions(&mut set);
            }
            for transition in set.as_slice() {
                if !declared.contains(&transition.target()) {
                    return Err(GraphError::UndeclaredTarget {
                        from: kind,
                        target: transition.target(),
                    });
                }
            }
            if let Some(slot) = slots.get_mut(&kind) {
                slot.transitions = set;
            }
        }

        Ok(StateRegistry {
            slots,
            roots,
            children: self.children,
        })
    }
}

impl<K: StateKind, C> Default for StateGraph<K, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
    enum TestKind {
        Idle,
        Move,
        Walk,
        Ghost,
    }

    impl StateKind for TestKind {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Move => "Move",
                Self::Walk => "Walk",
                Self::Ghost => "Ghost",
            }
        }
    }

    struct Inert;

    impl Behavior<TestKind, ()> for Inert {
        fn set_transitions(&self, _transitions: &mut TransitionSet<TestKind, ()>) {}
    }

    struct TargetsGhost;

    impl Behavior<TestKind, ()> for TargetsGhost {
        fn set_transitions(&self, transitions: &mut TransitionSet<TestKind, ()>) {
            transitions.add(TestKind::Ghost, |_: &()| true);
        }
    }

    #[test]
    fn build_requires_a_root() {
        let result = StateGraph::<TestKind, ()>::new()
            .child(TestKind::Idle, TestKind::Walk, || Inert)
            .build();

        assert!(matches!(result, Err(GraphError::NoRoots)));
    }

    #[test]
    fn build_rejects_duplicate_kinds() {
        let result = StateGraph::<TestKind, ()>::new()
            .root(TestKind::Idle, || Inert)
            .root(TestKind::Idle, || Inert)
            .build();

        assert_eq!(result.err(), Some(GraphError::DuplicateKind(TestKind::Idle)));
    }

    #[test]
    fn build_rejects_undeclared_parent() {
        let result = StateGraph::<TestKind, ()>::new()
            .root(TestKind::Idle, || Inert)
            .child(TestKind::Move, TestKind::Walk, || Inert)
            .build();

        assert_eq!(
            result.err(),
            Some(GraphError::UndeclaredParent {
                parent: TestKind::Move,
                child: TestKind::Walk,
            })
        );
    }

    #[test]
    fn build_rejects_undeclared_transition_target() {
        let result = StateGraph::<TestKind, ()>::new()
            .root(TestKind::Idle, || TargetsGhost)
            .build();

        assert_eq!(
            result.err(),
            Some(GraphError::UndeclaredTarget {
                from: TestKind::Idle,
                target: TestKind::Ghost,
            })
        );
    }

    #[test]
    fn build_creates_one_instance_per_kind() {
        let instantiated = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&instantiated);

        let registry = StateGraph::<TestKind, ()>::new()
            .root(TestKind::Idle, move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Inert
            })
            .root(TestKind::Move, || Inert)
            .build()
            .unwrap();

        assert_eq!(instantiated.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn registry_exposes_declared_structure() {
        let registry = StateGraph::<TestKind, ()>::new()
            .root(TestKind::Idle, || Inert)
            .root(TestKind::Move, || Inert)
            .child(TestKind::Move, TestKind::Walk, || Inert)
            .build()
            .unwrap();

        assert_eq!(registry.roots(), &[TestKind::Idle, TestKind::Move]);
        assert_eq!(registry.children(TestKind::Move), &[TestKind::Walk]);
        assert!(registry.children(TestKind::Idle).is_empty());
        assert!(registry.is_root(TestKind::Idle));
        assert!(!registry.is_root(TestKind::Walk));
        assert!(registry.contains(TestKind::Walk));
        assert!(!registry.contains(TestKind::Ghost));
    }

    #[test]
    fn declaration_order_is_irrelevant_for_validation() {
        // Children may be declared before their parent.
        let registry = StateGraph::<TestKind, ()>::new()
            .child(TestKind::Move, TestKind::Walk, || Inert)
            .root(TestKind::Move, || Inert)
            .build()
            .unwrap();

        assert_eq!(registry.roots(), &[TestKind::Move]);
        assert_eq!(registry.children(TestKind::Move), &[TestKind::Walk]);
    }
}
