//! The machine driver: owns the registry, the context, and the active
//! branch, and exposes the per-tick entry points.

use crate::core::StateKind;
use crate::graph::StateRegistry;
use crate::machine::builder::MachineBuilder;
use crate::machine::error::MachineError;
use crate::machine::log::{SwitchRecord, TransitionLog};
use crate::machine::observer::{Observer, StateEvent};
use crate::machine::resolver::{self, Switch};
use chrono::Utc;

/// Which hook a cascade drives down the active branch.
#[derive(Clone, Copy)]
enum Phase {
    Update,
    FixedUpdate,
    LateUpdate,
}

/// A running hierarchical state machine.
///
/// The machine owns the built registry, the caller's context, and the
/// active branch: the path of currently entered states from the active
/// root down to the deepest leaf, stored root-first. The branch is always
/// a simple path; each level's parent is simply the level above it.
///
/// Drive it from the host scheduler: [`tick`](StateMachine::tick) resolves
/// at most one transition and cascades `on_update`;
/// [`fixed_tick`](StateMachine::fixed_tick) and
/// [`late_tick`](StateMachine::late_tick) cascade their hooks without
/// resolving anything.
pub struct StateMachine<K: StateKind, C> {
    registry: StateRegistry<K, C>,
    context: C,
    branch: Vec<K>,
    observers: Vec<Box<dyn Observer<K>>>,
    log: TransitionLog<K>,
    ticks: u64,
}

impl<K: StateKind, C> StateMachine<K, C> {
    /// Start configuring a machine.
    pub fn builder() -> MachineBuilder<K, C> {
        MachineBuilder::new()
    }

    pub(crate) fn with_parts(
        registry: StateRegistry<K, C>,
        context: C,
        initial: K,
        observers: Vec<Box<dyn Observer<K>>>,
    ) -> Result<Self, MachineError<K>> {
        let mut machine = Self {
            registry,
            context,
            branch: Vec::new(),
            observers,
            log: TransitionLog::new(),
            ticks: 0,
        };
        machine.enter_from(0, initial)?;
        Ok(machine)
    }

    /// Run one primary tick: resolve transitions over the active branch,
    /// apply at most one switch, then cascade `on_update` down the
    /// (possibly new) branch.
    pub fn tick(&mut self) -> Result<(), MachineError<K>> {
        self.ticks += 1;
        if let Some(switch) = resolver::next_switch(&self.registry, &self.branch, &self.context)? {
            self.apply(switch)?;
        }
        self.cascade(Phase::Update)
    }

    /// Cascade `on_fixed_update` down the active branch. Transitions are
    /// resolved only by the primary tick.
    pub fn fixed_tick(&mut self) -> Result<(), MachineError<K>> {
        self.cascade(Phase::FixedUpdate)
    }

    /// Cascade `on_late_update` down the active branch. Transitions are
    /// resolved only by the primary tick.
    pub fn late_tick(&mut self) -> Result<(), MachineError<K>> {
        self.cascade(Phase::LateUpdate)
    }

    /// The active branch, root first (pure).
    pub fn active_branch(&self) -> &[K] {
        &self.branch
    }

    /// The active root state (pure).
    pub fn active_root(&self) -> K {
        self.branch[0]
    }

    /// The deepest active state (pure).
    pub fn active_leaf(&self) -> K {
        self.branch[self.branch.len() - 1]
    }

    /// Shared view of the context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable view of the context, for the host to feed inputs between
    /// ticks.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// The declared root kinds, in declaration order (pure).
    pub fn roots(&self) -> &[K] {
        self.registry.roots()
    }

    /// The declared children of `kind`, in declaration order (pure).
    pub fn children(&self, kind: K) -> &[K] {
        self.registry.children(kind)
    }

    /// The log of applied switches (pure).
    pub fn log(&self) -> &TransitionLog<K> {
        &self.log
    }

    /// Number of primary ticks run so far (pure).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn apply(&mut self, switch: Switch<K>) -> Result<(), MachineError<K>> {
        let from = self.branch[switch.depth];
        self.exit_from(switch.depth)?;
        self.emit(StateEvent::Switched {
            from,
            to: switch.target,
            depth: switch.depth,
        });
        self.log = self.log.record(SwitchRecord {
            from,
            to: switch.target,
            depth: switch.depth,
            tick: self.ticks,
            timestamp: Utc::now(),
        });
        self.enter_from(switch.depth, switch.target)
    }

    /// Tear down the branch from `depth` to the leaf, deepest first.
    fn exit_from(&mut self, depth: usize) -> Result<(), MachineError<K>> {
        while self.branch.len() > depth {
            let leaf_depth = self.branch.len() - 1;
            let kind = self.branch[leaf_depth];
            let slot = self
                .registry
                .slot_mut(kind)
                .ok_or(MachineError::UnknownKind(kind))?;
            slot.behavior.on_exit(&mut self.context);
            self.branch.pop();
            self.emit(StateEvent::Exited {
                kind,
                depth: leaf_depth,
            });
        }
        Ok(())
    }

    /// Enter `kind` at `depth`, then keep entering whatever child each
    /// `on_enter` hook requests. Iterative, so hierarchy depth costs no
    /// call-stack.
    fn enter_from(&mut self, depth: usize, kind: K) -> Result<(), MachineError<K>> {
        debug_assert_eq!(self.branch.len(), depth);
        let mut next = kind;
        loop {
            if self.branch.contains(&next) {
                return Err(MachineError::EnterCycle(next));
            }
            if !self.branch.is_empty() && self.registry.is_root(next) {
                return Err(MachineError::RootAsChild(next));
            }
            let slot = self
                .registry
                .slot_mut(next)
                .ok_or(MachineError::UnknownKind(next))?;
            let requested_child = slot.behavior.on_enter(&mut self.context);
            self.branch.push(next);
            self.emit(StateEvent::Entered {
                kind: next,
                depth: self.branch.len() - 1,
            });
            match requested_child {
                Some(child) => next = child,
                None => return Ok(()),
            }
        }
    }

    fn cascade(&mut self, phase: Phase) -> Result<(), MachineError<K>> {
        for depth in 0..self.branch.len() {
            let kind = self.branch[depth];
            let slot = self
                .registry
                .slot_mut(kind)
                .ok_or(MachineError::UnknownKind(kind))?;
            match phase {
                Phase::Update => slot.behavior.on_update(&mut self.context),
                Phase::FixedUpdate => slot.behavior.on_fixed_update(&mut self.context),
                Phase::LateUpdate => slot.behavior.on_late_update(&mut self.context),
            }
        }
        Ok(())
    }

    fn emit(&mut self, event: StateEvent<K>) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
