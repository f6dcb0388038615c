//! Property-based tests for the machine's structural invariants.
//!
//! These tests use proptest to drive a small hierarchical graph through
//! randomly generated input schedules and verify the invariants hold after
//! every tick.

use proptest::prelude::*;
use stratum::core::{Behavior, StateKind, TransitionSet};
use stratum::graph::StateGraph;
use stratum::machine::StateMachine;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
enum SentryKind {
    Calm,
    Alert,
    Down,
    Watch,
    Scan,
    Track,
}

impl StateKind for SentryKind {
    fn name(&self) -> &str {
        match self {
            Self::Calm => "Calm",
            Self::Alert => "Alert",
            Self::Down => "Down",
            Self::Watch => "Watch",
            Self::Scan => "Scan",
            Self::Track => "Track",
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Signals {
    alert: bool,
    calm: bool,
    scan: bool,
    watch: bool,
    down: bool,
}

struct Calm;

impl Behavior<SentryKind, Signals> for Calm {
    fn set_transitions(&self, transitions: &mut TransitionSet<SentryKind, Signals>) {
        transitions.add(SentryKind::Alert, |signals: &Signals| signals.alert);
    }

    fn on_enter(&mut self, _signals: &mut Signals) -> Option<SentryKind> {
        Some(SentryKind::Watch)
    }
}

struct Alert;

impl Behavior<SentryKind, Signals> for Alert {
    fn set_transitions(&self, transitions: &mut TransitionSet<SentryKind, Signals>) {
        transitions.add(SentryKind::Calm, |signals: &Signals| signals.calm);
    }

    fn on_enter(&mut self, _signals: &mut Signals) -> Option<SentryKind> {
        Some(SentryKind::Track)
    }
}

struct Down;

impl Behavior<SentryKind, Signals> for Down {
    fn set_transitions(&self, _transitions: &mut TransitionSet<SentryKind, Signals>) {}
}

struct Watch;

impl Behavior<SentryKind, Signals> for Watch {
    fn set_transitions(&self, transitions: &mut TransitionSet<SentryKind, Signals>) {
        transitions.add(SentryKind::Scan, |signals: &Signals| signals.scan);
    }
}

struct Scan;

impl Behavior<SentryKind, Signals> for Scan {
    fn set_transitions(&self, transitions: &mut TransitionSet<SentryKind, Signals>) {
        transitions.add(SentryKind::Watch, |signals: &Signals| signals.watch);
    }
}

struct Track;

impl Behavior<SentryKind, Signals> for Track {
    fn set_transitions(&self, _transitions: &mut TransitionSet<SentryKind, Signals>) {}
}

fn sentry_machine() -> StateMachine<SentryKind, Signals> {
    StateMachine::builder()
        .graph(
            StateGraph::new()
                .root(SentryKind::Calm, || Calm)
                .root(SentryKind::Alert, || Alert)
                .root(SentryKind::Down, || Down)
                .child(SentryKind::Calm, SentryKind::Watch, || Watch)
                .child(SentryKind::Calm, SentryKind::Scan, || Scan)
                .child(SentryKind::Alert, SentryKind::Track, || Track),
        )
        .context(Signals::default())
        .initial(SentryKind::Calm)
        .global_transition(SentryKind::Down, |signals: &Signals| signals.down)
        .build()
        .expect("sentry graph builds")
}

const DECLARED: [SentryKind; 6] = [
    SentryKind::Calm,
    SentryKind::Alert,
    SentryKind::Down,
    SentryKind::Watch,
    SentryKind::Scan,
    SentryKind::Track,
];

prop_compose! {
    fn arbitrary_signals()(
        alert in any::<bool>(),
        calm in any::<bool>(),
        scan in any::<bool>(),
        watch in any::<bool>(),
        down in any::<bool>(),
    ) -> Signals {
        Signals { alert, calm, scan, watch, down }
    }
}

proptest! {
    #[test]
    fn active_branch_stays_a_simple_path(
        schedule in prop::collection::vec(arbitrary_signals(), 1..40)
    ) {
        let mut machine = sentry_machine();

        for signals in schedule {
            *machine.context_mut() = signals;
            machine.tick().unwrap();

            let branch = machine.active_branch();
            prop_assert!(!branch.is_empty());
            prop_assert!(machine.roots().contains(&branch[0]));
            for kind in branch {
                prop_assert!(DECLARED.contains(kind));
            }
            for (i, kind) in branch.iter().enumerate() {
                prop_assert!(!branch[i + 1..].contains(kind));
            }
        }
    }

    #[test]
    fn quiet_ticks_are_idempotent(
        schedule in prop::collection::vec(arbitrary_signals(), 0..20)
    ) {
        let mut machine = sentry_machine();
        for signals in schedule {
            *machine.context_mut() = signals;
            machine.tick().unwrap();
        }

        let branch_before = machine.active_branch().to_vec();
        let switches_before = machine.log().len();

        *machine.context_mut() = Signals::default();
        machine.tick().unwrap();
        machine.tick().unwrap();

        prop_assert_eq!(machine.active_branch(), branch_before.as_slice());
        prop_assert_eq!(machine.log().len(), switches_before);
    }

    #[test]
    fn resolution_is_deterministic(
        schedule in prop::collection::vec(arbitrary_signals(), 1..30)
    ) {
        let mut left = sentry_machine();
        let mut right = sentry_machine();

        for signals in schedule {
            *left.context_mut() = signals;
            *right.context_mut() = signals;
            left.tick().unwrap();
            right.tick().unwrap();
            prop_assert_eq!(left.active_branch(), right.active_branch());
        }

        let left_switches: Vec<(SentryKind, SentryKind, usize)> =
            left.log().records().iter().map(|r| (r.from, r.to, r.depth)).collect();
        let right_switches: Vec<(SentryKind, SentryKind, usize)> =
            right.log().records().iter().map(|r| (r.from, r.to, r.depth)).collect();
        prop_assert_eq!(left_switches, right_switches);
    }

    #[test]
    fn down_interrupt_wins_from_any_branch(
        schedule in prop::collection::vec(arbitrary_signals(), 0..20)
    ) {
        let mut machine = sentry_machine();
        for signals in schedule {
            *machine.context_mut() = signals;
            machine.tick().unwrap();
        }

        *machine.context_mut() = Signals {
            down: true,
            alert: true,
            calm: true,
            scan: true,
            watch: true,
        };
        machine.tick().unwrap();

        prop_assert_eq!(machine.active_branch(), &[SentryKind::Down]);
    }

    #[test]
    fn kind_serializes_as_its_name(index in 0..DECLARED.len()) {
        let kind = DECLARED[index];
        let json = serde_json::to_string(&kind).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", kind.name()));
    }
}
