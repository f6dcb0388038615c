//! A sentry with a machine-wide interrupt: whatever the sentry is doing,
//! cutting its power drops it. Demonstrates global transitions, observers,
//! and exporting the transition log.
//!
//! Run with `cargo run --example sentry_agent`.

use stratum::core::{Behavior, StateKind, TransitionSet};
use stratum::graph::StateGraph;
use stratum::machine::{StateEvent, StateMachine};
use stratum::state_kinds;

state_kinds! {
    pub enum SentryKind {
        Patrol,
        Engage,
        Offline,
        FollowRoute,
        Aim,
        Fire,
    }
}

#[derive(Default)]
struct SentryContext {
    intruder_visible: bool,
    target_locked: bool,
    powered: bool,
}

struct Patrol;

impl Behavior<SentryKind, SentryContext> for Patrol {
    fn set_transitions(&self, transitions: &mut TransitionSet<SentryKind, SentryContext>) {
        transitions.add(SentryKind::Engage, |ctx: &SentryContext| {
            ctx.intruder_visible
        });
    }

    fn on_enter(&mut self, _ctx: &mut SentryContext) -> Option<SentryKind> {
        Some(SentryKind::FollowRoute)
    }
}

struct Engage;

impl Behavior<SentryKind, SentryContext> for Engage {
    fn set_transitions(&self, transitions: &mut TransitionSet<SentryKind, SentryContext>) {
        transitions.add(SentryKind::Patrol, |ctx: &SentryContext| {
            !ctx.intruder_visible
        });
    }

    fn on_enter(&mut self, _ctx: &mut SentryContext) -> Option<SentryKind> {
        Some(SentryKind::Aim)
    }
}

struct Offline;

impl Behavior<SentryKind, SentryContext> for Offline {
    fn set_transitions(&self, _transitions: &mut TransitionSet<SentryKind, SentryContext>) {}
}

struct FollowRoute;

impl Behavior<SentryKind, SentryContext> for FollowRoute {
    fn set_transitions(&self, _transitions: &mut TransitionSet<SentryKind, SentryContext>) {}
}

struct Aim;

impl Behavior<SentryKind, SentryContext> for Aim {
    fn set_transitions(&self, transitions: &mut TransitionSet<SentryKind, SentryContext>) {
        transitions.add(SentryKind::Fire, |ctx: &SentryContext| ctx.target_locked);
    }
}

struct Fire;

impl Behavior<SentryKind, SentryContext> for Fire {
    fn set_transitions(&self, transitions: &mut TransitionSet<SentryKind, SentryContext>) {
        transitions.add(SentryKind::Aim, |ctx: &SentryContext| !ctx.target_locked);
    }
}

fn main() {
    let mut machine = StateMachine::builder()
        .graph(
            StateGraph::new()
                .root(SentryKind::Patrol, || Patrol)
                .root(SentryKind::Engage, || Engage)
                .root(SentryKind::Offline, || Offline)
                .child(SentryKind::Patrol, SentryKind::FollowRoute, || FollowRoute)
                .child(SentryKind::Engage, SentryKind::Aim, || Aim)
                .child(SentryKind::Engage, SentryKind::Fire, || Fire),
        )
        .context(SentryContext {
            powered: true,
            ..SentryContext::default()
        })
        .initial(SentryKind::Patrol)
        .global_transition(SentryKind::Offline, |ctx: &SentryContext| !ctx.powered)
        .observer(|event: &StateEvent<SentryKind>| match event {
            StateEvent::Entered { kind, depth } => {
                println!("{}entered {}", "  ".repeat(*depth), kind.name());
            }
            StateEvent::Exited { kind, depth } => {
                println!("{}exited {}", "  ".repeat(*depth), kind.name());
            }
            StateEvent::Switched { from, to, depth } => {
                println!("-- switch at depth {depth}: {} -> {}", from.name(), to.name());
            }
        })
        .build()
        .expect("sentry graph is well formed");

    machine.tick().expect("tick");

    machine.context_mut().intruder_visible = true;
    machine.tick().expect("tick");

    machine.context_mut().target_locked = true;
    machine.tick().expect("tick");

    // Power cut: the global transition interrupts the engagement subtree.
    machine.context_mut().powered = false;
    machine.tick().expect("tick");

    let exported = serde_json::to_string_pretty(machine.log()).expect("log serializes");
    println!("\ntransition log:\n{exported}");
}
