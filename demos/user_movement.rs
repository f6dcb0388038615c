//! A small movement agent: an idle root with two nested animation states,
//! and a move root with a nested walk state.
//!
//! Run with `cargo run --example user_movement`.

use stratum::core::{Behavior, StateKind, TransitionSet};
use stratum::graph::StateGraph;
use stratum::machine::StateMachine;
use stratum::state_kinds;

state_kinds! {
    pub enum UserKind {
        Idle,
        Move,
        DefaultIdleAnim,
        SpecialIdleAnim,
        Walk,
    }
}

#[derive(Default)]
struct UserInput {
    move_axis: f32,
    idle_ticks: u32,
}

struct Idle;

impl Behavior<UserKind, UserInput> for Idle {
    fn set_transitions(&self, transitions: &mut TransitionSet<UserKind, UserInput>) {
        transitions.add(UserKind::Move, |input: &UserInput| input.move_axis != 0.0);
    }

    fn on_enter(&mut self, input: &mut UserInput) -> Option<UserKind> {
        input.idle_ticks = 0;
        Some(UserKind::DefaultIdleAnim)
    }
}

struct Move;

impl Behavior<UserKind, UserInput> for Move {
    fn set_transitions(&self, transitions: &mut TransitionSet<UserKind, UserInput>) {
        transitions.add(UserKind::Idle, |input: &UserInput| input.move_axis == 0.0);
    }

    fn on_enter(&mut self, _input: &mut UserInput) -> Option<UserKind> {
        Some(UserKind::Walk)
    }
}

/// Plays the default idle loop until the user has idled long enough for a
/// flourish.
struct DefaultIdleAnim;

impl Behavior<UserKind, UserInput> for DefaultIdleAnim {
    fn set_transitions(&self, transitions: &mut TransitionSet<UserKind, UserInput>) {
        transitions.add(UserKind::SpecialIdleAnim, |input: &UserInput| {
            input.idle_ticks >= 5
        });
    }

    fn on_update(&mut self, input: &mut UserInput) {
        input.idle_ticks += 1;
    }
}

struct SpecialIdleAnim;

impl Behavior<UserKind, UserInput> for SpecialIdleAnim {
    fn set_transitions(&self, _transitions: &mut TransitionSet<UserKind, UserInput>) {}
}

struct Walk;

impl Behavior<UserKind, UserInput> for Walk {
    fn set_transitions(&self, _transitions: &mut TransitionSet<UserKind, UserInput>) {}
}

fn branch_display(machine: &StateMachine<UserKind, UserInput>) -> String {
    machine
        .active_branch()
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(" > ")
}

fn main() {
    let mut machine = StateMachine::builder()
        .graph(
            StateGraph::new()
                .root(UserKind::Idle, || Idle)
                .root(UserKind::Move, || Move)
                .child(UserKind::Idle, UserKind::DefaultIdleAnim, || DefaultIdleAnim)
                .child(UserKind::Idle, UserKind::SpecialIdleAnim, || SpecialIdleAnim)
                .child(UserKind::Move, UserKind::Walk, || Walk),
        )
        .context(UserInput::default())
        .initial(UserKind::Idle)
        .build()
        .expect("graph is well formed");

    // Idle long enough to trigger the special idle animation.
    for frame in 0..7 {
        machine.tick().expect("tick");
        println!("frame {frame}: {}", branch_display(&machine));
    }

    // Push the stick: the whole idle subtree exits and Move enters.
    machine.context_mut().move_axis = 1.0;
    machine.tick().expect("tick");
    println!("stick pushed: {}", branch_display(&machine));

    // Release: back to idle with its default animation child.
    machine.context_mut().move_axis = 0.0;
    machine.tick().expect("tick");
    println!("stick released: {}", branch_display(&machine));
}
