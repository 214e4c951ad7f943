//! Zombie AI Brain
//!
//! This example demonstrates a tick-driven state machine for an enemy AI.
//!
//! Key concepts:
//! - Per-tick update hooks that request their own transitions
//! - Deferred transitions resolved at the next tick
//! - Transition log inspection after a run
//!
//! Run with: cargo run --example zombie_brain

use gambit::machine::{MachineBuilder, StateHooks};
use gambit::state_id;

state_id! {
    enum Brain {
        Idle,
        Wander,
        Chase,
        Attack,
    }
}

/// What the zombie can sense about the world each tick.
struct Senses {
    player_distance: f32,
    ticks_idle: u32,
    growls: u32,
    bites: u32,
}

fn main() {
    println!("=== Zombie AI Brain ===\n");

    let mut senses = Senses {
        player_distance: 50.0,
        ticks_idle: 0,
        growls: 0,
        bites: 0,
    };

    let mut brain = MachineBuilder::new()
        .state(
            Brain::Idle,
            StateHooks::new()
                .on_enter(|s: &mut Senses| s.ticks_idle = 0)
                .on_update(|s: &mut Senses| {
                    s.ticks_idle += 1;
                    if s.player_distance < 20.0 {
                        Some(Brain::Chase)
                    } else if s.ticks_idle > 2 {
                        Some(Brain::Wander)
                    } else {
                        None
                    }
                }),
        )
        .state(
            Brain::Wander,
            StateHooks::new().on_update(|s: &mut Senses| {
                if s.player_distance < 20.0 {
                    Some(Brain::Chase)
                } else {
                    None
                }
            }),
        )
        .state(
            Brain::Chase,
            StateHooks::new()
                .on_enter(|s: &mut Senses| s.growls += 1)
                .on_update(|s: &mut Senses| {
                    s.player_distance -= 5.0;
                    if s.player_distance <= 2.0 {
                        Some(Brain::Attack)
                    } else {
                        None
                    }
                }),
        )
        .state(
            Brain::Attack,
            StateHooks::new().on_update(|s: &mut Senses| {
                s.bites += 1;
                if s.player_distance > 2.0 {
                    Some(Brain::Chase)
                } else {
                    None
                }
            }),
        )
        .initial(Brain::Idle)
        .build(&mut senses)
        .unwrap();

    // The player sneaks closer over twelve ticks.
    for tick in 0..12 {
        if tick == 4 {
            senses.player_distance = 18.0;
        }
        brain.update(&mut senses);
        println!(
            "tick {tick:>2}: state={:?} distance={:.1}",
            brain.current().unwrap(),
            senses.player_distance
        );
    }

    println!("\nGrowls: {}, bites: {}", senses.growls, senses.bites);

    println!("\nTransition log:");
    for record in brain.log().records() {
        println!("  {:?} -> {:?} ({:?})", record.from, record.to, record.cause);
    }

    println!("\n=== Example Complete ===");
}
