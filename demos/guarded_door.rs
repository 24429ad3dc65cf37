//! Guarded Door
//!
//! This demo shows actions that refuse a hop until the world is ready.
//!
//! Key concepts:
//! - Guards built from readiness probes
//! - Automatic retry of the committed transition
//! - Re-targeting cancels a pending retry
//!
//! Run with: RUST_LOG=trace cargo run --example guarded_door

use goalfsm::builder::guarded_transition;
use goalfsm::core::{Node, Transition, TransitionResult};
use goalfsm::engine::TickOutcome;
use goalfsm::{node_enum, EngineBuilder};
use std::cell::Cell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

node_enum! {
    enum Door {
        Closed,
        Unlocked,
        Open,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Guarded Door ===\n");

    let badge_scanned = Rc::new(Cell::new(false));
    let probe = Rc::clone(&badge_scanned);
    let unlock = guarded_transition(Door::Closed, Door::Unlocked, move || probe.get());

    // The motor needs two pulses before the door swings open.
    let pulses = Rc::new(Cell::new(0u8));
    let motor = Rc::clone(&pulses);
    let swing = Transition::with_action(Door::Unlocked, Door::Open, move |_: &Transition| {
        motor.set(motor.get() + 1);
        TransitionResult::from(motor.get() >= 2)
    });
    let shut = Transition::new(Door::Open, Door::Unlocked);
    let relock = Transition::new(Door::Unlocked, Door::Closed);

    let mut engine = EngineBuilder::new()
        .transitions_capacity(4)
        .nodes_capacity(Door::ALL.len())
        .transitions([&unlock, &swing, &shut, &relock])
        .current(Door::Closed)
        .target(Door::Open)
        .build()
        .expect("door engine builds");

    for tick in 1..=8 {
        if tick == 3 {
            println!("Badge scanned");
            badge_scanned.set(true);
        }

        let outcome = engine.tick();
        let here = Door::try_from(engine.current()).map(|d| d.name().to_string());
        println!("tick {tick}: {outcome:?} (now {})", here.unwrap_or_default());

        if outcome == TickOutcome::AtTarget {
            break;
        }
    }

    println!("\nClosing again");
    engine.set_target(Door::Closed);
    while engine.tick().advanced() {}
    println!("Door is {:?}", Door::try_from(engine.current()));

    println!("\n=== Demo Complete ===");
}
