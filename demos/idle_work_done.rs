//! Idle / Work / Done
//!
//! This demo drives the smallest useful goal-directed machine.
//!
//! Key concepts:
//! - Setting a target instead of choosing the next state
//! - One hop per tick
//! - Blocking a transition halts the engine without crashing it
//!
//! Run with: RUST_LOG=debug cargo run --example idle_work_done

use goalfsm::core::{Node, NodeIndex, Transition, TransitionState};
use goalfsm::engine::{Engine, TickOutcome};
use goalfsm::node_enum;
use tracing_subscriber::EnvFilter;

node_enum! {
    enum Job {
        Idle,
        Work,
        Done,
    }
}

fn name(index: NodeIndex) -> String {
    Job::try_from(index)
        .map(|job| job.name().to_string())
        .unwrap_or_else(|index| index.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Idle / Work / Done ===\n");

    let start = Transition::new(Job::Idle, Job::Work);
    let finish = Transition::new(Job::Work, Job::Done);

    let mut engine = Engine::new(2, Job::ALL.len()).expect("valid capacities");
    engine.register(&start).expect("registry has room");
    engine.register(&finish).expect("registry has room");

    println!("Blocking {} -> {}", Job::Work.name(), Job::Done.name());
    engine.set_enabled(&finish, TransitionState::Blocked);
    engine.set_target(Job::Done);

    for tick in 1..=6 {
        if tick == 4 {
            println!("Unblocking {} -> {}", Job::Work.name(), Job::Done.name());
            engine.set_enabled(&finish, TransitionState::Available);
        }

        match engine.tick() {
            TickOutcome::Advanced { from, to } => {
                println!("tick {tick}: {} -> {}", name(from), name(to))
            }
            TickOutcome::Unreachable => {
                println!("tick {tick}: halted at {}", name(engine.current()))
            }
            TickOutcome::AtTarget => println!("tick {tick}: resting at {}", name(engine.current())),
            TickOutcome::Failed { attempts, .. } => println!("tick {tick}: retry #{attempts}"),
        }
    }

    println!("\nFinal status: {}", serde_json::to_string_pretty(&engine.status()).unwrap());
    engine.release();

    println!("\n=== Demo Complete ===");
}
