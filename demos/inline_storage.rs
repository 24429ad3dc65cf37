//! Inline Storage
//!
//! This demo builds an engine without any heap allocation for its buffers.
//!
//! Key concepts:
//! - Compile-time sized `EngineStorage`
//! - Caller-owned transitions and buffers
//! - Multi-hop routing across a ring of nodes
//!
//! Run with: cargo run --example inline_storage

use goalfsm::core::Transition;
use goalfsm::engine::{Engine, EngineStorage};
use tracing_subscriber::EnvFilter;

const RING: u8 = 6;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Inline Storage ===\n");

    let ring: Vec<Transition> = (0..RING).map(|n| Transition::new(n, (n + 1) % RING)).collect();
    let mut storage = EngineStorage::<8, { RING as usize }>::new();
    let mut engine = Engine::from_storage(&mut storage).expect("storage sizes are valid");

    for transition in &ring {
        engine.register(transition).expect("ring fits in storage");
    }

    for target in [3u8, 1, 5] {
        engine.set_target(target);
        let mut hops = 0;
        while engine.tick().advanced() {
            hops += 1;
        }
        println!(
            "reached {} in {hops} hops ({} of {} slots used)",
            engine.current(),
            engine.registry().len(),
            engine.registry().capacity()
        );
    }

    println!("\n=== Demo Complete ===");
}
