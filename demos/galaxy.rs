// demos/galaxy.rs
//
// Runs a seeded galaxy-like population for a number of ticks and logs tree
// statistics. Configured through environment variables:
//
//   NBODY_COUNT         number of bodies (default 10000)
//   NBODY_TICKS         number of ticks (default 100)
//   NBODY_THREADS       worker threads (default: available parallelism)
//   NBODY_DISTRIBUTION  uniform | circle | torus (default torus)
//
//   RUST_LOG=info cargo run --example galaxy --release

use std::env;
use std::error::Error;
use std::time::Instant;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use nbody_quadtree::bodies::{populate, Distribution, MassMode};
use nbody_quadtree::simulation::Simulation;
use nbody_quadtree::utils::SimulationParams;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let count: usize = env_or("NBODY_COUNT", 10_000);
    let ticks: usize = env_or("NBODY_TICKS", 100);
    let distribution = match env::var("NBODY_DISTRIBUTION").as_deref() {
        Ok("uniform") => Distribution::Uniform,
        Ok("circle") => Distribution::UnitCircle,
        _ => Distribution::Torus,
    };
    let mut params = SimulationParams::default();
    params.worker_count = env_or("NBODY_THREADS", params.worker_count);

    let mut rng = StdRng::seed_from_u64(42);
    let bodies = populate(count, distribution, MassMode::Random, &mut rng);
    let mut sim = Simulation::new(bodies, params)?;
    info!("Simulating {} bodies for {} ticks with {:?}", count, ticks, params);

    let started = Instant::now();
    for tick in 0..ticks {
        let stats = sim.step()?;
        if tick % 10 == 0 {
            info!(
                "tick {}: {} nodes, {} leaves, depth {}",
                tick, stats.node_count, stats.leaf_count, stats.max_depth
            );
        }
    }
    let elapsed = started.elapsed();

    println!("Ran {} ticks over {} bodies in {:?}", sim.ticks(), count, elapsed);
    if let Some(stats) = sim.last_tree_stats() {
        println!("Final tree: {:?}", stats);
    }
    Ok(())
}
