//! One integration step of the Barnes–Hut simulation, and a driver that
//! repeats it.
//!
//! Each tick builds a fresh quadtree from the current bodies, computes every
//! body's force against that snapshot in parallel, and advances the bodies
//! with semi-implicit Euler integration.
//!
//! # Example
//!
//! ```
//! use nbody_quadtree::bodies::Body;
//! use nbody_quadtree::simulation::Simulation;
//! use nbody_quadtree::utils::SimulationParams;
//!
//! let bodies = vec![
//!     Body::new(0.3, 0.5, 0.0, 0.0, 1.0).unwrap(),
//!     Body::new(0.7, 0.5, 0.0, 0.0, 1.0).unwrap(),
//! ];
//! let params = SimulationParams::new(Some(1.0), Some(0.01), None, None, Some(2));
//! let mut sim = Simulation::new(bodies, params).expect("Failed to create simulation");
//!
//! sim.simulate(10).expect("Simulation failed");
//! assert_eq!(sim.ticks(), 10);
//! assert!(sim.bodies()[0].x > 0.3 && sim.bodies()[1].x < 0.7);
//! ```
use std::time::Instant;
use log::debug;
use crate::bodies::Body;
use crate::errors::SimulationError;
use crate::quadtree::{QuadTree, TreeStats};
use crate::simulation::WorkerPool;
use crate::utils::SimulationParams;

/// Advances `bodies` by one time step.
///
/// Spawns a temporary pool of `params.worker_count` threads for this call.
/// Use [`Simulation`] to reuse one pool across many ticks.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, if any body has a
/// non-positive mass or a non-finite position or velocity, or if the worker
/// pool cannot be started. Bodies are left untouched on error.
pub fn run_tick(bodies: &mut [Body], params: &SimulationParams) -> Result<TreeStats, SimulationError> {
    params.validate()?;
    check_bodies(bodies)?;
    let pool = WorkerPool::new(params.worker_count)?;
    Ok(tick(bodies, params, &pool))
}

fn check_bodies(bodies: &[Body]) -> Result<(), SimulationError> {
    for body in bodies {
        if !(body.mass.is_finite() && body.mass > 0.0) {
            return Err(SimulationError::InvalidMass);
        }
        body.check_finite()?;
    }
    Ok(())
}

// Inputs must already be validated.
fn tick(bodies: &mut [Body], params: &SimulationParams, pool: &WorkerPool) -> TreeStats {
    let started = Instant::now();
    let tree = QuadTree::build(bodies);
    let stats = tree.stats();
    let built = started.elapsed();

    let SimulationParams { gravity, time_step, theta, min_separation, .. } = *params;
    pool.for_each_block(bodies, |block| {
        for body in block.iter_mut() {
            let force = tree.force_on(&body.point_mass(), theta, gravity, min_separation);
            body.apply_force(force, time_step);
        }
    });
    drop(tree);

    debug!(
        "Tick over {} bodies: {} nodes ({} leaves, {} internal, depth {}), build {:?}, total {:?}",
        bodies.len(),
        stats.node_count,
        stats.leaf_count,
        stats.internal_count,
        stats.max_depth,
        built,
        started.elapsed()
    );
    stats
}

/// A running simulation: bodies, fixed parameters and a reusable worker pool.
pub struct Simulation {
    bodies: Vec<Body>,
    params: SimulationParams,
    pool: WorkerPool,
    last_stats: Option<TreeStats>,
    ticks: u64,
}

impl Simulation {
    /// Creates a simulation over `bodies`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters or any body are invalid, or if the
    /// worker pool cannot be started.
    pub fn new(bodies: Vec<Body>, params: SimulationParams) -> Result<Self, SimulationError> {
        params.validate()?;
        check_bodies(&bodies)?;
        let pool = WorkerPool::new(params.worker_count)?;
        Ok(Simulation { bodies, params, pool, last_stats: None, ticks: 0 })
    }

    /// Advances the simulation by one time step.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NonFiniteState`] or
    /// [`SimulationError::InvalidMass`] if a body was corrupted, either through
    /// [`bodies_mut`](Simulation::bodies_mut) or by a numerical blow-up.
    pub fn step(&mut self) -> Result<TreeStats, SimulationError> {
        check_bodies(&self.bodies)?;
        let stats = tick(&mut self.bodies, &self.params, &self.pool);
        self.last_stats = Some(stats);
        self.ticks += 1;
        Ok(stats)
    }

    /// Runs `steps` consecutive ticks, stopping at the first error.
    pub fn simulate(&mut self, steps: usize) -> Result<(), SimulationError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Tree statistics of the most recent tick, if any.
    pub fn last_tree_stats(&self) -> Option<TreeStats> {
        self.last_stats
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
