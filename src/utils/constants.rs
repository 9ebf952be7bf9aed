use crate::utils;

/// Maximum number of bodies a quadtree leaf holds before it splits.
///
/// This is also the lane count of the batched leaf kernel.
pub const LEAF_CAPACITY: usize = 8;

/// Depth at which a full leaf stops splitting and merges incoming bodies instead.
pub const MAX_TREE_DEPTH: usize = 48;

pub const DEFAULT_SIMULATION_PARAMS: utils::SimulationParams = utils::SimulationParams {
    gravity: 0.0005,
    time_step: 0.001,
    theta: 0.5,
    min_separation: 0.001,
    worker_count: 1,
};
