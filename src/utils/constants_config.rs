// src/utils/constants_config.rs
use std::num::NonZeroUsize;
use crate::errors::SimulationError;
use crate::utils::DEFAULT_SIMULATION_PARAMS;

/// Run-wide simulation configuration, fixed for the lifetime of a run.
///
/// Passed explicitly into every tick and into the worker closures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Gravitational constant `G`.
    pub gravity: f64,
    /// Integration time step.
    pub time_step: f64,
    /// Barnes-Hut opening threshold. Smaller values open more nodes.
    pub theta: f64,
    /// Pairs closer than this on both axes exert no force on each other.
    pub min_separation: f64,
    /// Number of parallel workers used by the integration step.
    pub worker_count: usize,
}


impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            worker_count: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            ..DEFAULT_SIMULATION_PARAMS
        }
    }
}

impl SimulationParams {
    pub fn new(
        gravity: Option<f64>,
        time_step: Option<f64>,
        theta: Option<f64>,
        min_separation: Option<f64>,
        worker_count: Option<usize>,
    ) -> Self {
        let default = Self::default();
        Self {
            gravity: gravity.unwrap_or(default.gravity),
            time_step: time_step.unwrap_or(default.time_step),
            theta: theta.unwrap_or(default.theta),
            min_separation: min_separation.unwrap_or(default.min_separation),
            worker_count: worker_count.unwrap_or(default.worker_count),
        }
    }

    pub fn with_worker_count(self, worker_count: usize) -> Self {
        Self { worker_count, ..self }
    }

    pub fn with_theta(self, theta: f64) -> Self {
        Self { theta, ..self }
    }

    /// Checks that every parameter is usable by the tick function.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.gravity.is_finite() || self.gravity < 0.0 { return Err(SimulationError::InvalidGravity); }
        if !self.time_step.is_finite() || self.time_step <= 0.0 { return Err(SimulationError::InvalidTimeStep); }
        if !self.theta.is_finite() || self.theta < 0.0 { return Err(SimulationError::InvalidTheta); }
        if !self.min_separation.is_finite() || self.min_separation < 0.0 { return Err(SimulationError::InvalidSeparation); }
        if self.worker_count == 0 { return Err(SimulationError::InvalidWorkerCount); }
        Ok(())
    }
}
