use std::fmt;
use std::error::Error;

/// Represents errors that can occur while configuring or stepping a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Indicates an invalid mass value (e.g., negative, zero or non-finite mass).
    InvalidMass,
    /// Indicates an invalid time step (non-positive or non-finite).
    InvalidTimeStep,
    /// Indicates an invalid Barnes-Hut threshold (negative or non-finite).
    InvalidTheta,
    /// Indicates an invalid minimum-separation guard distance.
    InvalidSeparation,
    /// Indicates an invalid gravitational constant.
    InvalidGravity,
    /// Indicates that zero workers were requested.
    InvalidWorkerCount,
    /// A body position or velocity is NaN or infinite.
    NonFiniteState,
    /// The worker pool could not be created.
    WorkerPool(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::InvalidMass => write!(f, "Invalid mass value"),
            SimulationError::InvalidTimeStep => write!(f, "Invalid time step"),
            SimulationError::InvalidTheta => write!(f, "Invalid Barnes-Hut threshold"),
            SimulationError::InvalidSeparation => write!(f, "Invalid minimum separation"),
            SimulationError::InvalidGravity => write!(f, "Invalid gravitational constant"),
            SimulationError::InvalidWorkerCount => write!(f, "Worker count must be at least 1"),
            SimulationError::NonFiniteState => write!(f, "Body state is not finite"),
            SimulationError::WorkerPool(msg) => write!(f, "Worker pool error: {}", msg),
        }
    }
}


impl Error for SimulationError {}
