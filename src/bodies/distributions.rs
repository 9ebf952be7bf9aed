//! Initial body populations inside the unit square.
//!
//! These are conveniences for callers that need a starting population; the
//! simulation core accepts any slice of [`Body`] values.
//!
//! # Example
//!
//! ```
//! use nbody_quadtree::bodies::{Distribution, MassMode, populate};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let bodies = populate(1000, Distribution::UnitCircle, MassMode::Random, &mut rng);
//! assert_eq!(bodies.len(), 1000);
//! assert!(bodies.iter().all(|b| b.mass >= 0.3 && b.mass < 1.3));
//! ```
use std::f64::consts::PI;
use rand::Rng;
use crate::bodies::Body;

/// Spatial layout of a generated population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Uniform over the unit square.
    Uniform,
    /// Uniform over the disc of radius 0.5 centred at (0.5, 0.5).
    UnitCircle,
    /// Uniform over the annulus between radius 0.25 and 0.5 around (0.5, 0.5).
    Torus,
}

/// How masses are assigned to generated bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassMode {
    /// Every body has mass 1.0.
    Equal,
    /// Masses drawn uniformly from `[0.3, 1.3)`.
    Random,
}

const CENTER: f64 = 0.5;
const OUTER_RADIUS: f64 = 0.5;
const INNER_RADIUS: f64 = 0.25;
const MIN_RANDOM_MASS: f64 = 0.3;
/// Initial velocity components are drawn from `[-VELOCITY_SPREAD, VELOCITY_SPREAD)`.
const VELOCITY_SPREAD: f64 = 0.0005;

/// Generates `count` bodies with the requested layout and masses.
pub fn populate<R: Rng + ?Sized>(
    count: usize,
    distribution: Distribution,
    mass_mode: MassMode,
    rng: &mut R,
) -> Vec<Body> {
    (0..count)
        .map(|_| {
            let (x, y) = match distribution {
                Distribution::Uniform => (rng.random::<f64>(), rng.random::<f64>()),
                Distribution::UnitCircle => sample_annulus(rng, 0.0, OUTER_RADIUS),
                Distribution::Torus => sample_annulus(rng, INNER_RADIUS, OUTER_RADIUS),
            };
            let mass = match mass_mode {
                MassMode::Equal => 1.0,
                MassMode::Random => MIN_RANDOM_MASS + rng.random::<f64>(),
            };
            Body {
                mass,
                x,
                y,
                velocity_x: rng.random_range(-VELOCITY_SPREAD..VELOCITY_SPREAD),
                velocity_y: rng.random_range(-VELOCITY_SPREAD..VELOCITY_SPREAD),
            }
        })
        .collect()
}

// Area-uniform sampling: radius from the square root of a uniform variate.
fn sample_annulus<R: Rng + ?Sized>(rng: &mut R, inner: f64, outer: f64) -> (f64, f64) {
    let u: f64 = rng.random();
    let radius = (inner * inner + u * (outer * outer - inner * inner)).sqrt();
    let angle = 2.0 * PI * rng.random::<f64>();
    (CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
}
