use crate::errors::SimulationError;

/// A point mass with position and velocity in the simulation plane.
///
/// Positions and velocities live in an application-defined coordinate space
/// (typically the unit square). Bodies are mutated in place every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Body mass, always positive.
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
}

impl Body {
    /// Creates a new Body.
    ///
    /// # Errors
    ///
    /// Returns an error if `mass` is not a positive finite number, or if any
    /// position or velocity component is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody_quadtree::bodies::Body;
    ///
    /// let body = Body::new(0.5, 0.5, 0.0, 0.0, 1.0).expect("Failed to create body");
    /// assert_eq!(body.mass, 1.0);
    ///
    /// assert!(Body::new(0.5, 0.5, 0.0, 0.0, 0.0).is_err());
    /// ```
    pub fn new(
        x: f64,
        y: f64,
        velocity_x: f64,
        velocity_y: f64,
        mass: f64,
    ) -> Result<Self, SimulationError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimulationError::InvalidMass);
        }
        let body = Body { mass, x, y, velocity_x, velocity_y };
        body.check_finite()?;
        Ok(body)
    }

    /// Snapshot of the body's position and mass, as stored in the quadtree.
    #[inline]
    pub fn point_mass(&self) -> PointMass {
        PointMass { x: self.x, y: self.y, mass: self.mass }
    }

    /// Applies a net force over `dt` with semi-implicit Euler integration.
    ///
    /// Velocity is updated first and the new velocity moves the position.
    ///
    /// ```
    /// use nbody_quadtree::bodies::Body;
    ///
    /// let mut body = Body::new(0.0, 0.0, 1.0, 0.0, 2.0).unwrap();
    /// body.apply_force((2.0, 0.0), 0.5);
    /// assert_eq!(body.velocity_x, 1.5);
    /// assert_eq!(body.x, 0.75);
    /// ```
    #[inline]
    pub fn apply_force(&mut self, force: (f64, f64), dt: f64) {
        let acceleration_x = force.0 / self.mass;
        let acceleration_y = force.1 / self.mass;
        self.velocity_x += acceleration_x * dt;
        self.velocity_y += acceleration_y * dt;
        self.x += self.velocity_x * dt;
        self.y += self.velocity_y * dt;
    }

    pub(crate) fn check_finite(&self) -> Result<(), SimulationError> {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.velocity_x.is_finite()
            && self.velocity_y.is_finite();
        if finite { Ok(()) } else { Err(SimulationError::NonFiniteState) }
    }
}

/// Position and mass of a body, without velocity.
///
/// Used for quadtree insertion and as the synthetic body that stands in for a
/// far-away subtree.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointMass {
    pub x: f64,
    pub y: f64,
    pub mass: f64,
}
