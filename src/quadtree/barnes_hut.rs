use crate::bodies::PointMass;
use crate::gravity::{leaf_force, pairwise_force};
use crate::quadtree::QuadNode;

/// Returns true if a node of side `width` at distance `distance_sq.sqrt()` is
/// far enough to be treated as a single point mass.
///
/// This is the opening criterion `width / d < theta`, evaluated without a
/// square root or division. A zero distance is never far.
///
/// ```
/// use nbody_quadtree::quadtree::is_far;
///
/// assert!(is_far(0.1, 1.0, 0.5));   // 0.1 / 1.0 < 0.5
/// assert!(!is_far(0.5, 1.0, 0.5));  // equality opens the node
/// assert!(!is_far(0.1, 0.0, 10.0)); // zero distance always opens
/// ```
#[inline]
pub fn is_far(width: f64, distance_sq: f64, theta: f64) -> bool {
    width * width < theta * theta * distance_sq
}

impl QuadNode {
    /// Barnes–Hut approximation of the gravitational force on `p`.
    ///
    /// Internal nodes that satisfy the opening criterion contribute through
    /// their center of mass; all others are opened. Leaves always run the
    /// batched kernel over their bodies, so a body never attracts itself.
    ///
    /// `mass` and `com` must be current, see
    /// [`aggregate_mass`](QuadNode::aggregate_mass).
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody_quadtree::bodies::PointMass;
    /// use nbody_quadtree::quadtree::{QuadNode, Region};
    ///
    /// let mut root = QuadNode::new(Region::new(0.0, 0.0, 1.0, 1.0));
    /// let a = PointMass { x: 0.25, y: 0.5, mass: 1.0 };
    /// let b = PointMass { x: 0.75, y: 0.5, mass: 1.0 };
    /// root.insert(a);
    /// root.insert(b);
    /// root.aggregate_mass();
    ///
    /// let (fx, fy) = root.force_on(&a, 0.5, 1.0, 1e-3);
    /// assert!(fx > 0.0);
    /// assert_eq!(fy, 0.0);
    /// ```
    pub fn force_on(
        &self,
        p: &PointMass,
        theta: f64,
        gravity: f64,
        min_separation: f64,
    ) -> (f64, f64) {
        match self {
            QuadNode::Empty(_) => (0.0, 0.0),
            QuadNode::Leaf { batch, .. } => leaf_force(p, batch, gravity, min_separation),
            QuadNode::Internal { region, mass, com, children } => {
                let dx = com.0 - p.x;
                let dy = com.1 - p.y;
                if is_far(region.width(), dx * dx + dy * dy, theta) {
                    let aggregate = PointMass { x: com.0, y: com.1, mass: *mass };
                    return pairwise_force(p, &aggregate, gravity, min_separation);
                }
                children.iter().fold((0.0, 0.0), |(fx, fy), child| {
                    let (cx, cy) = child.force_on(p, theta, gravity, min_separation);
                    (fx + cx, fy + cy)
                })
            }
        }
    }
}
