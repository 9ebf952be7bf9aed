use log::warn;
use crate::bodies::{Body, PointMass};
use crate::quadtree::{QuadNode, Region, TreeStats};

/// Barnes–Hut quadtree over a snapshot of body positions and masses.
///
/// The tree owns its nodes through boxed children; dropping it frees the
/// whole structure. It is rebuilt from scratch every tick.
///
/// # Examples
///
/// ```
/// use nbody_quadtree::bodies::Body;
/// use nbody_quadtree::quadtree::QuadTree;
///
/// let bodies = vec![
///     Body::new(0.1, 0.1, 0.0, 0.0, 1.0).unwrap(),
///     Body::new(0.9, 0.2, 0.0, 0.0, 2.0).unwrap(),
///     Body::new(0.4, 0.8, 0.0, 0.0, 1.5).unwrap(),
/// ];
/// let tree = QuadTree::build(&bodies);
/// assert_eq!(tree.len(), 3);
/// assert!((tree.total_mass() - 4.5).abs() < 1e-12);
///
/// let (fx, fy) = tree.force_on(&bodies[0].point_mass(), 0.5, 1.0, 1e-3);
/// assert!(fx > 0.0 && fy > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: QuadNode,
    len: usize,
    dropped: usize,
}

impl QuadTree {
    /// An empty tree over a caller-supplied region.
    pub fn with_region(region: Region) -> Self {
        QuadTree { root: QuadNode::new(region), len: 0, dropped: 0 }
    }

    /// Builds an aggregated tree over the bounding square of `bodies`.
    pub fn build(bodies: &[Body]) -> Self {
        let region = Region::bounding(bodies.iter().map(Body::point_mass));
        Self::build_in(bodies, region)
    }

    /// Builds an aggregated tree over `region`.
    ///
    /// Bodies outside the region are dropped from the tree and reported
    /// through [`dropped`](QuadTree::dropped).
    pub fn build_in(bodies: &[Body], region: Region) -> Self {
        let mut tree = Self::with_region(region);
        for body in bodies {
            tree.insert(body.point_mass());
        }
        if tree.dropped > 0 {
            warn!(
                "{} of {} bodies fell outside the tree region {:?} and were ignored",
                tree.dropped,
                bodies.len(),
                region
            );
        }
        tree.aggregate_mass();
        tree
    }

    /// Inserts one point. Returns `false` if it lies outside the root region.
    ///
    /// Call [`aggregate_mass`](QuadTree::aggregate_mass) after the last
    /// insertion and before querying forces.
    pub fn insert(&mut self, p: PointMass) -> bool {
        let inserted = self.root.insert(p);
        if inserted {
            self.len += 1;
        } else {
            self.dropped += 1;
        }
        inserted
    }

    pub fn aggregate_mass(&mut self) {
        self.root.aggregate_mass();
    }

    /// Approximate gravitational force on `p`, see [`QuadNode::force_on`].
    #[inline]
    pub fn force_on(
        &self,
        p: &PointMass,
        theta: f64,
        gravity: f64,
        min_separation: f64,
    ) -> (f64, f64) {
        self.root.force_on(p, theta, gravity, min_separation)
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }

    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    pub fn region(&self) -> Region {
        self.root.region()
    }

    /// Number of points accepted by the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of points rejected for lying outside the root region.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn total_mass(&self) -> f64 {
        self.root.total_mass()
    }
}
