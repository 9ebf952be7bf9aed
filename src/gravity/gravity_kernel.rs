use crate::bodies::PointMass;
use crate::utils::{finite_or_zero, inverse_sqrt, LEAF_CAPACITY};

/// A fixed-width group of source bodies laid out as lanes.
///
/// This is the storage of a quadtree leaf and the input of the batched kernel.
/// Lanes past `len` are always zero, so a zero-mass lane contributes no force.
///
/// # Examples
///
/// ```
/// use nbody_quadtree::bodies::PointMass;
/// use nbody_quadtree::gravity::LeafBatch;
///
/// let mut batch = LeafBatch::new();
/// assert!(batch.push(PointMass { x: 0.5, y: 0.5, mass: 2.0 }));
/// assert_eq!(batch.len(), 1);
/// assert_eq!(batch.get(0).map(|p| p.mass), Some(2.0));
/// assert_eq!(batch.get(1), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LeafBatch {
    pub(crate) xs: [f64; LEAF_CAPACITY],
    pub(crate) ys: [f64; LEAF_CAPACITY],
    pub(crate) masses: [f64; LEAF_CAPACITY],
    len: usize,
}

impl LeafBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a batch from up to `LEAF_CAPACITY` points. Extra points are ignored.
    pub fn from_points(points: &[PointMass]) -> Self {
        let mut batch = Self::new();
        for &p in points.iter().take(LEAF_CAPACITY) {
            batch.push(p);
        }
        batch
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == LEAF_CAPACITY
    }

    /// Appends a point. Returns `false` when the batch is already full.
    pub fn push(&mut self, p: PointMass) -> bool {
        if self.is_full() {
            return false;
        }
        self.xs[self.len] = p.x;
        self.ys[self.len] = p.y;
        self.masses[self.len] = p.mass;
        self.len += 1;
        true
    }

    pub fn get(&self, index: usize) -> Option<PointMass> {
        (index < self.len).then(|| PointMass {
            x: self.xs[index],
            y: self.ys[index],
            mass: self.masses[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = PointMass> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Folds `p` into the occupied lane closest to it.
    ///
    /// Masses add and the lane moves to the mass-weighted position, so the
    /// batch keeps its total mass and center of mass.
    pub fn merge_into_nearest(&mut self, p: PointMass) {
        let nearest = (0..self.len).min_by(|&a, &b| {
            let da = (self.xs[a] - p.x).powi(2) + (self.ys[a] - p.y).powi(2);
            let db = (self.xs[b] - p.x).powi(2) + (self.ys[b] - p.y).powi(2);
            da.total_cmp(&db)
        });
        let Some(i) = nearest else {
            self.push(p);
            return;
        };
        let mass = self.masses[i] + p.mass;
        self.xs[i] = (self.xs[i] * self.masses[i] + p.x * p.mass) / mass;
        self.ys[i] = (self.ys[i] * self.masses[i] + p.y * p.mass) / mass;
        self.masses[i] = mass;
    }

    /// Total mass and mass-weighted center of the occupied lanes.
    ///
    /// The center is `(0.0, 0.0)` when the total mass is zero.
    pub fn mass_and_center(&self) -> (f64, (f64, f64)) {
        let mut total_mass = 0.0;
        let mut com_x = 0.0;
        let mut com_y = 0.0;
        for lane in 0..self.len {
            total_mass += self.masses[lane];
            com_x += self.xs[lane] * self.masses[lane];
            com_y += self.ys[lane] * self.masses[lane];
        }
        if total_mass > 0.0 {
            com_x /= total_mass;
            com_y /= total_mass;
        }
        (total_mass, (com_x, com_y))
    }
}

/// Computes the gravitational force exerted on `receiver` by `source`.
///
/// Magnitude is `G * m1 * m2 / d^2`, directed from the receiver toward the source.
/// When the pair is closer than `min_separation` on both axes the force is zero,
/// which also covers a body interacting with itself. Non-finite components are
/// replaced with zero.
///
/// # Examples
///
/// ```
/// use nbody_quadtree::bodies::PointMass;
/// use nbody_quadtree::gravity::pairwise_force;
///
/// let a = PointMass { x: 0.0, y: 0.0, mass: 1.0 };
/// let b = PointMass { x: 2.0, y: 0.0, mass: 4.0 };
/// let (fx, fy) = pairwise_force(&a, &b, 1.0, 1e-3);
/// assert!((fx - 1.0).abs() < 1e-2); // 1 * 1 * 4 / 2^2
/// assert_eq!(fy, 0.0);
///
/// // Coincident bodies are clamped to zero instead of blowing up.
/// assert_eq!(pairwise_force(&a, &a, 1.0, 1e-3), (0.0, 0.0));
/// ```
#[inline]
pub fn pairwise_force(
    receiver: &PointMass,
    source: &PointMass,
    gravity: f64,
    min_separation: f64,
) -> (f64, f64) {
    let dx = source.x - receiver.x;
    let dy = source.y - receiver.y;
    if dx.abs() < min_separation && dy.abs() < min_separation {
        return (0.0, 0.0);
    }
    let dist_sq = dx * dx + dy * dy;
    let inv_dist = inverse_sqrt(dist_sq);
    let magnitude = gravity * receiver.mass * source.mass * inv_dist * inv_dist * inv_dist;
    (finite_or_zero(magnitude * dx), finite_or_zero(magnitude * dy))
}

/// Portable batched kernel: `receiver` against every lane of `batch`, summed.
///
/// The lane loop has no data-dependent control flow so it can be vectorized.
pub fn batched_force(
    receiver: &PointMass,
    batch: &LeafBatch,
    gravity: f64,
    min_separation: f64,
) -> (f64, f64) {
    let g_m = gravity * receiver.mass;
    let mut lane_fx = [0.0; LEAF_CAPACITY];
    let mut lane_fy = [0.0; LEAF_CAPACITY];
    for lane in 0..LEAF_CAPACITY {
        let dx = batch.xs[lane] - receiver.x;
        let dy = batch.ys[lane] - receiver.y;
        let near = dx.abs() < min_separation && dy.abs() < min_separation;
        let dist_sq = dx * dx + dy * dy;
        let inv_dist = inverse_sqrt(dist_sq);
        let magnitude = g_m * batch.masses[lane] * inv_dist * inv_dist * inv_dist;
        if !near {
            lane_fx[lane] = finite_or_zero(magnitude * dx);
            lane_fy[lane] = finite_or_zero(magnitude * dy);
        }
    }
    (lane_fx.iter().sum(), lane_fy.iter().sum())
}

/// Batched leaf kernel used by the tree traversal.
///
/// Uses the AVX2 kernel when the `simd` feature is on and the CPU supports it,
/// and the portable kernel otherwise.
#[inline]
pub fn leaf_force(
    receiver: &PointMass,
    batch: &LeafBatch,
    gravity: f64,
    min_separation: f64,
) -> (f64, f64) {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if std::is_x86_feature_detected!("avx2") {
            return unsafe {
                crate::gravity::batched_force_avx2(receiver, batch, gravity, min_separation)
            };
        }
    }
    batched_force(receiver, batch, gravity, min_separation)
}
