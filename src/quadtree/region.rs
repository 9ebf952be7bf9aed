use crate::bodies::PointMass;

/// Index of the north-west child (low x, high y).
pub const NW: usize = 0;
/// Index of the north-east child (high x, high y).
pub const NE: usize = 1;
/// Index of the south-west child (low x, low y).
pub const SW: usize = 2;
/// Index of the south-east child (high x, low y).
pub const SE: usize = 3;

/// Relative growth applied to a computed bounding square so the largest
/// coordinates fall strictly inside the half-open region.
const BOUNDS_PADDING: f64 = 1e-9;

/// An axis-aligned region `[start_x, end_x) x [start_y, end_y)`.
///
/// The lower bounds are inclusive and the upper bounds exclusive, so the four
/// quadrants of a region partition it without gaps or overlaps.
///
/// # Examples
///
/// ```
/// use nbody_quadtree::quadtree::Region;
///
/// let region = Region::new(0.0, 0.0, 1.0, 1.0);
/// assert!(region.contains(0.0, 0.5));
/// assert!(!region.contains(1.0, 0.5)); // upper bound is exclusive
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl Region {
    pub fn new(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self { start_x, start_y, end_x, end_y }
    }

    /// A square with its lower corner at `(start_x, start_y)`.
    pub fn square(start_x: f64, start_y: f64, side: f64) -> Self {
        Self::new(start_x, start_y, start_x + side, start_y + side)
    }

    /// The smallest square (up to padding) containing every finite point.
    ///
    /// Falls back to the unit square when there are no finite points.
    ///
    /// ```
    /// use nbody_quadtree::bodies::PointMass;
    /// use nbody_quadtree::quadtree::Region;
    ///
    /// let points = [
    ///     PointMass { x: 0.2, y: 0.1, mass: 1.0 },
    ///     PointMass { x: 0.8, y: 0.3, mass: 1.0 },
    /// ];
    /// let region = Region::bounding(points);
    /// assert!(points.iter().all(|p| region.contains(p.x, p.y)));
    /// assert!((region.width() - 0.6).abs() < 1e-6);
    /// ```
    pub fn bounding<I>(points: I) -> Self
    where
        I: IntoIterator<Item = PointMass>,
    {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in points {
            if !(p.x.is_finite() && p.y.is_finite()) {
                continue;
            }
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if min_x > max_x {
            return Self::square(0.0, 0.0, 1.0);
        }

        // A single point (or a degenerate line) still needs a non-empty square.
        let scale = min_x.abs().max(min_y.abs()).max(max_x.abs()).max(max_y.abs()).max(1.0);
        let mut side = (max_x - min_x).max(max_y - min_y).max(scale * f64::EPSILON * 4.0);
        side *= 1.0 + BOUNDS_PADDING;
        while !(min_x + side > max_x && min_y + side > max_y) {
            side *= 2.0;
        }
        Self::square(min_x, min_y, side)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.end_x - self.start_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.end_y - self.start_y
    }

    #[inline]
    pub fn midpoint(&self) -> (f64, f64) {
        (
            self.start_x + (self.end_x - self.start_x) / 2.0,
            self.start_y + (self.end_y - self.start_y) / 2.0,
        )
    }

    /// False once the midpoint no longer falls strictly inside the region,
    /// i.e. the region has shrunk to the floating-point resolution.
    pub fn is_divisible(&self) -> bool {
        let (mid_x, mid_y) = self.midpoint();
        mid_x > self.start_x && mid_x < self.end_x && mid_y > self.start_y && mid_y < self.end_y
    }

    /// Returns true if the point (x, y) is inside this region.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.start_x && x < self.end_x && y >= self.start_y && y < self.end_y
    }

    /// Splits the region at its midpoint into the NW, NE, SW and SE quadrants.
    ///
    /// ```
    /// use nbody_quadtree::quadtree::{Region, NE, SW};
    ///
    /// let quadrants = Region::new(0.0, 0.0, 2.0, 2.0).quadrants();
    /// assert_eq!(quadrants[NE], Region::new(1.0, 1.0, 2.0, 2.0));
    /// assert_eq!(quadrants[SW], Region::new(0.0, 0.0, 1.0, 1.0));
    /// ```
    pub fn quadrants(&self) -> [Region; 4] {
        let (mid_x, mid_y) = self.midpoint();
        [
            Region::new(self.start_x, mid_y, mid_x, self.end_y), // NW
            Region::new(mid_x, mid_y, self.end_x, self.end_y),   // NE
            Region::new(self.start_x, self.start_y, mid_x, mid_y), // SW
            Region::new(mid_x, self.start_y, self.end_x, mid_y),   // SE
        ]
    }

    /// Index of the quadrant that holds `(x, y)`, for a point inside the region.
    #[inline]
    pub fn quadrant_index(&self, x: f64, y: f64) -> usize {
        let (mid_x, mid_y) = self.midpoint();
        match (y >= mid_y, x >= mid_x) {
            (true, false) => NW,
            (true, true) => NE,
            (false, false) => SW,
            (false, true) => SE,
        }
    }
}
