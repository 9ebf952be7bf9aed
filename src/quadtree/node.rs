use crate::bodies::PointMass;
use crate::gravity::LeafBatch;
use crate::quadtree::Region;
use crate::utils::MAX_TREE_DEPTH;

/// Quadtree node over a square region of the plane.
///
/// There are three kinds of nodes:
/// - `Empty`: a region holding no bodies
/// - `Leaf`: up to `LEAF_CAPACITY` bodies stored as kernel lanes
/// - `Internal`: four owned children covering the NW, NE, SW and SE quadrants
///
/// `mass` and `com` (center of mass) are only meaningful after
/// [`aggregate_mass`](QuadNode::aggregate_mass) has run.
///
/// # Examples
///
/// ```
/// use nbody_quadtree::bodies::PointMass;
/// use nbody_quadtree::quadtree::{QuadNode, Region};
///
/// let mut node = QuadNode::new(Region::new(0.0, 0.0, 1.0, 1.0));
/// assert!(node.insert(PointMass { x: 0.25, y: 0.75, mass: 2.0 }));
/// assert!(!node.insert(PointMass { x: 1.5, y: 0.5, mass: 1.0 })); // outside, dropped
///
/// node.aggregate_mass();
/// assert_eq!(node.total_mass(), 2.0);
/// assert_eq!(node.center_of_mass(), (0.25, 0.75));
/// ```
#[derive(Debug, Clone)]
pub enum QuadNode {
    /// No bodies yet.
    Empty(Region),
    /// Holds up to `LEAF_CAPACITY` bodies.
    Leaf {
        region: Region,
        batch: LeafBatch,
        mass: f64,
        com: (f64, f64),
    },
    /// Aggregate of four children; owns no bodies itself.
    Internal {
        region: Region,
        mass: f64,
        com: (f64, f64),
        children: Box<[QuadNode; 4]>, // NW, NE, SW, SE
    },
}

impl QuadNode {
    pub fn new(region: Region) -> Self {
        QuadNode::Empty(region)
    }

    pub fn region(&self) -> Region {
        match self {
            QuadNode::Empty(region) => *region,
            QuadNode::Leaf { region, .. } => *region,
            QuadNode::Internal { region, .. } => *region,
        }
    }

    /// Aggregate mass of the subtree. Zero for empty nodes.
    pub fn total_mass(&self) -> f64 {
        match self {
            QuadNode::Empty(_) => 0.0,
            QuadNode::Leaf { mass, .. } | QuadNode::Internal { mass, .. } => *mass,
        }
    }

    /// Mass-weighted mean position of the subtree.
    ///
    /// Only defined for nodes with positive aggregate mass.
    pub fn center_of_mass(&self) -> (f64, f64) {
        debug_assert!(
            self.total_mass() > 0.0,
            "center of mass queried on a node without mass (missing aggregation?)"
        );
        match self {
            QuadNode::Empty(_) => (0.0, 0.0),
            QuadNode::Leaf { com, .. } | QuadNode::Internal { com, .. } => *com,
        }
    }

    pub fn children(&self) -> Option<&[QuadNode; 4]> {
        match self {
            QuadNode::Internal { children, .. } => Some(&**children),
            _ => None,
        }
    }

    pub fn batch(&self) -> Option<&LeafBatch> {
        match self {
            QuadNode::Leaf { batch, .. } => Some(batch),
            _ => None,
        }
    }

    /// Inserts a body below this node.
    ///
    /// Returns `false` if the body lies outside the node's region, in which
    /// case it is dropped.
    pub fn insert(&mut self, p: PointMass) -> bool {
        self.insert_at(p, 0)
    }

    fn insert_at(&mut self, p: PointMass, depth: usize) -> bool {
        if !self.region().contains(p.x, p.y) {
            return false;
        }
        match self {
            QuadNode::Empty(region) => {
                let region = *region;
                let mut batch = LeafBatch::new();
                batch.push(p);
                *self = QuadNode::Leaf { region, batch, mass: 0.0, com: (0.0, 0.0) };
                true
            }
            QuadNode::Leaf { region, batch, .. } => {
                if batch.push(p) {
                    return true;
                }
                if depth >= MAX_TREE_DEPTH || !region.is_divisible() {
                    // Practically coincident bodies; splitting would not separate them.
                    batch.merge_into_nearest(p);
                    return true;
                }
                let region = *region;
                let existing = *batch;
                self.split(region);
                for q in existing.iter() {
                    self.insert_at(q, depth);
                }
                self.insert_at(p, depth)
            }
            QuadNode::Internal { region, children, .. } => {
                let index = region.quadrant_index(p.x, p.y);
                children[index].insert_at(p, depth + 1)
            }
        }
    }

    // Rewrites this node in place as an internal node with four empty children.
    fn split(&mut self, region: Region) {
        let [nw, ne, sw, se] = region.quadrants();
        *self = QuadNode::Internal {
            region,
            mass: 0.0,
            com: (0.0, 0.0),
            children: Box::new([
                QuadNode::Empty(nw),
                QuadNode::Empty(ne),
                QuadNode::Empty(sw),
                QuadNode::Empty(se),
            ]),
        };
    }

    /// Post-order pass computing `mass` and `com` for every node of the subtree.
    ///
    /// Returns the subtree's total mass and center of mass.
    pub fn aggregate_mass(&mut self) -> (f64, (f64, f64)) {
        match self {
            QuadNode::Empty(_) => (0.0, (0.0, 0.0)),
            QuadNode::Leaf { batch, mass, com, .. } => {
                let (total_mass, center) = batch.mass_and_center();
                *mass = total_mass;
                *com = center;
                (total_mass, center)
            }
            QuadNode::Internal { mass, com, children, .. } => {
                let mut total_mass = 0.0;
                let mut com_x = 0.0;
                let mut com_y = 0.0;
                for child in children.iter_mut() {
                    let (m, (cx, cy)) = child.aggregate_mass();
                    total_mass += m;
                    com_x += cx * m;
                    com_y += cy * m;
                }
                if total_mass > 0.0 {
                    com_x /= total_mass;
                    com_y /= total_mass;
                }
                *mass = total_mass;
                *com = (com_x, com_y);
                (total_mass, (com_x, com_y))
            }
        }
    }
}
