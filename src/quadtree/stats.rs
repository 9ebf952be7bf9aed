use crate::quadtree::QuadNode;

/// Shape summary of a quadtree, collected after each build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub node_count: usize,
    pub empty_count: usize,
    pub leaf_count: usize,
    pub internal_count: usize,
    /// Bodies stored in leaves. Smaller than the inserted count when
    /// coincident bodies were merged.
    pub body_count: usize,
    /// Depth of the deepest node, with the root at depth 0.
    pub max_depth: usize,
}

impl TreeStats {
    pub fn collect(root: &QuadNode) -> Self {
        let mut stats = TreeStats::default();
        stats.visit(root, 0);
        stats
    }

    fn visit(&mut self, node: &QuadNode, depth: usize) {
        self.node_count += 1;
        self.max_depth = self.max_depth.max(depth);
        match node {
            QuadNode::Empty(_) => self.empty_count += 1,
            QuadNode::Leaf { batch, .. } => {
                self.leaf_count += 1;
                self.body_count += batch.len();
            }
            QuadNode::Internal { children, .. } => {
                self.internal_count += 1;
                for child in children.iter() {
                    self.visit(child, depth + 1);
                }
            }
        }
    }
}
