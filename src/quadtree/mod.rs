mod region;
mod node;
mod barnes_hut;
mod stats;
mod tree;

pub use region::*;
pub use node::*;
pub use barnes_hut::*;
pub use stats::*;
pub use tree::*;

#[cfg(test)]
mod region_tests;
