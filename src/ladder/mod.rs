//! Word ladders
//!
//! Equal-length words form a graph whose edges join words at Hamming
//! distance one. Ladders are shortest paths in that graph, found by
//! breadth-first search.

mod neighbors;
mod solver;

pub use neighbors::{
    BucketIndex, LexiconScan, NeighborMode, NeighborSource, NeighborStrategy, hamming_distance,
};
pub use solver::LadderSolver;
