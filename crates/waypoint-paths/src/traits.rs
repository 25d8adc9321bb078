use std::fmt::Debug;
use std::hash::Hash;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Position type searched over (a graph node id, a grid point, ...).
    type Node: Copy + Eq + Hash + Debug;

    /// Append the nodes enterable from `node` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<Self::Node>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: Self::Node, to: Self::Node) -> f64;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    fn estimate(&self, from: Self::Node, to: Self::Node) -> f64;
}
