//! Shortest-path search over weighted directed graphs and cost grids.
//!
//! This crate provides two search front-ends:
//!
//! - **Uniform-cost search** over a mutable [`DirectedGraph`]
//!   ([`DirectedGraph::find`]), with node enable/disable and edge splitting
//! - **A\*** over a dense [`SquareGrid`] ([`SquareGrid::find`]), with
//!   diagonal movement gated by a [`Corners`] policy
//!
//! A grid can also be lowered into a graph with
//! [`DirectedGraph::create_grid`] / [`DirectedGraph::add_grid`] when graph
//! mutation is needed on grid-shaped topology.
//!
//! Every search returns the full path (both endpoints included), or an empty
//! vector when the target is unreachable. All working state is local to the
//! call. Costs must be non-negative.
//!
//! # Trait hierarchy
//!
//! The searches themselves are generic and can run over any embedder type:
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | [`uniform_cost_path`] |
//! | [`AstarPather`] : [`WeightedPather`] | [`astar_path`] |

mod astar;
mod dijkstra;
mod error;
mod graph;
mod grid;
mod search;
mod traits;

pub use astar::astar_path;
pub use dijkstra::uniform_cost_path;
pub use error::{PathError, Result};
pub use graph::{DirectedGraph, NodeId, NodeState};
pub use grid::{Corners, DIAGONAL_COST_FACTOR, GridPather, SquareGrid};
pub use traits::{AstarPather, Pather, WeightedPather};
pub use waypoint_core::{Point, Range};
