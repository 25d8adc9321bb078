//! Weighted directed graph with mutable connectivity.
//!
//! Nodes are identified by [`NodeId`]s handed out by a monotonic counter:
//! removing a node leaves a hole, ids are never recycled. Each node carries
//! its outgoing edges and an enabled/disabled tag; a disabled node keeps its
//! edges but cannot be entered by [`DirectedGraph::find`].

use std::collections::BTreeMap;
use std::fmt;

use waypoint_core::{Point, Range};

use crate::dijkstra::uniform_cost_path;
use crate::error::{self, PathError, Result};
use crate::grid::SquareGrid;
use crate::traits::{Pather, WeightedPather};

/// Identifier of a node in a [`DirectedGraph`]. Always `>= 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    /// The raw identifier value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a node takes part in searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// Can be entered by searches.
    #[default]
    Enabled,
    /// Skipped by searches; edges are kept.
    Disabled,
}

#[derive(Clone, Debug, Default)]
struct NodeEntry {
    edges: BTreeMap<NodeId, f64>,
    state: NodeState,
}

/// A sparse weighted directed graph.
///
/// Edge weights are expected to be non-negative; this is not checked, and
/// negative weights make search results meaningless.
#[derive(Clone, Debug, Default)]
pub struct DirectedGraph {
    last_id: u32,
    nodes: BTreeMap<NodeId, NodeEntry>,
}

impl DirectedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node` exists (was added and not removed).
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Live node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Outgoing edges of `node` as `(target, weight)`, ascending by target.
    /// Empty for a missing node.
    pub fn edges(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.nodes
            .get(&node)
            .into_iter()
            .flat_map(|e| e.edges.iter().map(|(&id, &w)| (id, w)))
    }

    /// Weight of the edge `a → b`, if any.
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.nodes.get(&a)?.edges.get(&b).copied()
    }

    /// Search state of `node`, or `None` if it does not exist.
    pub fn state(&self, node: NodeId) -> Option<NodeState> {
        self.nodes.get(&node).map(|e| e.state)
    }

    /// Whether `node` exists and is enabled.
    pub fn is_enabled(&self, node: NodeId) -> bool {
        self.state(node) == Some(NodeState::Enabled)
    }

    /// Allocate a new node with no edges.
    pub fn add(&mut self) -> NodeId {
        self.last_id += 1;
        let id = NodeId(self.last_id);
        self.nodes.insert(id, NodeEntry::default());
        id
    }

    /// Delete `node` and every edge pointing to it. No-op if absent.
    pub fn remove(&mut self, node: NodeId) {
        if self.nodes.remove(&node).is_none() {
            return;
        }
        for entry in self.nodes.values_mut() {
            entry.edges.remove(&node);
        }
    }

    /// Insert or overwrite the edge `a → b`. No-op if `a` does not exist.
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: f64) {
        match self.nodes.get_mut(&a) {
            Some(entry) => {
                entry.edges.insert(b, weight);
            }
            None => log::debug!("connect {} -> {}: no such source node", a, b),
        }
    }

    /// Remove the edge `a → b` if present.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) {
        if let Some(entry) = self.nodes.get_mut(&a) {
            entry.edges.remove(&b);
        }
    }

    /// Subdivide the edge `a → b` with a new midpoint node `m`.
    ///
    /// `a → b` is replaced by `a → m` and `m → b`, each carrying half the
    /// original weight. Fails with [`PathError::NotConnected`] and leaves
    /// the graph untouched if there is no edge `a → b`.
    pub fn split(&mut self, a: NodeId, b: NodeId) -> Result<NodeId> {
        let Some(weight) = self.weight(a, b) else {
            log::debug!("split {} -> {}: not connected", a, b);
            return Err(PathError::NotConnected { from: a, to: b });
        };

        let m = self.add();
        self.disconnect(a, b);
        self.connect(a, m, weight / 2.0);
        self.connect(m, b, weight / 2.0);
        Ok(m)
    }

    /// Let searches enter `node` again.
    pub fn enable(&mut self, node: NodeId) {
        self.set_state(node, NodeState::Enabled);
    }

    /// Exclude `node` from searches without touching its edges.
    pub fn disable(&mut self, node: NodeId) {
        self.set_state(node, NodeState::Disabled);
    }

    fn set_state(&mut self, node: NodeId, state: NodeState) {
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.state = state;
        }
    }

    /// Cheapest path from `origin` to `target`, both inclusive.
    ///
    /// Returns an empty vector when either node is missing or `target`
    /// cannot be reached through enabled nodes. `origin` itself is searched
    /// from even when disabled.
    pub fn find(&self, origin: NodeId, target: NodeId) -> Vec<NodeId> {
        if !self.contains(origin) || !self.contains(target) {
            return Vec::new();
        }
        uniform_cost_path(self, origin, target)
    }

    /// Total weight along `path`, or `None` if the path is empty or uses a
    /// missing edge.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<f64> {
        if path.is_empty() {
            return None;
        }
        path.windows(2)
            .map(|w| self.weight(w[0], w[1]))
            .sum::<Option<f64>>()
    }

    // -----------------------------------------------------------------------
    // Grid bridge
    // -----------------------------------------------------------------------

    /// Lay out a `width × height` 4-connected grid as new nodes.
    ///
    /// Each cell is linked to its left and upper neighbours in both
    /// directions, the edge `u → v` weighted by `costs[v]`. Returns the
    /// created ids in row-major order. Fails with
    /// [`PathError::SizeMismatch`] before adding anything if
    /// `costs.len() != width * height`.
    pub fn create_grid(&mut self, width: i32, height: i32, costs: &[f64]) -> Result<Vec<NodeId>> {
        let rng = Range::sized(width, height);
        error::check_size(rng.len(), costs.len())?;
        Ok(self.lay_grid(rng, costs))
    }

    /// Lower an existing [`SquareGrid`] into this graph, as
    /// [`create_grid`](Self::create_grid) does.
    pub fn add_grid(&mut self, grid: &SquareGrid) -> Vec<NodeId> {
        self.lay_grid(grid.range(), grid.costs())
    }

    fn lay_grid(&mut self, rng: Range, costs: &[f64]) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = Vec::with_capacity(rng.len());
        for p in rng {
            let node = self.add();
            let idx = ids.len();
            for side in [Point::new(p.x - 1, p.y), Point::new(p.x, p.y - 1)] {
                if let Some(n) = rng.index_of(side) {
                    self.connect(node, ids[n], costs[n]);
                    self.connect(ids[n], node, costs[idx]);
                }
            }
            ids.push(node);
        }
        log::debug!("laid out {} grid as {} nodes", rng, ids.len());
        ids
    }
}

impl Pather for DirectedGraph {
    type Node = NodeId;

    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        if let Some(entry) = self.nodes.get(&node) {
            // Edges into missing nodes are never followed.
            buf.extend(entry.edges.keys().copied().filter(|&n| self.is_enabled(n)));
        }
    }
}

impl WeightedPather for DirectedGraph {
    fn cost(&self, from: NodeId, to: NodeId) -> f64 {
        self.weight(from, to).unwrap_or(f64::INFINITY)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_id_round_trip() {
        let id = NodeId(17);
        let json = serde_json::to_string(&id).unwrap();
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn node_state_round_trip() {
        for state in [NodeState::Enabled, NodeState::Disabled] {
            let json = serde_json::to_string(&state).unwrap();
            let back: NodeState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }
}
