use crate::search;
use crate::traits::WeightedPather;

/// Compute a cheapest path from `from` to `to` by uniform-cost search.
///
/// Nodes are expanded in order of accumulated cost alone (Dijkstra's
/// algorithm restricted to the part of the graph reachable from `from`), and
/// the search stops as soon as `to` is taken off the open set. Returns the
/// full path (including both endpoints), or an empty vector if `to` cannot
/// be reached.
pub fn uniform_cost_path<P: WeightedPather>(pather: &P, from: P::Node, to: P::Node) -> Vec<P::Node> {
    search::best_first(pather, from, to, |_| 0.0)
}
