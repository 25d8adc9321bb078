use crate::search;
use crate::traits::AstarPather;

/// Compute a shortest path from `from` to `to` using A*.
///
/// The open set is ordered by `f = g + h`, where `h` is
/// [`AstarPather::estimate`] evaluated once when a node is first discovered.
/// Returns the full path (including both endpoints), or an empty vector if
/// `to` cannot be reached.
///
/// The result is only guaranteed optimal when the estimate never exceeds the
/// true remaining cost.
pub fn astar_path<P: AstarPather>(pather: &P, from: P::Node, to: P::Node) -> Vec<P::Node> {
    search::best_first(pather, from, to, |n| pather.estimate(n, to))
}
