use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use crate::traits::WeightedPather;

// ---------------------------------------------------------------------------
// Per-search bookkeeping
// ---------------------------------------------------------------------------

/// Search record of a discovered node.
#[derive(Clone, Debug)]
pub(crate) struct Node<N> {
    /// Accumulated cost from the origin.
    pub(crate) g: f64,
    /// Heuristic estimate, computed once on discovery.
    pub(crate) h: f64,
    pub(crate) parent: Option<N>,
    pub(crate) closed: bool,
}

/// Heap entry ordered by `f`, then by insertion sequence.
///
/// `g` is the cost at push time: an entry whose `g` is above the node's
/// current cost has been superseded and is skipped when popped.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef<N> {
    pub(crate) node: N,
    pub(crate) f: f64,
    pub(crate) g: f64,
    pub(crate) seq: u64,
}

impl<N> Ord for NodeRef<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest pushed entry among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for NodeRef<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for NodeRef<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for NodeRef<N> {}

// ---------------------------------------------------------------------------
// Best-first search
// ---------------------------------------------------------------------------

/// Best-first search from `from` to `to`, ordering the open set by
/// `g + estimate(node)`.
///
/// Closed nodes are never reopened, which is only sound for non-negative
/// costs. Returns the path including both endpoints, or an empty vector when
/// the open set runs dry first.
pub(crate) fn best_first<P, H>(pather: &P, from: P::Node, to: P::Node, estimate: H) -> Vec<P::Node>
where
    P: WeightedPather,
    H: Fn(P::Node) -> f64,
{
    let mut nodes: HashMap<P::Node, Node<P::Node>> = HashMap::new();
    let mut open: BinaryHeap<NodeRef<P::Node>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    nodes.insert(
        from,
        Node {
            g: 0.0,
            h: 0.0,
            parent: None,
            closed: false,
        },
    );
    open.push(NodeRef {
        node: from,
        f: 0.0,
        g: 0.0,
        seq,
    });

    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let cur = current.node;
        let current_g = match nodes.get_mut(&cur) {
            // Skip stale entries.
            Some(n) if n.closed || current.g > n.g => continue,
            Some(n) => {
                if cur == to {
                    break 'search true;
                }
                n.closed = true;
                n.g
            }
            None => continue,
        };

        expanded += 1;
        log::trace!("expanding {:?} at cost {}", cur, current_g);

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        for &next in nbuf.iter() {
            let tentative = current_g + pather.cost(cur, next);

            let f = match nodes.entry(next) {
                Entry::Occupied(mut e) => {
                    let n = e.get_mut();
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                    n.g = tentative;
                    n.parent = Some(cur);
                    n.h + tentative
                }
                Entry::Vacant(e) => {
                    let h = estimate(next);
                    e.insert(Node {
                        g: tentative,
                        h,
                        parent: Some(cur),
                        closed: false,
                    });
                    h + tentative
                }
            };

            seq += 1;
            open.push(NodeRef {
                node: next,
                f,
                g: tentative,
                seq,
            });
        }
    };

    log::debug!(
        "search {:?} -> {:?}: {} after {} expansions",
        from,
        to,
        if found { "found" } else { "unreachable" },
        expanded
    );

    if !found {
        return Vec::new();
    }

    // Reconstruct path.
    let mut path = vec![to];
    let mut cur = to;
    while let Some(parent) = nodes.get(&cur).and_then(|n| n.parent) {
        path.push(parent);
        cur = parent;
    }
    path.reverse();
    path
}
