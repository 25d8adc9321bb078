//! Property tests: search results checked against brute-force oracles.
//!
//! Weights are small integers so path sums compare exactly.

use proptest::prelude::*;
use waypoint_paths::{
    Corners, DirectedGraph, GridPather, NodeId, Pather, Point, SquareGrid, uniform_cost_path,
};

/// Random graph description: node count, edges `(from, to, weight)` by
/// index, and a disabled flag per node.
#[derive(Debug, Clone)]
struct Spec {
    nodes: usize,
    edges: Vec<(usize, usize, u8)>,
    disabled: Vec<bool>,
}

fn arb_spec() -> impl Strategy<Value = Spec> {
    (2..9usize).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0..10u8), 0..n * 3),
            prop::collection::vec(prop::bool::weighted(0.2), n),
        )
            .prop_map(|(nodes, edges, disabled)| Spec {
                nodes,
                edges,
                disabled,
            })
    })
}

fn build(spec: &Spec) -> (DirectedGraph, Vec<NodeId>) {
    let mut g = DirectedGraph::new();
    let ids: Vec<NodeId> = (0..spec.nodes).map(|_| g.add()).collect();
    for &(a, b, w) in &spec.edges {
        g.connect(ids[a], ids[b], f64::from(w));
    }
    for (i, &off) in spec.disabled.iter().enumerate() {
        if off {
            g.disable(ids[i]);
        }
    }
    (g, ids)
}

/// Bellman-Ford distances from `origin`, never entering disabled nodes.
fn oracle(g: &DirectedGraph, ids: &[NodeId], origin: usize) -> Vec<Option<f64>> {
    let mut dist: Vec<Option<f64>> = vec![None; ids.len()];
    dist[origin] = Some(0.0);
    for _ in 0..ids.len() {
        for (i, &a) in ids.iter().enumerate() {
            let Some(da) = dist[i] else {
                continue;
            };
            for (b, w) in g.edges(a) {
                let Some(j) = ids.iter().position(|&id| id == b) else {
                    continue;
                };
                if !g.is_enabled(b) {
                    continue;
                }
                if dist[j].is_none_or(|dj| da + w < dj) {
                    dist[j] = Some(da + w);
                }
            }
        }
    }
    dist
}

/// Random grid costs in `0..=3` (0 = wall).
fn arb_grid(w: i32, h: i32) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0..=3u8).prop_map(f64::from), (w * h) as usize)
}

fn arb_corners() -> impl Strategy<Value = Corners> {
    prop_oneof![
        Just(Corners::None),
        Just(Corners::Walk),
        Just(Corners::Cut),
        Just(Corners::Phase),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The returned path is a walk through enabled nodes whose total weight
    /// is the shortest-path distance; unreachable targets give no path.
    #[test]
    fn graph_paths_are_optimal(spec in arb_spec(), o in 0..8usize, t in 0..8usize) {
        let (g, ids) = build(&spec);
        let (o, t) = (o % spec.nodes, t % spec.nodes);
        let dist = oracle(&g, &ids, o);
        let path = g.find(ids[o], ids[t]);

        match dist[t] {
            None => prop_assert!(path.is_empty()),
            Some(d) => {
                prop_assert_eq!(path.first(), Some(&ids[o]));
                prop_assert_eq!(path.last(), Some(&ids[t]));
                prop_assert!(path[1..].iter().all(|&n| g.is_enabled(n)));
                prop_assert_eq!(g.path_cost(&path), Some(d));
            }
        }
        prop_assert_eq!(g.find(ids[o], ids[t]), path);
    }

    /// Splitting any edge keeps every shortest-path distance unchanged.
    #[test]
    fn split_preserves_costs(spec in arb_spec(), e in 0..64usize, o in 0..8usize, t in 0..8usize) {
        prop_assume!(!spec.edges.is_empty());
        let (mut g, ids) = build(&spec);
        let (o, t) = (o % spec.nodes, t % spec.nodes);
        let (a, b, _) = spec.edges[e % spec.edges.len()];
        let w = g.weight(ids[a], ids[b]).unwrap();

        let before = g.path_cost(&g.find(ids[o], ids[t]));
        let m = g.split(ids[a], ids[b]).unwrap();
        prop_assert_eq!(g.weight(ids[a], m).unwrap() + g.weight(m, ids[b]).unwrap(), w);
        prop_assert_eq!(g.path_cost(&g.find(ids[o], ids[t])), before);
    }

    /// Without diagonals the Manhattan heuristic is admissible for costs
    /// >= 1, so A* must match a plain uniform-cost search.
    #[test]
    fn grid_astar_matches_uniform_cost(
        costs in arb_grid(6, 5),
        o in (0..6i32, 0..5i32),
        t in (0..6i32, 0..5i32),
    ) {
        let grid = SquareGrid::new(6, 5, costs).unwrap();
        let (o, t) = (Point::new(o.0, o.1), Point::new(t.0, t.1));
        let astar = grid.find(o, t, Corners::None);
        let pather = GridPather { grid: &grid, corners: Corners::None };
        let reference: Vec<usize> = uniform_cost_path(&pather, o, t)
            .into_iter()
            .filter_map(|p| grid.index(p))
            .collect();

        prop_assert_eq!(astar.is_empty(), reference.is_empty());
        prop_assert_eq!(grid.path_cost(&astar), grid.path_cost(&reference));
    }

    /// Every step of a grid path is a move the corner policy permits.
    #[test]
    fn grid_paths_respect_policy(
        costs in arb_grid(5, 5),
        corners in arb_corners(),
        o in (0..5i32, 0..5i32),
        t in (0..5i32, 0..5i32),
    ) {
        let grid = SquareGrid::new(5, 5, costs).unwrap();
        let (o, t) = (Point::new(o.0, o.1), Point::new(t.0, t.1));
        let path = grid.path_points(&grid.find(o, t, corners));
        let pather = GridPather { grid: &grid, corners };

        if let (Some(first), Some(last)) = (path.first(), path.last()) {
            prop_assert_eq!(*first, o);
            prop_assert_eq!(*last, t);
        }
        let mut buf = Vec::new();
        for w in path.windows(2) {
            buf.clear();
            pather.neighbors(w[0], &mut buf);
            prop_assert!(buf.contains(&w[1]), "illegal step {} -> {}", w[0], w[1]);
        }
    }

    /// Lowering a grid into a graph preserves 4-way shortest-path costs.
    #[test]
    fn bridge_matches_grid(
        costs in prop::collection::vec((1..=3u8).prop_map(f64::from), 20),
        o in 0..20usize,
        t in 0..20usize,
    ) {
        let grid = SquareGrid::new(5, 4, costs).unwrap();
        let mut g = DirectedGraph::new();
        let ids = g.add_grid(&grid);

        let cells = grid.find(grid.point(o).unwrap(), grid.point(t).unwrap(), Corners::None);
        let nodes = g.find(ids[o], ids[t]);
        prop_assert_eq!(grid.path_cost(&cells), g.path_cost(&nodes));
    }
}
