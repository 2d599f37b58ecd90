use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Graph;

pub(crate) fn graph_from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
    let mut graph = Graph::new(n, false);
    for (u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph.gen_degree_list().unwrap();
    graph
}

/// A triangle `2, 3, 4` with two pendant vertices `0, 1` attached to `2`.
pub(crate) fn scenario_graph() -> Graph {
    graph_from_edges(5, [(0, 2), (1, 2), (2, 3), (2, 4), (3, 4)])
}

pub(crate) fn empty_graph(n: usize) -> Graph {
    graph_from_edges(n, [])
}

pub(crate) fn cycle_graph(n: usize) -> Graph {
    graph_from_edges(n, (0..n).map(|i| (i, (i + 1) % n)))
}

pub(crate) fn complete_graph(n: usize) -> Graph {
    graph_from_edges(n, (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))))
}

pub(crate) fn random_graph(n: usize, m: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let edges: Vec<_> = (0..m)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .filter(|(u, v)| u != v)
        .collect();
    graph_from_edges(n, edges)
}

pub(crate) fn is_proper(graph: &Graph) -> bool {
    graph.vertices().iter().all(|u| {
        u.neighbors().iter().all(|&v| u.color().is_some() && u.color() != graph.vertices()[v].color())
    })
}
