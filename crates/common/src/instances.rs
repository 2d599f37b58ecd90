use degeneracy_coloring::{Graph, GraphError};
use rand::Rng;
use thiserror::Error;
use tracing::{info, instrument};

use crate::sample::{Distribution, SampleError, VertexSampler};

#[derive(Error, Debug)]
pub enum InstanceError {
    #[error("too many edges (a simple graph on {n} vertices has at most {max} edges, got {m})")]
    TooManyEdges { n: usize, m: usize, max: usize },
    #[error("sampler error")]
    Sample(#[from] SampleError),
    #[error("graph error")]
    Graph(#[from] GraphError),
}

fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(n, false);
    for (u, v) in edges {
        graph.add_edge(u, v)?;
    }
    graph.gen_degree_list()?;
    Ok(graph)
}

fn simple_graph(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
    from_edges(n, edges).expect("edges join distinct vertices below n")
}

/// `n` isolated vertices.
pub fn empty_graph(n: usize) -> Graph {
    simple_graph(n, [])
}

/// The path `0 - 1 - ... - n-1`.
pub fn path_graph(n: usize) -> Graph {
    simple_graph(n, (1..n).map(|u| (u - 1, u)))
}

/// The cycle `0 - 1 - ... - n-1 - 0`. For `n <= 2` the wrap around edge is left out.
pub fn cycle_graph(n: usize) -> Graph {
    let wrap = (n > 2).then(|| (n - 1, 0));
    simple_graph(n, (1..n).map(|u| (u - 1, u)).chain(wrap))
}

/// Every pair of distinct vertices is joined by an edge.
pub fn complete_graph(n: usize) -> Graph {
    simple_graph(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))))
}

/// An undirected graph with `n` vertices and exactly `m` distinct edges. Endpoints are drawn from
/// `distribution`; self loops and repeated pairs are redrawn.
#[instrument(skip_all, fields(n = n, m = m, distribution = ?distribution))]
pub fn random_graph<R>(rng: &mut R, n: usize, m: usize, distribution: Distribution) -> Result<Graph, InstanceError>
where
    R: Rng + ?Sized,
{
    let max = n * n.saturating_sub(1) / 2;
    if m > max {
        return Err(InstanceError::TooManyEdges { n, m, max });
    }

    let mut edges = Vec::with_capacity(m);
    if m > 0 {
        let sampler = VertexSampler::new(distribution, n)?;
        let mut seen = vec![false; n * n];
        let mut attempts = 0usize;
        while edges.len() < m {
            attempts += 1;
            let u = rng.sample(&sampler);
            let v = rng.sample(&sampler);
            let (u, v) = (u.min(v), u.max(v));
            if u == v || std::mem::replace(&mut seen[u * n + v], true) {
                continue;
            }
            edges.push((u, v));
        }
        info!(attempts);
    }
    Ok(from_edges(n, edges)?)
}
