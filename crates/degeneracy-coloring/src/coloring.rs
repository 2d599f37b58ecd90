use tracing::{info, instrument};

use crate::error::GraphError;
use crate::graph::Graph;

/// A greedy coloring of all vertices of a graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coloring {
    order: Vec<usize>,
    colors: Vec<usize>,
    num_colors: usize,
}

impl Coloring {
    /// The order in which the vertices were colored.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Colors indexed by vertex id. Colors start at 1.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Number of distinct colors used.
    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    /// Returns `true` if no edge of `graph` joins two vertices of the same color.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        graph.vertices().iter().all(|u| u.neighbors().iter().all(|&v| self.colors[u.id()] != self.colors[v]))
    }
}

fn check_order(order: &[usize], n: usize) -> Result<(), GraphError> {
    if order.len() != n {
        return Err(GraphError::InvalidOrder(format!("expected {n} vertices, got {}", order.len())));
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n {
            return Err(GraphError::VertexOutOfRange { vertex: v, vertex_count: n });
        }
        if std::mem::replace(&mut seen[v], true) {
            return Err(GraphError::InvalidOrder(format!("vertex {v} appears twice")));
        }
    }
    Ok(())
}

/// Colors the vertices greedily in the given order. Each vertex gets the smallest positive color
/// that no earlier vertex it has an edge to uses.
///
/// The colors are stored in the vertices of `graph` and returned. The degree buckets are not
/// touched.
///
/// # Errors
///
/// Fails without changing any color if `order` is not a permutation of the vertices.
#[instrument(skip_all)]
pub fn color_in_order(graph: &mut Graph, order: &[usize]) -> Result<Coloring, GraphError> {
    let n = graph.vertex_count();
    check_order(order, n)?;

    let mut colors = vec![0; n];
    // forbidden[c] == i + 1 iff color c is taken by an earlier neighbor of order[i].
    let mut forbidden = vec![0; n + 1];
    let mut num_colors = 0;
    for (i, &v1) in order.iter().enumerate() {
        for &v2 in &order[..i] {
            if graph.has_edge_unchecked(v1, v2) {
                forbidden[colors[v2]] = i + 1;
            }
        }
        let mut color = 1;
        while forbidden[color] == i + 1 {
            color += 1;
        }
        colors[v1] = color;
        num_colors = num_colors.max(color);
    }

    graph.set_colors(&colors);
    info!(n, num_colors);
    Ok(Coloring { order: order.to_vec(), colors, num_colors })
}
