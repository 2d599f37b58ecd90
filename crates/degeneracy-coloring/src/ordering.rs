use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, instrument, trace};

use crate::error::GraphError;
use crate::graph::{DegreeListState, Graph};

/// Which end of the degree buckets the degeneracy ordering removes vertices from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Degeneracy {
    /// Remove a vertex of minimum current degree. The first vertex removed is colored last.
    SmallestLast,
    /// Remove a vertex of maximum current degree.
    LargestLast,
}

/// Result of a degeneracy ordering pass.
///
/// `order[i]` is the `i`-th vertex to color and `degree_at_deletion[i]` the number of its
/// neighbors that were still present when it was removed. Vertices removed early come last.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DegeneracyOrdering {
    order: Vec<usize>,
    degree_at_deletion: Vec<usize>,
}

impl DegeneracyOrdering {
    /// The vertices in coloring order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Degree at deletion, parallel to [DegeneracyOrdering::order].
    pub fn degree_at_deletion(&self) -> &[usize] {
        &self.degree_at_deletion
    }

    /// Number of ordered vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for the ordering of a graph without vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Largest degree any vertex had when it was deleted.
    pub fn max_degree_at_deletion(&self) -> Option<usize> {
        self.degree_at_deletion.iter().copied().max()
    }

    /// Upper bound on the colors a greedy coloring in this order uses.
    pub fn color_bound(&self) -> usize {
        self.max_degree_at_deletion().map_or(0, |d| d + 1)
    }

    /// Length of the leading run of the ordering on which the degree at deletion strictly
    /// increases. For a smallest-last ordering these are the last vertices removed, the core of
    /// the graph.
    pub fn terminal_clique_size(&self) -> usize {
        if self.degree_at_deletion.is_empty() {
            return 0;
        }
        1 + self.degree_at_deletion.windows(2).take_while(|w| w[0] < w[1]).count()
    }

    /// `(step, degree at deletion)` pairs in coloring order, steps counted from 1.
    pub fn deletion_steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.degree_at_deletion.iter().enumerate().map(|(i, &d)| (i + 1, d))
    }
}

/// Computes a degeneracy ordering by repeatedly deleting the front vertex of the lowest
/// ([Degeneracy::SmallestLast]) or highest ([Degeneracy::LargestLast]) nonempty degree bucket.
///
/// Consumes the degree buckets of `graph`. Call [Graph::rebuild_degree_list] before running
/// another pass.
///
/// # Errors
///
/// Fails if the degree list was not generated or was consumed by an earlier pass.
#[instrument(skip_all, fields(variant = ?variant))]
pub fn degeneracy_ordering(graph: &mut Graph, variant: Degeneracy) -> Result<DegeneracyOrdering, GraphError> {
    match graph.state() {
        DegreeListState::Building => return Err(GraphError::DegreeListMissing),
        DegreeListState::Consumed => return Err(GraphError::DegreeListConsumed),
        DegreeListState::Ready => {}
    }

    let n = graph.vertex_count();
    let mut order = vec![0; n];
    let mut degree_at_deletion = vec![0; n];

    let mut degree = match variant {
        Degeneracy::SmallestLast => 0,
        Degeneracy::LargestLast => n.saturating_sub(1),
    };
    for slot in (0..n).rev() {
        let v = loop {
            if let Some(&v) = graph.degree_bucket(degree).and_then(|bucket| bucket.front()) {
                break v;
            }
            match variant {
                Degeneracy::SmallestLast => degree += 1,
                Degeneracy::LargestLast => {
                    debug_assert!(degree > 0, "no live vertex left in any bucket");
                    degree -= 1
                }
            }
        };
        graph.delete_vertex(v)?;
        order[slot] = v;
        degree_at_deletion[slot] = degree;
        trace!(v, degree);

        // Deleting a vertex of degree d lowers its neighbors by one, so no bucket below d - 1
        // and none above d can have become nonempty.
        if variant == Degeneracy::SmallestLast {
            degree = degree.saturating_sub(1);
        }
    }

    let ordering = DegeneracyOrdering { order, degree_at_deletion };
    info!(n, color_bound = ordering.color_bound(), terminal_clique = ordering.terminal_clique_size());
    Ok(ordering)
}

/// The identity ordering `0..n`.
pub fn natural_ordering(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// A uniformly random permutation of `0..n`, shuffled with a single Fisher-Yates pass over `rng`.
pub fn random_ordering<R>(n: usize, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let mut order = natural_ordering(n);
    order.shuffle(rng);
    order
}

/// Orders the vertices by their original degree using the untouched degree buckets.
///
/// The buckets are read from degree `0` upwards. [Degeneracy::LargestLast] keeps that sequence,
/// [Degeneracy::SmallestLast] reverses it. Inside a bucket the bucket order is kept.
///
/// # Errors
///
/// Fails unless the degree list is generated and not yet consumed.
pub fn original_degree_ordering(graph: &Graph, variant: Degeneracy) -> Result<Vec<usize>, GraphError> {
    match graph.state() {
        DegreeListState::Building => return Err(GraphError::DegreeListMissing),
        DegreeListState::Consumed => return Err(GraphError::DegreeListConsumed),
        DegreeListState::Ready => {}
    }
    let mut order: Vec<usize> = (0..graph.vertex_count())
        .filter_map(|degree| graph.degree_bucket(degree))
        .flat_map(|bucket| bucket.iter().copied())
        .collect();
    if variant == Degeneracy::SmallestLast {
        order.reverse();
    }
    Ok(order)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::{complete_graph, empty_graph, random_graph, scenario_graph};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n];
        order.len() == n && order.iter().all(|&v| v < n && !std::mem::replace(&mut seen[v], true))
    }

    #[test]
    fn smallest_last_scenario() {
        let mut graph = scenario_graph();
        let ordering = degeneracy_ordering(&mut graph, Degeneracy::SmallestLast).unwrap();
        assert_eq!(ordering.order(), [3, 4, 2, 0, 1]);
        assert_eq!(ordering.degree_at_deletion(), [0, 1, 2, 1, 1]);
        assert_eq!(ordering.color_bound(), 3);
        assert_eq!(ordering.terminal_clique_size(), 3);
        assert!(graph.vertices().iter().all(|v| v.is_deleted()));
        assert_eq!(graph.state(), DegreeListState::Consumed);
    }

    #[test]
    fn largest_last_scenario() {
        let mut graph = scenario_graph();
        let ordering = degeneracy_ordering(&mut graph, Degeneracy::LargestLast).unwrap();
        assert_eq!(ordering.order(), [0, 1, 3, 4, 2]);
        assert_eq!(ordering.degree_at_deletion(), [0, 0, 0, 1, 4]);
        assert_eq!(ordering.max_degree_at_deletion(), Some(4));
    }

    #[test]
    fn empty() {
        let mut graph = empty_graph(0);
        let ordering = degeneracy_ordering(&mut graph, Degeneracy::SmallestLast).unwrap();
        assert!(ordering.is_empty());
        assert_eq!(ordering.color_bound(), 0);
        assert_eq!(ordering.terminal_clique_size(), 0);

        let mut graph = empty_graph(3);
        let ordering = degeneracy_ordering(&mut graph, Degeneracy::LargestLast).unwrap();
        assert_eq!(ordering.len(), 3);
        assert_eq!(ordering.color_bound(), 1);
    }

    #[test]
    fn complete() {
        let mut graph = complete_graph(6);
        let ordering = degeneracy_ordering(&mut graph, Degeneracy::SmallestLast).unwrap();
        assert_eq!(ordering.degree_at_deletion(), [0, 1, 2, 3, 4, 5]);
        assert_eq!(ordering.terminal_clique_size(), 6);
        assert_eq!(ordering.deletion_steps().last(), Some((6, 5)));
    }

    #[test]
    fn state_errors() {
        let mut graph = Graph::new(2, false);
        assert_eq!(degeneracy_ordering(&mut graph, Degeneracy::SmallestLast), Err(GraphError::DegreeListMissing));
        assert_eq!(original_degree_ordering(&graph, Degeneracy::SmallestLast), Err(GraphError::DegreeListMissing));

        graph.gen_degree_list().unwrap();
        degeneracy_ordering(&mut graph, Degeneracy::SmallestLast).unwrap();
        assert_eq!(degeneracy_ordering(&mut graph, Degeneracy::LargestLast), Err(GraphError::DegreeListConsumed));
        assert_eq!(original_degree_ordering(&graph, Degeneracy::LargestLast), Err(GraphError::DegreeListConsumed));

        graph.rebuild_degree_list().unwrap();
        assert!(degeneracy_ordering(&mut graph, Degeneracy::LargestLast).is_ok());
    }

    #[test]
    fn degree_at_deletion_counts_remaining_neighbors() {
        for seed in 0..8 {
            let mut graph = random_graph(60, 240, seed);
            for variant in [Degeneracy::SmallestLast, Degeneracy::LargestLast] {
                graph.rebuild_degree_list().unwrap();
                let ordering = degeneracy_ordering(&mut graph, variant).unwrap();
                assert!(is_permutation(ordering.order(), 60));

                let mut position = vec![0; 60];
                for (i, &v) in ordering.order().iter().enumerate() {
                    position[v] = i;
                }
                for (i, &v) in ordering.order().iter().enumerate() {
                    let remaining = graph.vertices()[v].neighbors().iter().filter(|&&u| position[u] < i).count();
                    assert_eq!(ordering.degree_at_deletion()[i], remaining);
                }
            }
        }
    }

    #[test]
    fn smallest_last_removes_a_minimum_degree_vertex() {
        let mut graph = random_graph(40, 120, 7);
        let ordering = degeneracy_ordering(&mut graph, Degeneracy::SmallestLast).unwrap();
        let mut position = vec![0; 40];
        for (i, &v) in ordering.order().iter().enumerate() {
            position[v] = i;
        }
        for i in 0..40 {
            let remaining_degree = |v: usize| graph.vertices()[v].neighbors().iter().filter(|&&u| position[u] <= i).count();
            let min = ordering.order()[..=i].iter().map(|&v| remaining_degree(v)).min().unwrap();
            assert_eq!(ordering.degree_at_deletion()[i], min);
        }
    }

    #[test]
    fn natural_and_random() {
        assert_eq!(natural_ordering(4), [0, 1, 2, 3]);
        assert!(natural_ordering(0).is_empty());

        let mut rng = StdRng::seed_from_u64(42);
        let order = random_ordering(100, &mut rng);
        assert!(is_permutation(&order, 100));

        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_ordering(100, &mut rng), order);
    }

    #[test]
    fn original_degree_orderings() {
        let graph = scenario_graph();
        let lodl = original_degree_ordering(&graph, Degeneracy::LargestLast).unwrap();
        assert_eq!(lodl, [1, 0, 4, 3, 2]);
        let sodl = original_degree_ordering(&graph, Degeneracy::SmallestLast).unwrap();
        assert_eq!(sodl, [2, 3, 4, 0, 1]);
        assert_eq!(graph.state(), DegreeListState::Ready);
    }
}
