use std::fmt::{Display, Formatter};

use rand::Rng;
use tracing::{info, instrument};

use crate::coloring::color_in_order;
use crate::error::GraphError;
use crate::graph::{DegreeListState, Graph};
use crate::ordering::{degeneracy_ordering, natural_ordering, original_degree_ordering, random_ordering, Degeneracy};
use crate::report::ColoringReport;

/// Vertex orderings to color a graph in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Smallest-last vertex ordering (dynamic, minimum current degree removed first).
    Slvo,
    /// Smallest original degree last.
    Sodl,
    /// Uniformly random order.
    Random,
    /// Largest-last vertex ordering (dynamic, maximum current degree removed first).
    Llvo,
    /// Largest original degree last.
    Lodl,
    /// Vertex ids in increasing order.
    InOrder,
}

impl Algorithm {
    /// Every algorithm, in the order they are usually reported.
    pub const ALL: [Algorithm; 6] =
        [Algorithm::Slvo, Algorithm::Sodl, Algorithm::Random, Algorithm::Llvo, Algorithm::Lodl, Algorithm::InOrder];

    /// Short upper case name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Slvo => "SLVO",
            Algorithm::Sodl => "SODL",
            Algorithm::Random => "RANDOM",
            Algorithm::Llvo => "LLVO",
            Algorithm::Lodl => "LODL",
            Algorithm::InOrder => "IN_ORDER",
        }
    }

    /// Returns `true` for the orderings that need untouched degree buckets.
    pub fn reads_degree_buckets(&self) -> bool {
        matches!(self, Algorithm::Slvo | Algorithm::Sodl | Algorithm::Llvo | Algorithm::Lodl)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Orders the vertices with `algorithm`, colors them greedily and summarizes the run.
///
/// `rng` is only drawn from by [Algorithm::Random].
///
/// # Errors
///
/// Fails if the degree list was not generated. The bucket based algorithms additionally fail if
/// an earlier pass consumed the buckets, see [Graph::rebuild_degree_list].
#[instrument(skip_all, fields(algorithm = %algorithm))]
pub fn color_graph<R>(graph: &mut Graph, algorithm: Algorithm, rng: &mut R) -> Result<ColoringReport, GraphError>
where
    R: Rng + ?Sized,
{
    if graph.state() == DegreeListState::Building {
        return Err(GraphError::DegreeListMissing);
    }

    let n = graph.vertex_count();
    let (order, ordering) = match algorithm {
        Algorithm::InOrder => (natural_ordering(n), None),
        Algorithm::Random => (random_ordering(n, rng), None),
        Algorithm::Sodl => (original_degree_ordering(graph, Degeneracy::SmallestLast)?, None),
        Algorithm::Lodl => (original_degree_ordering(graph, Degeneracy::LargestLast)?, None),
        Algorithm::Slvo => {
            let ordering = degeneracy_ordering(graph, Degeneracy::SmallestLast)?;
            (ordering.order().to_vec(), Some(ordering))
        }
        Algorithm::Llvo => {
            let ordering = degeneracy_ordering(graph, Degeneracy::LargestLast)?;
            (ordering.order().to_vec(), Some(ordering))
        }
    };

    let coloring = color_in_order(graph, &order)?;
    info!(num_colors = coloring.num_colors());
    Ok(ColoringReport::new(algorithm, graph, coloring, ordering))
}

/// Runs [color_graph] for each algorithm in turn, restoring consumed degree buckets in between.
pub fn color_all<R>(graph: &mut Graph, algorithms: &[Algorithm], rng: &mut R) -> Result<Vec<ColoringReport>, GraphError>
where
    R: Rng + ?Sized,
{
    algorithms
        .iter()
        .map(|&algorithm| {
            if algorithm.reads_degree_buckets() && graph.state() == DegreeListState::Consumed {
                graph.rebuild_degree_list()?;
            }
            color_graph(graph, algorithm, rng)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::{cycle_graph, is_proper, random_graph, scenario_graph};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn scenario_report() {
        let mut graph = scenario_graph();
        let mut rng = StdRng::seed_from_u64(0);
        let report = color_graph(&mut graph, Algorithm::Slvo, &mut rng).unwrap();
        assert_eq!(report.num_colors(), 3);
        assert_eq!(report.terminal_clique_size(), Some(3));
        assert_eq!(report.average_original_degree(), 2.0);
        assert_eq!(report.rows()[2].vertex, 2);
        assert_eq!(report.rows()[2].degree_at_deletion, Some(2));
        assert_eq!(report.rows()[2].original_degree, 4);

        let text = report.to_string();
        assert!(text.starts_with("Vertex 3:\nColor: 1, Original degree: 2, Degree when deleted: 0\n"));
        assert!(text.contains("Colors used: 3\n"));
        assert!(text.contains("Size of terminal clique: 3\n"));
    }

    #[test]
    fn static_orderings_have_no_deletion_degrees() {
        let mut graph = scenario_graph();
        let mut rng = StdRng::seed_from_u64(0);
        let report = color_graph(&mut graph, Algorithm::Lodl, &mut rng).unwrap();
        assert_eq!(report.coloring().order(), [1, 0, 4, 3, 2]);
        assert!(report.ordering().is_none());
        assert_eq!(report.terminal_clique_size(), None);
        assert!(report.rows().iter().all(|row| row.degree_at_deletion.is_none()));
        assert!(!report.to_string().contains("Degree when deleted"));
    }

    #[test]
    fn consumed_buckets() {
        let mut graph = scenario_graph();
        let mut rng = StdRng::seed_from_u64(0);
        color_graph(&mut graph, Algorithm::Llvo, &mut rng).unwrap();
        assert_eq!(color_graph(&mut graph, Algorithm::Slvo, &mut rng).unwrap_err(), GraphError::DegreeListConsumed);
        assert_eq!(color_graph(&mut graph, Algorithm::Sodl, &mut rng).unwrap_err(), GraphError::DegreeListConsumed);
        assert!(color_graph(&mut graph, Algorithm::InOrder, &mut rng).is_ok());
        assert!(color_graph(&mut graph, Algorithm::Random, &mut rng).is_ok());

        let mut graph = Graph::new(3, false);
        assert_eq!(color_graph(&mut graph, Algorithm::InOrder, &mut rng).unwrap_err(), GraphError::DegreeListMissing);
    }

    #[test]
    fn all_algorithms() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = cycle_graph(6);
        let reports = color_all(&mut graph, &Algorithm::ALL, &mut rng).unwrap();
        assert_eq!(reports.len(), 6);
        for (report, algorithm) in reports.iter().zip(Algorithm::ALL) {
            assert_eq!(report.algorithm(), algorithm);
            if algorithm == Algorithm::Random {
                assert!((2..=3).contains(&report.num_colors()));
            } else {
                assert_eq!(report.num_colors(), 2, "{algorithm}");
            }
        }

        let mut graph = random_graph(100, 500, 1);
        for report in color_all(&mut graph, &Algorithm::ALL, &mut rng).unwrap() {
            assert!(report.coloring().is_proper(&graph));
            if let Some(ordering) = report.ordering() {
                assert!(report.num_colors() <= ordering.color_bound());
            }
        }
        assert!(is_proper(&graph));
    }
}
