use std::fmt::{Display, Formatter};

use crate::algorithm::Algorithm;
use crate::coloring::Coloring;
use crate::graph::Graph;
use crate::ordering::DegeneracyOrdering;

/// One line of a [ColoringReport].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VertexSummary {
    /// Vertex id.
    pub vertex: usize,
    /// Assigned color, starting at 1.
    pub color: usize,
    /// Degree before any vertex was deleted.
    pub original_degree: usize,
    /// Degree when the vertex was removed, only known for degeneracy orderings.
    pub degree_at_deletion: Option<usize>,
}

/// Outcome of a coloring run of one [Algorithm].
#[derive(Clone, Debug)]
pub struct ColoringReport {
    algorithm: Algorithm,
    rows: Vec<VertexSummary>,
    coloring: Coloring,
    ordering: Option<DegeneracyOrdering>,
    average_original_degree: f64,
}

impl ColoringReport {
    pub(crate) fn new(
        algorithm: Algorithm,
        graph: &Graph,
        coloring: Coloring,
        ordering: Option<DegeneracyOrdering>,
    ) -> Self {
        let rows = coloring
            .order()
            .iter()
            .enumerate()
            .map(|(i, &v)| VertexSummary {
                vertex: v,
                color: coloring.colors()[v],
                original_degree: graph.vertices()[v].original_degree(),
                degree_at_deletion: ordering.as_ref().map(|o| o.degree_at_deletion()[i]),
            })
            .collect();
        let average_original_degree = graph.average_original_degree();
        Self { algorithm, rows, coloring, ordering, average_original_degree }
    }

    /// The algorithm that produced the ordering.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Per-vertex summary in coloring order.
    pub fn rows(&self) -> &[VertexSummary] {
        &self.rows
    }

    /// The coloring itself.
    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// The degeneracy ordering, for [Algorithm::Slvo] and [Algorithm::Llvo].
    pub fn ordering(&self) -> Option<&DegeneracyOrdering> {
        self.ordering.as_ref()
    }

    /// Number of colors used.
    pub fn num_colors(&self) -> usize {
        self.coloring.num_colors()
    }

    /// Mean original degree of the graph.
    pub fn average_original_degree(&self) -> f64 {
        self.average_original_degree
    }

    /// Size of the terminal clique, reported for smallest-last orderings only.
    pub fn terminal_clique_size(&self) -> Option<usize> {
        match self.algorithm {
            Algorithm::Slvo => self.ordering.as_ref().map(DegeneracyOrdering::terminal_clique_size),
            _ => None,
        }
    }
}

impl Display for ColoringReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "Vertex {}:", row.vertex)?;
            write!(f, "Color: {}, Original degree: {}", row.color, row.original_degree)?;
            if let Some(degree) = row.degree_at_deletion {
                write!(f, ", Degree when deleted: {degree}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "SUMMARY ({}):", self.algorithm)?;
        writeln!(f, "Colors used: {}", self.num_colors())?;
        writeln!(f, "Average original degree: {:.3}", self.average_original_degree)?;
        if let Some(ordering) = &self.ordering {
            if let Some(max) = ordering.max_degree_at_deletion() {
                writeln!(f, "Maximum degree when deleted: {max}")?;
            }
            writeln!(f, "Color bound: {}", ordering.color_bound())?;
        }
        if let Some(size) = self.terminal_clique_size() {
            writeln!(f, "Size of terminal clique: {size}")?;
        }
        Ok(())
    }
}
