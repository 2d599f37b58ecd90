use thiserror::Error;

/// Errors raised by [Graph](crate::Graph) operations.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GraphError {
    /// A vertex id outside of `0..vertex_count`.
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        /// The offending id.
        vertex: usize,
        /// Number of vertices of the graph.
        vertex_count: usize,
    },
    /// An edge from a vertex to itself.
    #[error("found self loop at vertex {0}")]
    SelfLoop(usize),
    /// Edges can only be added before the degree list is generated.
    #[error("cannot add edges after the degree list has been generated")]
    EdgesFrozen,
    /// [Graph::gen_degree_list](crate::Graph::gen_degree_list) was called twice.
    #[error("degree list has already been generated")]
    DegreeListAlreadyGenerated,
    /// A degree dependent operation ran before the degree list was generated.
    #[error("degree list has not been generated yet")]
    DegreeListMissing,
    /// The buckets were emptied by an earlier ordering pass. See
    /// [Graph::rebuild_degree_list](crate::Graph::rebuild_degree_list).
    #[error("degree list has been consumed by a previous ordering pass")]
    DegreeListConsumed,
    /// The vertex was already removed from the degree buckets.
    #[error("vertex {0} has already been deleted")]
    VertexDeleted(usize),
    /// An ordering that is not a permutation of all vertices.
    #[error("invalid vertex order ({0})")]
    InvalidOrder(String),
}
