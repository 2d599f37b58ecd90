use petgraph::visit::{EdgeRef, GraphProp, IntoEdgeReferences, NodeCompactIndexable};
use tracing::{debug, info, instrument};

use crate::error::GraphError;
use crate::list::{BucketHandle, BucketList};

/// Lifecycle of the degree buckets of a [Graph].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DegreeListState {
    /// Edges may still be added. The buckets are empty.
    Building,
    /// Every vertex sits in the bucket of its degree.
    Ready,
    /// At least one vertex was deleted by an ordering pass.
    Consumed,
}

/// A vertex of a [Graph] together with its coloring and ordering state.
#[derive(Clone, Debug)]
pub struct Vertex {
    id: usize,
    color: Option<usize>,
    original_degree: usize,
    current_degree: usize,
    deleted: bool,
    neighbors: Vec<usize>,
    // Vertices that list this vertex as a neighbor. Only filled for directed graphs, for
    // undirected graphs it coincides with `neighbors`.
    predecessors: Vec<usize>,
    degree_handle: Option<BucketHandle>,
}

impl Vertex {
    fn new(id: usize) -> Self {
        Self {
            id,
            color: None,
            original_degree: 0,
            current_degree: 0,
            deleted: false,
            neighbors: vec![],
            predecessors: vec![],
            degree_handle: None,
        }
    }

    /// The id of the vertex.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The color assigned by the last coloring run. Colors start at 1.
    pub fn color(&self) -> Option<usize> {
        self.color
    }

    /// Degree at the time the degree list was generated.
    pub fn original_degree(&self) -> usize {
        self.original_degree
    }

    /// Number of neighbors that have not been deleted yet.
    pub fn current_degree(&self) -> usize {
        self.current_degree
    }

    /// Returns `true` if the vertex was removed by an ordering pass.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Neighbors in insertion order.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
}

/// Graph with a dense adjacency matrix and degree buckets.
///
/// The graph is built by [Graph::add_edge]. Afterwards [Graph::gen_degree_list] sorts the vertices
/// into buckets by degree, which the orderings in [crate::ordering] consume by deleting vertices
/// one at a time.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    adjacency: Vec<bool>,
    directed: bool,
    edge_count: usize,
    degree_buckets: Vec<BucketList<usize>>,
    state: DegreeListState,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            vertices: (0..vertex_count).map(Vertex::new).collect(),
            adjacency: vec![false; vertex_count * vertex_count],
            directed,
            edge_count: 0,
            degree_buckets: (0..vertex_count).map(|_| BucketList::new()).collect(),
            state: DegreeListState::Building,
        }
    }

    /// Creates a graph from any compactly indexed `petgraph` graph and generates its degree list.
    ///
    /// Parallel edges are merged.
    ///
    /// # Errors
    ///
    /// Returns [GraphError::SelfLoop] if the input contains a loop.
    pub fn from_petgraph<G>(graph: G) -> Result<Self, GraphError>
    where
        G: NodeCompactIndexable + IntoEdgeReferences + GraphProp,
    {
        let mut result = Self::new(graph.node_bound(), graph.is_directed());
        for edge in graph.edge_references() {
            result.add_edge(graph.to_index(edge.source()), graph.to_index(edge.target()))?;
        }
        result.gen_degree_list()?;
        Ok(result)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` for directed graphs.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Current state of the degree buckets.
    pub fn state(&self) -> DegreeListState {
        self.state
    }

    /// All vertices, indexed by id.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The vertex with id `v`.
    pub fn vertex(&self, v: usize) -> Result<&Vertex, GraphError> {
        self.check_vertex(v)?;
        Ok(&self.vertices[v])
    }

    /// The bucket of live vertices whose current degree is `degree`.
    pub fn degree_bucket(&self, degree: usize) -> Option<&BucketList<usize>> {
        self.degree_buckets.get(degree)
    }

    /// Mean of the original degrees, `0.0` for a graph without vertices.
    pub fn average_original_degree(&self) -> f64 {
        if self.vertices.is_empty() {
            return 0.0;
        }
        let sum: usize = self.vertices.iter().map(|v| v.original_degree).sum();
        sum as f64 / self.vertices.len() as f64
    }

    fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { vertex: v, vertex_count: self.vertices.len() })
        }
    }

    #[inline(always)]
    pub(crate) fn has_edge_unchecked(&self, v1: usize, v2: usize) -> bool {
        let n = self.vertices.len();
        self.adjacency[n * v1 + v2] || (!self.directed && self.adjacency[n * v2 + v1])
    }

    /// Returns `true` if there is an edge from `v1` to `v2`. For undirected graphs the direction
    /// does not matter.
    pub fn has_edge(&self, v1: usize, v2: usize) -> Result<bool, GraphError> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        Ok(self.has_edge_unchecked(v1, v2))
    }

    /// Adds an edge from `v1` to `v2`. Adding an existing edge does nothing.
    ///
    /// # Errors
    ///
    /// Fails if an id is out of range, if `v1 == v2`, or if the degree list was already generated.
    pub fn add_edge(&mut self, v1: usize, v2: usize) -> Result<(), GraphError> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        if v1 == v2 {
            return Err(GraphError::SelfLoop(v1));
        }
        if self.state != DegreeListState::Building {
            return Err(GraphError::EdgesFrozen);
        }
        if self.has_edge_unchecked(v1, v2) {
            return Ok(());
        }

        let n = self.vertices.len();
        self.vertices[v1].neighbors.push(v2);
        self.adjacency[n * v1 + v2] = true;
        if self.directed {
            self.vertices[v2].predecessors.push(v1);
        } else {
            self.vertices[v2].neighbors.push(v1);
            self.adjacency[n * v2 + v1] = true;
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Sorts every vertex into the bucket of its degree. Must be called exactly once, after the
    /// last edge was added.
    ///
    /// Vertices are pushed to the front of their bucket in id order, so each bucket lists its
    /// vertices by descending id.
    #[instrument(skip_all)]
    pub fn gen_degree_list(&mut self) -> Result<(), GraphError> {
        if self.state != DegreeListState::Building {
            return Err(GraphError::DegreeListAlreadyGenerated);
        }
        self.fill_degree_buckets();
        info!(n = self.vertex_count(), m = self.edge_count, directed = self.directed);
        Ok(())
    }

    /// Restores the degree buckets after an ordering pass, as if [Graph::gen_degree_list] had just
    /// been called. Colors are kept.
    #[instrument(skip_all)]
    pub fn rebuild_degree_list(&mut self) -> Result<(), GraphError> {
        if self.state == DegreeListState::Building {
            return Err(GraphError::DegreeListMissing);
        }
        for bucket in &mut self.degree_buckets {
            bucket.clear();
        }
        self.fill_degree_buckets();
        Ok(())
    }

    fn fill_degree_buckets(&mut self) {
        let Self { vertices, degree_buckets, .. } = self;
        for vertex in vertices.iter_mut() {
            let degree = vertex.neighbors.len();
            vertex.original_degree = degree;
            vertex.current_degree = degree;
            vertex.deleted = false;
            vertex.degree_handle = Some(degree_buckets[degree].push_front(vertex.id));
        }
        self.state = DegreeListState::Ready;
    }

    /// Removes `v` from the degree buckets and moves every live vertex that has `v` as a neighbor
    /// one bucket down. Moved vertices are pushed to the front of their new bucket.
    pub fn delete_vertex(&mut self, v: usize) -> Result<(), GraphError> {
        self.check_vertex(v)?;
        if self.state == DegreeListState::Building {
            return Err(GraphError::DegreeListMissing);
        }
        if self.vertices[v].deleted {
            return Err(GraphError::VertexDeleted(v));
        }
        self.state = DegreeListState::Consumed;

        let vertex = &mut self.vertices[v];
        vertex.deleted = true;
        if let Some(handle) = vertex.degree_handle.take() {
            self.degree_buckets[vertex.current_degree].remove(handle);
        }

        let num_dependents =
            if self.directed { self.vertices[v].predecessors.len() } else { self.vertices[v].neighbors.len() };
        for i in 0..num_dependents {
            let u = if self.directed { self.vertices[v].predecessors[i] } else { self.vertices[v].neighbors[i] };
            let dependent = &mut self.vertices[u];
            if dependent.deleted {
                continue;
            }
            if let Some(handle) = dependent.degree_handle {
                self.degree_buckets[dependent.current_degree].remove(handle);
            }
            debug_assert!(dependent.current_degree > 0);
            dependent.current_degree -= 1;
            dependent.degree_handle = Some(self.degree_buckets[dependent.current_degree].push_front(u));
        }
        debug!(v, degree = self.vertices[v].current_degree, "deleted vertex");
        Ok(())
    }

    pub(crate) fn set_colors(&mut self, colors: &[usize]) {
        debug_assert_eq!(colors.len(), self.vertices.len());
        for (vertex, &color) in self.vertices.iter_mut().zip(colors) {
            vertex.color = Some(color);
        }
    }
}
