mod adjacency;
pub mod csv;
mod edge_list;

use clap::ValueEnum;
pub use adjacency::read_adjacency;
pub use adjacency::read_adjacency_from;
pub use adjacency::write_adjacency;
pub use adjacency::write_adjacency_to;
pub use adjacency::ReadAdjacencyError;
pub use adjacency::WriteAdjacencyError;
pub use edge_list::read_edge_list;
pub use edge_list::write_edge_list;
pub use edge_list::ReadEdgeListError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum GraphFileType {
    Adjacency,
    EdgeList,
}
