use degeneracy_coloring::{Graph, GraphError};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadEdgeListError {
    #[error("invalid line (got {0})")]
    InvalidLine(String),
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("invalid edge")]
    Graph(#[from] GraphError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads one `u v` pair per line. Vertex ids start at 0 and the graph has `max id + 1` vertices.
pub fn read_edge_list<P>(path: P, directed: bool) -> Result<Graph, ReadEdgeListError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;

    let mut n = 0;
    let mut edges = vec![];
    for line in std::io::BufReader::new(file).lines() {
        let line = line?;
        let mut tokens = line.split_ascii_whitespace();
        let Some(a) = tokens.next() else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };
        let Some(b) = tokens.next() else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };
        if tokens.next().is_some() {
            return Err(ReadEdgeListError::InvalidLine(line));
        }

        let u: usize = a.parse()?;
        let v: usize = b.parse()?;
        let Some(bound) = u.max(v).checked_add(1) else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };
        edges.push((u, v));
        n = n.max(bound);
    }

    let mut graph = Graph::new(n, directed);
    for (u, v) in edges {
        graph.add_edge(u, v)?;
    }
    graph.gen_degree_list()?;
    Ok(graph)
}

/// Writes every edge once. Undirected edges are written with the smaller id first.
pub fn write_edge_list<P>(path: P, graph: &Graph) -> Result<(), std::io::Error>
where
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut file = BufWriter::new(file);
    for vertex in graph.vertices() {
        let u = vertex.id();
        for &v in vertex.neighbors() {
            if graph.is_directed() || u < v {
                writeln!(file, "{u} {v}")?;
            }
        }
    }
    file.flush()?;
    Ok(())
}
