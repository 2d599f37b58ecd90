use degeneracy_coloring::{Graph, GraphError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReadAdjacencyError {
    #[error("missing header")]
    MissingHeader,
    #[error("invalid header (expected '(n)', got {0})")]
    WrongHeader(String),
    #[error("wrong first offset (expected {expected}, got {actual})")]
    WrongFirstOffset { expected: usize, actual: usize },
    #[error("offset of vertex {vertex} is smaller than the one before")]
    DecreasingOffset { vertex: usize },
    #[error("unexpected line {line} after the header of an empty graph")]
    UnexpectedLine { line: usize },
    #[error("file too short (expected at least {expected} lines, got {actual})")]
    Truncated { expected: usize, actual: usize },
    #[error("parse error")]
    ParseInt(#[from] ParseIntError),
    #[error("invalid edge")]
    Graph(#[from] GraphError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads a graph in the adjacency offset format.
///
/// Line 1 holds the number of vertices `n`. Lines `2..=n+1` hold, for each vertex, the line number
/// at which its neighbor list starts. The neighbor ids follow, one per line. The list of a vertex
/// ends where the next one starts, the last one runs to the end of the file. Line numbers start
/// at 1, vertex ids at 0.
///
/// Every listed neighbor is added with [Graph::add_edge], so undirected graphs may list each edge
/// from one or both sides. The degree list is generated before the graph is returned.
pub fn read_adjacency<P>(path: P, directed: bool) -> Result<Graph, ReadAdjacencyError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read_adjacency_from(BufReader::new(file), directed)
}

pub fn read_adjacency_from<R>(reader: R, directed: bool) -> Result<Graph, ReadAdjacencyError>
where
    R: BufRead,
{
    let mut lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let header = lines.first().ok_or(ReadAdjacencyError::MissingHeader)?;
    let n: usize = header.trim().parse().map_err(|_| ReadAdjacencyError::WrongHeader(header.clone()))?;
    if lines.len() <= n {
        return Err(ReadAdjacencyError::Truncated { expected: n.saturating_add(1), actual: lines.len() });
    }
    if n == 0 && lines.len() > 1 {
        return Err(ReadAdjacencyError::UnexpectedLine { line: 2 });
    }

    let offsets = lines[1..=n].iter().map(|line| line.trim().parse()).collect::<Result<Vec<usize>, _>>()?;
    if let Some(&first) = offsets.first() {
        if first != n + 2 {
            return Err(ReadAdjacencyError::WrongFirstOffset { expected: n + 2, actual: first });
        }
    }
    if let Some(i) = offsets.windows(2).position(|w| w[1] < w[0]) {
        return Err(ReadAdjacencyError::DecreasingOffset { vertex: i + 1 });
    }
    let end_of_file = lines.len() + 1;
    if let Some(&last) = offsets.last() {
        if last > end_of_file {
            return Err(ReadAdjacencyError::Truncated { expected: last - 1, actual: lines.len() });
        }
    }

    let mut graph = Graph::new(n, directed);
    for (u, &start) in offsets.iter().enumerate() {
        let end = offsets.get(u + 1).copied().unwrap_or(end_of_file);
        for line in &lines[start - 1..end - 1] {
            let v: usize = line.trim().parse()?;
            graph.add_edge(u, v)?;
        }
    }
    graph.gen_degree_list()?;
    info!(n, m = graph.edge_count(), "read adjacency file");
    Ok(graph)
}

#[derive(Error, Debug)]
pub enum WriteAdjacencyError {
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Writes `graph` in the format read by [read_adjacency]. Neighbors are listed in insertion order.
pub fn write_adjacency<P>(path: P, graph: &Graph) -> Result<(), WriteAdjacencyError>
where
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    write_adjacency_to(BufWriter::new(file), graph)
}

pub fn write_adjacency_to<W>(mut writer: W, graph: &Graph) -> Result<(), WriteAdjacencyError>
where
    W: Write,
{
    let n = graph.vertex_count();
    writeln!(writer, "{n}")?;
    let mut offset = n + 2;
    for vertex in graph.vertices() {
        writeln!(writer, "{offset}")?;
        offset += vertex.neighbors().len();
    }
    for vertex in graph.vertices() {
        for v in vertex.neighbors() {
            writeln!(writer, "{v}")?;
        }
    }
    writer.flush()?;
    Ok(())
}
