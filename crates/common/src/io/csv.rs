//! Comma separated exports for plotting.

use degeneracy_coloring::{Coloring, DegeneracyOrdering, Graph};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// `vertex,color` with one row per vertex id.
pub fn write_colors<W: Write>(mut writer: W, coloring: &Coloring) -> std::io::Result<()> {
    writeln!(writer, "vertex,color")?;
    for (v, color) in coloring.colors().iter().enumerate() {
        writeln!(writer, "{v},{color}")?;
    }
    writer.flush()
}

/// `vertex,numEdges` with the original degree of every vertex.
pub fn write_degrees<W: Write>(mut writer: W, graph: &Graph) -> std::io::Result<()> {
    writeln!(writer, "vertex,numEdges")?;
    for vertex in graph.vertices() {
        writeln!(writer, "{},{}", vertex.id(), vertex.original_degree())?;
    }
    writer.flush()
}

/// `step,degree` rows without header, one per vertex in coloring order.
pub fn write_deletion_degrees<W: Write>(mut writer: W, ordering: &DegeneracyOrdering) -> std::io::Result<()> {
    for (step, degree) in ordering.deletion_steps() {
        writeln!(writer, "{step},{degree}")?;
    }
    writer.flush()
}

pub fn write_colors_file<P: AsRef<Path>>(path: P, coloring: &Coloring) -> std::io::Result<()> {
    write_colors(create(path)?, coloring)
}

pub fn write_degrees_file<P: AsRef<Path>>(path: P, graph: &Graph) -> std::io::Result<()> {
    write_degrees(create(path)?, graph)
}

pub fn write_deletion_degrees_file<P: AsRef<Path>>(path: P, ordering: &DegeneracyOrdering) -> std::io::Result<()> {
    write_deletion_degrees(create(path)?, ordering)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::instances::path_graph;
    use degeneracy_coloring::{color_in_order, degeneracy_ordering, Degeneracy};

    fn to_string(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = vec![];
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn path() {
        let mut graph = path_graph(3);
        let ordering = degeneracy_ordering(&mut graph, Degeneracy::SmallestLast).unwrap();
        let coloring = color_in_order(&mut graph, ordering.order()).unwrap();

        assert_eq!(to_string(|w| write_degrees(w, &graph)), "vertex,numEdges\n0,1\n1,2\n2,1\n");
        assert_eq!(to_string(|w| write_deletion_degrees(w, &ordering)), "1,0\n2,1\n3,1\n");

        let colors = to_string(|w| write_colors(w, &coloring));
        let mut lines = colors.lines();
        assert_eq!(lines.next(), Some("vertex,color"));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn files() {
        let path = std::env::temp_dir().join(format!("degeneracy-coloring-degrees-{}.csv", std::process::id()));
        write_degrees_file(&path, &path_graph(2)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "vertex,numEdges\n0,1\n1,1\n");
        std::fs::remove_file(&path).unwrap();
    }
}
