use clap::Parser;
use common::io::{read_adjacency, read_edge_list, write_adjacency, write_edge_list, GraphFileType};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    #[arg(long, value_enum)]
    input_type: GraphFileType,
    #[arg(long, value_enum)]
    output_type: GraphFileType,
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    output: PathBuf,
    #[arg(long)]
    directed: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let graph = match cli.input_type {
        GraphFileType::Adjacency => read_adjacency(&cli.input, cli.directed)?,
        GraphFileType::EdgeList => read_edge_list(&cli.input, cli.directed)?,
    };
    println!("read {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    match cli.output_type {
        GraphFileType::Adjacency => write_adjacency(&cli.output, &graph)?,
        GraphFileType::EdgeList => write_edge_list(&cli.output, &graph)?,
    }
    Ok(())
}
