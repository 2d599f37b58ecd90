use clap::{Parser, ValueEnum};
use common::instances::{complete_graph, cycle_graph, random_graph};
use common::io::csv::{write_colors_file, write_degrees_file, write_deletion_degrees_file};
use common::io::{read_adjacency, read_edge_list, write_adjacency, GraphFileType};
use common::sample::Distribution;
use degeneracy_coloring::{color_graph, Algorithm, ColoringReport, DegreeListState, Graph};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Algo {
    Slvo,
    Sodl,
    Random,
    Llvo,
    Lodl,
    InOrder,
}

impl From<Algo> for Algorithm {
    fn from(algo: Algo) -> Self {
        match algo {
            Algo::Slvo => Algorithm::Slvo,
            Algo::Sodl => Algorithm::Sodl,
            Algo::Random => Algorithm::Random,
            Algo::Llvo => Algorithm::Llvo,
            Algo::Lodl => Algorithm::Lodl,
            Algo::InOrder => Algorithm::InOrder,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Generator {
    Cycle,
    Complete,
    Random,
}

/// Colors a graph greedily in one or more vertex orderings and reports the colors used.
#[derive(Debug, Parser)]
struct Cli {
    /// Graph file to color. Without it a graph is generated.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = GraphFileType::Adjacency)]
    input_type: GraphFileType,
    #[arg(long, value_enum, default_value_t = Generator::Random, conflicts_with = "input")]
    generate: Generator,
    #[arg(long, default_value_t = 100)]
    vertices: usize,
    /// Number of edges of a generated random graph.
    #[arg(long, default_value_t = 300)]
    edges: usize,
    #[arg(long, value_enum, default_value_t = Distribution::Uniform)]
    distribution: Distribution,
    /// Treat the edges of the input file as directed.
    #[arg(long)]
    directed: bool,
    /// Orderings to run, all of them if none is given.
    #[arg(long, value_enum)]
    algo: Vec<Algo>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Save the graph in the adjacency format.
    #[arg(long)]
    save: Option<PathBuf>,
    #[arg(long)]
    colors_csv: Option<PathBuf>,
    #[arg(long)]
    degrees_csv: Option<PathBuf>,
    /// Degree at deletion per step of the smallest-last ordering.
    #[arg(long)]
    slvo_plot_csv: Option<PathBuf>,
    #[arg(long)]
    stats: Option<PathBuf>,
    /// Only print the summary of each run.
    #[arg(long)]
    summary_only: bool,
    #[arg(long)]
    log_level: Option<Level>,
    #[arg(long, requires = "log_level")]
    log_json: bool,
}

fn init_logging(cli: &Cli) {
    let Some(level) = cli.log_level else { return };
    let builder = FmtSubscriber::builder().with_max_level(level).with_span_events(FmtSpan::CLOSE);
    if cli.log_json {
        builder.json().finish().init();
    } else {
        builder.finish().init();
    }
}

fn load_graph(cli: &Cli, rng: &mut StdRng) -> Result<Graph, Box<dyn Error>> {
    if let Some(input) = &cli.input {
        return Ok(match cli.input_type {
            GraphFileType::Adjacency => read_adjacency(input, cli.directed)?,
            GraphFileType::EdgeList => read_edge_list(input, cli.directed)?,
        });
    }
    Ok(match cli.generate {
        Generator::Cycle => cycle_graph(cli.vertices),
        Generator::Complete => complete_graph(cli.vertices),
        Generator::Random => random_graph(rng, cli.vertices, cli.edges, cli.distribution)?,
    })
}

/// `colors.csv` becomes `colors_SLVO.csv` when more than one ordering runs.
fn per_algorithm_path(path: &Path, algorithm: Algorithm, multiple: bool) -> PathBuf {
    if !multiple {
        return path.to_path_buf();
    }
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{algorithm}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{algorithm}"),
    };
    path.with_file_name(name)
}

fn write_stats(out: &mut impl Write, input: &str, report: &ColoringReport, time: Duration) -> Result<(), Box<dyn Error>> {
    let algo = report.algorithm();
    let time = time.as_secs_f64();
    let colors = report.num_colors();
    let bound = report.ordering().map(|o| o.color_bound().to_string()).unwrap_or_else(|| "null".to_string());
    writeln!(
        out,
        "{{\"input\": \"{input}\", \"algo\": \"{algo}\", \"time\": {time}, \"colors\": {colors}, \"color_bound\": {bound}}}"
    )?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut graph = load_graph(&cli, &mut rng)?;
    info!(n = graph.vertex_count(), m = graph.edge_count(), "loaded graph");

    if let Some(path) = &cli.save {
        write_adjacency(path, &graph)?;
    }
    if let Some(path) = &cli.degrees_csv {
        write_degrees_file(path, &graph)?;
    }

    let algorithms: Vec<Algorithm> =
        if cli.algo.is_empty() { Algorithm::ALL.to_vec() } else { cli.algo.iter().map(|&a| a.into()).collect() };
    let multiple = algorithms.len() > 1;
    let input = match &cli.input {
        Some(path) => path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default(),
        None => format!("{:?}", cli.generate).to_lowercase(),
    };
    let mut stats = cli.stats.as_ref().map(File::create).transpose()?.map(BufWriter::new);

    for algorithm in algorithms {
        if algorithm.reads_degree_buckets() && graph.state() == DegreeListState::Consumed {
            graph.rebuild_degree_list()?;
        }
        let start = Instant::now();
        let report = color_graph(&mut graph, algorithm, &mut rng)?;
        let time = start.elapsed();

        let text = report.to_string();
        if cli.summary_only {
            let summary = text.find("SUMMARY").map_or(text.as_str(), |i| &text[i..]);
            print!("{summary}");
        } else {
            print!("{text}");
        }
        println!("Time: {} μs", time.as_micros());

        if let Some(path) = &cli.colors_csv {
            write_colors_file(per_algorithm_path(path, algorithm, multiple), report.coloring())?;
        }
        if let (Some(path), Algorithm::Slvo, Some(ordering)) = (&cli.slvo_plot_csv, algorithm, report.ordering()) {
            write_deletion_degrees_file(path, ordering)?;
        }
        if let Some(out) = &mut stats {
            write_stats(out, &input, &report, time)?;
        }
    }
    if let Some(out) = &mut stats {
        out.flush()?;
    }
    Ok(())
}
