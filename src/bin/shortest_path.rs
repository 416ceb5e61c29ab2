use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ordered_float::OrderedFloat;
use serde::de::DeserializeOwned;
use serde::Serialize;

use dijkstra_path::graph::fixtures;
use dijkstra_path::{
    Graph, NodeRecord, SearchConfig, SearchOutcome, SearchStatus, SelfLoopPolicy, SymmetryPolicy,
    TraceEdge, UniformCostSearch, Weight, WeightMatrix,
};

/// Minimum-cost path search over a weight matrix
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a JSON weight matrix (`[[...]]` or `{"weights": [[...]]}`), 0 meaning no edge
    Solve {
        #[arg(short, long, env = "DIJKSTRA_PATH_GRAPH")]
        graph: PathBuf,

        #[arg(short, long)]
        source: usize,

        #[arg(short, long)]
        destination: usize,

        /// Read fractional weights
        #[arg(long)]
        float: bool,

        /// Skip non-zero diagonal entries instead of rejecting the graph
        #[arg(long)]
        ignore_self_loops: bool,

        /// Reject graphs that are not undirected
        #[arg(long)]
        require_symmetric: bool,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in reference graphs
    Demo {
        /// Print JSON reports instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Everything printed for one query
#[derive(Serialize)]
struct Report<'a, W>
where
    W: Weight + Serialize,
{
    name: &'a str,
    source: usize,
    destination: usize,
    status: SearchStatus,
    cost: Option<W>,
    expansions: usize,
    closed: &'a [NodeRecord<W>],
    trace: Vec<TraceEdge<W>>,
}

impl<'a, W> Report<'a, W>
where
    W: Weight + Serialize,
{
    fn new<G: Graph<W>>(
        name: &'a str,
        graph: &G,
        destination: usize,
        outcome: &'a SearchOutcome<W>,
    ) -> dijkstra_path::Result<Self> {
        let trace = if outcome.is_success() {
            outcome.path(graph)?
        } else {
            Vec::new()
        };
        Ok(Report {
            name,
            source: outcome.source,
            destination,
            status: outcome.status,
            cost: outcome.destination_cost(),
            expansions: outcome.expansions,
            closed: outcome.closed.as_slice(),
            trace,
        })
    }

    fn print(&self, json: bool) -> Result<(), serde_json::Error> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }

        println!("{}: {} -> {}", self.name, self.source, self.destination);
        match self.cost {
            Some(cost) => println!("  cost: {}", cost),
            None => println!("  no path ({:?})", self.status),
        }
        for record in self.closed {
            println!("  closed {}", record);
        }
        for edge in &self.trace {
            println!("  {}", edge);
        }
        Ok(())
    }
}

fn solve<W>(
    path: &Path,
    source: usize,
    destination: usize,
    config: SearchConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>>
where
    W: Weight + Serialize + DeserializeOwned,
{
    let graph = WeightMatrix::<W>::from_json_str(&fs::read_to_string(path)?)?;
    log::info!(
        "Loaded {} with {} vertices and {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let outcome = UniformCostSearch::new()
        .with_config(config)
        .search(&graph, source, destination)?;

    let name = path.to_string_lossy();
    Report::new(&name, &graph, destination, &outcome)?.print(json)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match args.command {
        Command::Solve {
            graph,
            source,
            destination,
            float,
            ignore_self_loops,
            require_symmetric,
            json,
        } => {
            let config = SearchConfig {
                self_loops: if ignore_self_loops {
                    SelfLoopPolicy::Ignore
                } else {
                    SelfLoopPolicy::Reject
                },
                symmetry: if require_symmetric {
                    SymmetryPolicy::RequireSymmetric
                } else {
                    SymmetryPolicy::Any
                },
            };
            if float {
                solve::<OrderedFloat<f64>>(&graph, source, destination, config, json)?;
            } else {
                solve::<u64>(&graph, source, destination, config, json)?;
            }
        }
        Command::Demo { json } => {
            let search = UniformCostSearch::new();
            for fixture in fixtures::all() {
                let outcome = search.search(&fixture.graph, fixture.source, fixture.destination)?;
                Report::new(fixture.name, &fixture.graph, fixture.destination, &outcome)?
                    .print(json)?;
            }
        }
    }

    Ok(())
}
