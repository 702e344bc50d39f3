use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ergraph::codec;
use ergraph::menu::Menu;
use ergraph::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Random labeled graphs, shortest paths and adjacency-list files
#[derive(Parser, Debug)]
#[command(name = "ergraph")]
#[command(about = "Generate, query and store labeled undirected graphs", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an Erdős–Rényi G(n, p) graph
    Generate {
        /// Number of nodes
        #[arg(short, long)]
        nodes: usize,

        /// Edge probability in [0, 1]
        #[arg(short, long)]
        probability: f64,

        /// RNG seed for a reproducible graph
        #[arg(long)]
        seed: Option<u64>,

        /// Label prefix; nodes are named <prefix>0, <prefix>1, ...
        #[arg(long, default_value = "n", conflicts_with = "labels")]
        prefix: String,

        /// Explicit comma-separated labels
        #[arg(long, value_delimiter = ',')]
        labels: Option<Vec<String>>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Shortest path between two nodes of a stored graph
    Path {
        /// Graph file in adjacency-list format
        #[arg(short, long)]
        input: PathBuf,

        /// Start node
        #[arg(long)]
        from: String,

        /// Target node
        #[arg(long)]
        to: String,

        /// Print the path as JSON
        #[arg(long)]
        json: bool,

        /// Also write a Graphviz rendering with the path highlighted
        #[arg(long)]
        dot: Option<PathBuf>,
    },

    /// Render a stored graph
    Render {
        /// Graph file in adjacency-list format
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Dot)]
        format: Format,

        /// Highlight the shortest path starting here (requires --to)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Highlight the shortest path ending here (requires --from)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive menu (default)
    Menu {
        /// Write visualisations to this DOT file instead of the terminal
        #[arg(long)]
        dot: Option<PathBuf>,

        /// RNG seed for graphs created from the menu
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Dot,
    Json,
}

fn open_output(output: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ergraph v{}", env!("CARGO_PKG_VERSION"));

    match args.command.unwrap_or(Command::Menu { dot: None, seed: None }) {
        Command::Generate {
            nodes,
            probability,
            seed,
            prefix,
            labels,
            output,
        } => {
            let config = GeneratorConfig {
                node_count: nodes,
                probability,
                seed,
            };
            let generator = RandomGraphGenerator::new(config);
            let graph = match labels {
                Some(list) => generator.generate(&mut ListLabels::new(list))?,
                None => generator.generate(&mut IndexedLabels::new(prefix))?,
            };
            match output {
                Some(path) => {
                    save_graph(&graph, &path)?;
                    info!("Graph written to {:?}", path);
                }
                None => codec::encode(&graph, io::stdout().lock())?,
            }
        }

        Command::Path {
            input,
            from,
            to,
            json,
            dot,
        } => {
            let graph = load_graph(&input)?;
            let path = shortest_path(&graph, &from, &to)?;
            if json {
                println!("{}", serde_json::to_string(&path)?);
            } else {
                println!("{}", path);
            }
            if let Some(dot_path) = dot {
                let mut sink = DotRenderer::new(open_output(Some(&dot_path))?);
                sink.render(&graph.snapshot(), Some(&path))?;
            }
        }

        Command::Render {
            input,
            format,
            from,
            to,
            output,
        } => {
            let graph = load_graph(&input)?;
            let highlighted = match (from, to) {
                (Some(from), Some(to)) => Some(shortest_path(&graph, &from, &to)?),
                _ => None,
            };
            let writer = open_output(output.as_ref())?;
            let mut sink: Box<dyn RenderSink> = match format {
                Format::Dot => Box::new(DotRenderer::new(writer)),
                Format::Json => Box::new(JsonRenderer::new(writer)),
            };
            sink.render(&graph.snapshot(), highlighted.as_ref())?;
        }

        Command::Menu { dot, seed } => {
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), io::stdout())
                .with_dot_output(dot)
                .with_seed(seed);
            menu.run()?;
        }
    }

    Ok(())
}
