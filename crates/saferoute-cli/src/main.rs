use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use saferoute_cli::commands::assess::handle_assess;
use saferoute_cli::commands::evacuate::handle_evacuate;
use saferoute_cli::commands::nodes::handle_nodes;
use saferoute_cli::commands::route::{handle_route, RouteCommandArgs};
use saferoute_cli::output::OutputFormat;
use saferoute_cli::settings::{load_graph, seed_path, WeightArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Risk-aware routing between city locations")]
struct Cli {
    /// JSON graph seed to load instead of the built-in demo city.
    #[arg(long, env = "SAFEROUTE_GRAPH", global = true)]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(flatten)]
    weights: WeightArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the safest-shortest route between two locations.
    Route {
        /// Starting location id or name.
        #[arg(long = "from")]
        from: String,
        /// Destination location id or name.
        #[arg(long = "to")]
        to: String,
    },
    /// Route to the reachable safe location with the lowest cost.
    Evacuate {
        /// Starting location id or name.
        #[arg(long = "from")]
        from: String,
    },
    /// Report the risk rating of a location and the nearest refuge.
    Assess {
        /// Location id or name.
        #[arg(long = "at")]
        at: String,
    },
    /// List all locations in the graph.
    Nodes {
        /// Only list locations flagged safe.
        #[arg(long)]
        safe: bool,
    },
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let graph = load_graph(seed_path(cli.graph).as_deref())?;

    match cli.command {
        Command::Route { from, to } => handle_route(
            &graph,
            &RouteCommandArgs { from, to },
            cli.weights.resolve()?,
            cli.format,
        ),
        Command::Evacuate { from } => {
            handle_evacuate(&graph, &from, cli.weights.resolve()?, cli.format)
        }
        Command::Assess { at } => {
            handle_assess(&graph, &at, cli.format)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Nodes { safe } => {
            handle_nodes(&graph, safe, cli.format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
