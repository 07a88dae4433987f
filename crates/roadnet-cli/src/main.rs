use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadnet_lib::{adjacency_json, adjacency_lines, load_network, CommandProcessor, RoadNetwork};

#[derive(Parser, Debug)]
#[command(author, version, about = "Road network build and query utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a network definition and print its adjacency list.
    Build {
        /// Network definition file (CITIES/ROADS format).
        network: PathBuf,
        /// Emit the adjacency list as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Run a command file of traffic reports and queries against a network.
    Query {
        /// Network definition file (CITIES/ROADS format).
        network: PathBuf,
        /// Command file with one directive per line.
        commands: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Build { network, json } => handle_build(&network, json),
        Command::Query { network, commands } => handle_query(&network, &commands),
    }
}

fn handle_build(network_path: &Path, json: bool) -> Result<()> {
    let network = load(network_path)?;
    if json {
        println!("{}", adjacency_json(&network)?);
    } else {
        for line in adjacency_lines(&network) {
            println!("{line}");
        }
    }
    Ok(())
}

fn handle_query(network_path: &Path, commands_path: &Path) -> Result<()> {
    let network = load(network_path)?;
    let file = File::open(commands_path)
        .with_context(|| format!("failed to open command file {}", commands_path.display()))?;

    // Per-line command errors go to stderr inside the processor and never
    // change the exit code; only I/O failures propagate out of here.
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut processor = CommandProcessor::new(&network);
    processor
        .run(BufReader::new(file), stdout.lock(), stderr.lock())
        .context("failed while processing the command stream")?;
    Ok(())
}

fn load(path: &Path) -> Result<RoadNetwork> {
    load_network(path)
        .with_context(|| format!("failed to load network definition from {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
