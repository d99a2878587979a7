//! CLI entry point for the `graphwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands;
use graphwalk::graph::TraversalKind;
use graphwalk::GraphError;

#[derive(Parser)]
#[command(
    name = "graphwalk",
    about = "graphwalk CLI — depth-first and breadth-first traversal of undirected graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a graph and start vertices, then print its DFS and BFS orders
    Run {
        /// Graph description file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print the adjacency list of every vertex
    Show {
        /// Graph description file
        file: PathBuf,
    },
    /// Display vertex, edge and degree statistics
    Info {
        /// Graph description file
        file: PathBuf,
    },
    /// Depth-first traversal from a start vertex
    Dfs {
        /// Graph description file
        file: PathBuf,
        /// Start vertex
        start: usize,
    },
    /// Breadth-first traversal from a start vertex
    Bfs {
        /// Graph description file
        file: PathBuf,
        /// Start vertex
        start: usize,
    },
    /// Export the graph as JSON
    Export {
        /// Graph description file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Run { file } => commands::cmd_run(file.as_deref(), json),
        Commands::Show { file } => commands::cmd_show(&file, json),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Dfs { file, start } => {
            commands::cmd_traverse(&file, TraversalKind::Dfs, start, json)
        }
        Commands::Bfs { file, start } => {
            commands::cmd_traverse(&file, TraversalKind::Bfs, start, json)
        }
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidInput(_) => 2,
            GraphError::InvalidVertex { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
