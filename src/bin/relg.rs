//! CLI entry point for the `relg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use relgraph::cli::commands;

#[derive(Parser)]
#[command(
    name = "relg",
    about = "relgraph CLI — traversal and shortest paths over delimited edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Field delimiter for edge-list files
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Treat edges as one-way
    #[arg(long)]
    directed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Print the graph, one node per line
    Show {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List every stored edge triple
    Edges {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List the neighbors of a node
    Neighbors {
        /// Path to the edge-list file
        file: PathBuf,
        /// The node to look up
        node: String,
    },
    /// Breadth-first visit order from a start node
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// The node to start from
        start: String,
    },
    /// Depth-first visit order from a start node
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// The node to start from
        start: String,
    },
    /// Shortest distance from a start node to every node
    Distances {
        /// Path to the edge-list file
        file: PathBuf,
        /// The node to measure from
        start: String,
    },
    /// Shortest path between two nodes
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Path origin
        from: String,
        /// Path destination
        to: String,
    },
    /// Dense adjacency matrix
    Matrix {
        /// Path to the edge-list file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let delimiter = cli.delimiter;
    let directed = cli.directed;

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, delimiter, directed, json),
        Commands::Show { file } => commands::cmd_show(&file, delimiter, directed),
        Commands::Edges { file } => commands::cmd_edges(&file, delimiter, directed, json),
        Commands::Neighbors { file, node } => {
            commands::cmd_neighbors(&file, &node, delimiter, directed, json)
        }
        Commands::Bfs { file, start } => {
            commands::cmd_bfs(&file, &start, delimiter, directed, json)
        }
        Commands::Dfs { file, start } => {
            commands::cmd_dfs(&file, &start, delimiter, directed, json)
        }
        Commands::Distances { file, start } => {
            commands::cmd_distances(&file, &start, delimiter, directed, json)
        }
        Commands::Path { file, from, to } => {
            commands::cmd_path(&file, &from, &to, delimiter, directed, json)
        }
        Commands::Matrix { file } => commands::cmd_matrix(&file, delimiter, directed, json),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
