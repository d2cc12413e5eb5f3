//! Reweigh CLI - all-pairs shortest paths on edge-list files.
//!
//! Loads a weighted directed graph, runs Johnson's algorithm, and prints the
//! distance/path matrix. Negative edge weights are allowed; negative cycles
//! are reported and abort the run.

mod commands;
mod input;
mod output;
mod progress;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// All-pairs shortest paths with negative edge weights.
///
/// Edge-list files hold one `source target weight` edge per line, separated
/// by whitespace or commas. Blank lines and `#` comments are ignored.
#[derive(Parser)]
#[command(name = "reweigh")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Compute shortest distances and paths between every pair of vertices
    Solve {
        /// Path to the edge-list file
        input: PathBuf,

        #[command(flatten)]
        options: SolveOptions,
    },

    /// Summarize a graph and report whether it has a negative cycle
    Check {
        /// Path to the edge-list file
        input: PathBuf,
    },

    /// Solve the built-in four-vertex sample graph
    Demo {
        #[command(flatten)]
        options: SolveOptions,
    },
}

/// Options shared by `solve` and `demo`.
#[derive(clap::Args, Clone, Copy)]
struct SolveOptions {
    /// Also print every edge with its reweighted weight
    #[arg(long)]
    show_reweighted: bool,

    /// Compute distances only
    #[arg(long)]
    no_paths: bool,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Solve { input, options } => {
            commands::solve::run(&input, options, cli.format, cli.quiet)
        }
        Commands::Check { input } => commands::check::run(&input, cli.format, cli.quiet),
        Commands::Demo { options } => commands::demo::run(options, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
