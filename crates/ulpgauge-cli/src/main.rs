use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod registry;
mod report;

/// Top-level CLI argument parser for the `ug` command
#[derive(Parser)]
#[command(
    name = "ug",
    about = "ulpgauge — data-driven math routine conformance",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `ug` CLI
#[derive(Subcommand)]
enum Commands {
    /// Validate a YAML vector suite
    Validate {
        /// Path to the suite YAML file
        suite: PathBuf,
    },
    /// Run one suite against its registered routine
    Run {
        /// Path to the suite YAML file
        suite: PathBuf,
        /// Emit the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run every suite in a directory
    RunAll {
        /// Directory containing suite YAML files
        #[arg(default_value = "suites")]
        suite_dir: PathBuf,
        /// Emit the aggregate report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the registered routines and their policies
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { suite } => commands::validate::run(&suite),
        Commands::Run { suite, json } => commands::run::run(&suite, json),
        Commands::RunAll { suite_dir, json } => commands::run_all::run(&suite_dir, json),
        Commands::List => commands::list::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
