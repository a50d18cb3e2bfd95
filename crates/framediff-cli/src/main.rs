//! FrameDiff CLI
//!
//! Command-line interface for diffing structural model snapshots

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "framediff")]
#[command(about = "FrameDiff - Structural model change detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two model snapshots and export the classified result
    Diff(commands::diff::DiffArgs),
    /// Print the summary of a previously exported combined model
    Summary(commands::summary::SummaryArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Summary(args) => commands::summary::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
