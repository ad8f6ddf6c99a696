//! Shortcode CLI - Tag macro engine.
//!
//! Provides commands for:
//! - `tags`: List the registered tags with their syntax tips
//! - `expand`: Expand a single tag occurrence

mod commands;
mod error;
mod output;
mod registry;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExpandArgs, TagsArgs};
use output::Output;

/// Shortcode - Tag macro engine.
#[derive(Parser)]
#[command(name = "shortcode", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered tags with their syntax tips.
    Tags(TagsArgs),
    /// Expand a single tag occurrence.
    Expand(ExpandArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Tags(args) => args.verbose,
        Commands::Expand(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Tags(args) => args.execute(),
        Commands::Expand(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
