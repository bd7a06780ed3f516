//! # spyglass-cli
//!
//! Terminal explorer for the npm registry catalog.
//!
//! This is the main entry point for the Spyglass CLI tool. It handles
//! command parsing, sets up logging, and dispatches to the command
//! handlers that drive the shared catalog query layer.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use spyglass_core::error::ExplorerResult;

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Explore the npm registry from your terminal
#[derive(Parser)]
#[command(name = "spyglass", version, about = "Explore the npm registry from your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Registry to query instead of the public npm registry
    #[arg(long, global = true, env = "SPYGLASS_REGISTRY", value_name = "URL")]
    pub registry: Option<String>,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Throttle outgoing requests to a polite rate
    #[arg(long, global = true)]
    pub throttle: bool,

    /// Print debug-level diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show metadata for a single package
    Info {
        /// Package name, e.g. react or @types/node
        name: String,
        /// Also print the package README
        #[arg(long)]
        readme: bool,
    },
    /// Search the registry catalog
    Search {
        /// Search term
        term: String,
        /// Sort order for the results
        #[arg(long, value_enum, default_value_t)]
        sort: SortKey,
        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,
        /// Narrow results locally by name, description, or keyword
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,
        /// Maximum number of results to display
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Show the curated featured packages
    Featured,
    /// Print version and build details
    Version,
}

/// Sort orders for search listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Registry relevance order
    #[default]
    Relevance,
    /// Alphabetical by package name
    Name,
    /// Deterministic popularity rank, most popular first
    Popularity,
    /// Synthetic publish recency, newest first
    Newest,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting Spyglass v{}", env!("CARGO_PKG_VERSION"));

    if let Err(error) = run_cli(cli) {
        let formatter = ErrorFormatter::new();
        eprintln!("{}", formatter.format_error(&error));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> ExplorerResult<()> {
    // The runtime comes up only after flags are parsed and logging is set.
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        spyglass_core::error::ExplorerError::network(
            "Failed to create async runtime".to_string(),
            e,
        )
    })?;

    rt.block_on(async {
        let ctx = CommandContext::new(cli.registry.as_deref(), cli.throttle, cli.json)?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spyglass_cli={},spyglass_registry={},spyglass_core={}",
            level, level, level
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Spyglass encountered an unexpected error: {}", panic_info);
        eprintln!("🔭 Spyglass crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/spyglass-dev/spyglass/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
