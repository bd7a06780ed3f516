//! Command handlers and their dispatch table.
//!
//! This module owns the shared command context and the central
//! dispatch. Each command is an async function that drives the catalog
//! query layer through a `CommandContext`.

use std::sync::Arc;

use tracing::info;

use spyglass_core::error::ExplorerResult;
use spyglass_registry::{
    Catalog, ClientConfig, DetailsCache, RegistryClient, SearchSession, ThrottleConfig,
};

pub mod featured;
pub mod info;
pub mod search;

#[cfg(test)]
mod tests;

use crate::output::OutputHandler;
use crate::Commands;

/// Dependencies handed to every command handler
pub struct CommandContext {
    /// Catalog query layer shared by every command
    pub catalog: Catalog,
    /// Search session that suppresses superseded answers
    pub session: SearchSession,
    /// Terminal output formatting
    pub output: OutputHandler,
    /// Emit machine-readable JSON instead of formatted text
    pub json: bool,
}

impl CommandContext {
    /// Build the query layer once and share it across commands
    pub fn new(registry: Option<&str>, throttle: bool, json: bool) -> ExplorerResult<Self> {
        let mut config = ClientConfig::default();
        if let Some(url) = registry {
            config.base_url = url.to_string();
        }
        if throttle {
            config.throttle = Some(ThrottleConfig::default());
        }

        let client = Arc::new(RegistryClient::with_config(config)?);
        let cache = Arc::new(DetailsCache::new());
        let catalog = Catalog::new(client, cache);
        let session = SearchSession::new(catalog.clone());

        Ok(Self {
            catalog,
            session,
            output: OutputHandler::new(),
            json,
        })
    }
}

/// Route a parsed subcommand to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> ExplorerResult<()> {
    match command {
        Commands::Info { name, readme } => {
            info!("Showing package info: {}", name);
            info::execute(&name, readme, ctx).await
        }
        Commands::Search {
            term,
            sort,
            reverse,
            filter,
            limit,
        } => {
            info!("Searching registry for: {}", term);
            search::execute(&term, sort, reverse, filter.as_deref(), limit, ctx).await
        }
        Commands::Featured => {
            info!("Fetching featured packages");
            featured::execute(ctx).await
        }
        Commands::Version => {
            info!("Showing version information");
            show_version(ctx)
        }
    }
}

fn show_version(ctx: &CommandContext) -> ExplorerResult<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build_date = env!("BUILD_DATE");
    let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    ctx.output.info(&format!("🔭 Spyglass v{}", version));
    ctx.output.info(&format!("Built: {}", build_date));
    ctx.output.info(&format!("Target: {}", target));
    ctx.output.info(&format!("Rust: {}", env!("RUSTC_VERSION")));

    Ok(())
}
