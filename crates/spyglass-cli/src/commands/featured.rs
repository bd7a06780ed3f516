//! `spyglass featured` command implementation.
//!
//! Shows the curated home-view packages. This command never fails:
//! unreachable packages are skipped and a total registry outage falls
//! back to built-in records.

use spyglass_core::error::ExplorerResult;

use super::CommandContext;

/// Execute the `spyglass featured` command
pub async fn execute(ctx: &CommandContext) -> ExplorerResult<()> {
    if !ctx.json {
        ctx.output.step("✨", "Fetching featured packages");
    }

    let packages = ctx.catalog.featured().await;

    if ctx.json {
        ctx.output.json(&packages);
        return Ok(());
    }

    if packages.len() < spyglass_registry::FEATURED_PACKAGES.len() {
        ctx.output.warn("Some featured packages could not be fetched");
    }

    for details in &packages {
        ctx.output
            .success(&format!("{} v{}", details.name, details.version));
        ctx.output.info(&format!("  {}", details.description));
        ctx.output.info(&format!("  License: {}", details.license));
    }

    Ok(())
}
