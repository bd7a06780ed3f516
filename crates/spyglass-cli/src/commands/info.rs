//! `spyglass info` command implementation.
//!
//! Fetches and displays metadata for a single package.

use spyglass_core::error::ExplorerResult;
use spyglass_core::types::{PackageDetails, Person};

use super::CommandContext;

/// Execute the `spyglass info` command
pub async fn execute(name: &str, readme: bool, ctx: &CommandContext) -> ExplorerResult<()> {
    if !ctx.json {
        ctx.output.step("🔭", &format!("Looking up {}", name));
    }

    let details = ctx.catalog.package_details(name).await?;

    if ctx.json {
        ctx.output.json(&details);
        return Ok(());
    }

    render_details(&details, readme, ctx);
    Ok(())
}

fn render_details(details: &PackageDetails, readme: bool, ctx: &CommandContext) {
    ctx.output
        .success(&format!("{} v{}", details.name, details.version));
    ctx.output.field("Description", &details.description);
    ctx.output.field("License", &details.license);
    ctx.output.field("Author", &format_person(&details.author));

    if !details.maintainers.is_empty() {
        let maintainers: Vec<String> = details.maintainers.iter().map(format_person).collect();
        ctx.output.field("Maintainers", &maintainers.join(", "));
    }
    if let Some(repository) = &details.repository {
        ctx.output.field("Repository", &repository.url);
    }
    if let Some(homepage) = &details.homepage {
        ctx.output.field("Homepage", homepage);
    }

    if readme {
        ctx.output.info("");
        ctx.output.info(&normalize_readme(&details.readme));
    }
}

/// Render a person as `Name <email>`, or just the name when no email
/// was published
pub(crate) fn format_person(person: &Person) -> String {
    if person.email.is_empty() {
        person.name.clone()
    } else {
        format!("{} <{}>", person.name, person.email)
    }
}

/// Tidy README text for terminal display: normalize line endings and
/// trim trailing whitespace per line, leaving fenced code blocks
/// untouched
pub(crate) fn normalize_readme(readme: &str) -> String {
    let unified = readme.replace("\r\n", "\n");
    let mut inside_fence = false;
    let mut lines = Vec::new();

    for line in unified.lines() {
        let is_fence = line.trim_start().starts_with("```");
        if is_fence {
            inside_fence = !inside_fence;
        }
        if inside_fence && !is_fence {
            lines.push(line);
        } else {
            lines.push(line.trim_end());
        }
    }

    lines.join("\n")
}
