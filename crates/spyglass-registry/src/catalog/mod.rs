//! Typed catalog queries composed from the client and cache
//!
//! The `Catalog` is what front-ends talk to. It validates input before
//! any I/O happens, consults the details cache for single-package
//! lookups, and collapses wire documents into the display types from
//! `spyglass_core`. Search results are intentionally never cached.

use std::sync::Arc;

use futures::future::join_all;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use spyglass_core::error::ExplorerError;
use spyglass_core::types::{PackageDetails, PackageSummary, Person, Repository};

use crate::cache::DetailsCache;
use crate::client::RegistryClient;
use crate::RegistryResult;


/// Result cap requested from the search endpoint
pub const SEARCH_RESULT_LIMIT: usize = 50;

/// Curated packages shown on the home view
pub const FEATURED_PACKAGES: [&str; 4] = ["react", "typescript", "bootstrap", "vite"];

/// Records served when not a single featured lookup succeeds
static FALLBACK_PACKAGES: Lazy<Vec<PackageDetails>> = Lazy::new(|| {
    vec![
        PackageDetails {
            name: "react".to_string(),
            version: "18.2.0".to_string(),
            description: "A JavaScript library for building user interfaces".to_string(),
            readme: "# React\n\nA JavaScript library for building user interfaces.".to_string(),
            license: "MIT".to_string(),
            author: Person::new("Facebook", "opensource@fb.com"),
            maintainers: vec![Person::new("React Team", "react-core@fb.com")],
            repository: Some(Repository::new("https://github.com/facebook/react")),
            homepage: Some("https://reactjs.org".to_string()),
        },
        PackageDetails {
            name: "typescript".to_string(),
            version: "5.0.4".to_string(),
            description: "TypeScript is a language for application scale JavaScript development"
                .to_string(),
            readme: "# TypeScript\n\nTypeScript is a language for application scale JavaScript development."
                .to_string(),
            license: "Apache-2.0".to_string(),
            author: Person::new("Microsoft Corp.", "typescript@microsoft.com"),
            maintainers: vec![Person::new("TypeScript Team", "typescript@microsoft.com")],
            repository: Some(Repository::new("https://github.com/microsoft/TypeScript")),
            homepage: Some("https://www.typescriptlang.org/".to_string()),
        },
    ]
});

/// Typed query layer over the registry client and details cache
#[derive(Debug, Clone)]
pub struct Catalog {
    client: Arc<RegistryClient>,
    cache: Arc<DetailsCache>,
}

impl Catalog {
    /// Compose a catalog from shared client and cache handles
    pub fn new(client: Arc<RegistryClient>, cache: Arc<DetailsCache>) -> Self {
        Self { client, cache }
    }

    /// Look up a single package, serving fresh cache hits without I/O.
    ///
    /// The trimmed name doubles as the cache key, so padded and bare
    /// spellings of the same package share one entry.
    pub async fn package_details(&self, name: &str) -> RegistryResult<PackageDetails> {
        let name = validate_query(name, "Package name")?;

        if let Some(details) = self.cache.get(name) {
            debug!("Serving package details for '{}' from cache", name);
            return Ok(details);
        }

        let packument = self.client.fetch_packument(name).await?;
        let details = packument.into_details();
        self.cache.insert(name.to_string(), details.clone());

        Ok(details)
    }

    /// Search the registry for packages matching `term`
    pub async fn search(&self, term: &str) -> RegistryResult<Vec<PackageSummary>> {
        let term = validate_query(term, "Search term")?;

        let response = self.client.fetch_search(term, SEARCH_RESULT_LIMIT).await?;
        Ok(response
            .objects
            .into_iter()
            .map(|object| object.package.into_summary())
            .collect())
    }

    /// Fetch the curated home-view packages.
    ///
    /// Lookups run concurrently and failures are skipped one by one;
    /// only when every single one fails does the static fallback data
    /// take over. This operation never errors.
    pub async fn featured(&self) -> Vec<PackageDetails> {
        let lookups = FEATURED_PACKAGES.iter().copied().map(|name| async move {
            match self.package_details(name).await {
                Ok(details) => Some(details),
                Err(error) => {
                    warn!("Skipping featured package '{}': {}", name, error);
                    None
                }
            }
        });

        let found: Vec<PackageDetails> = join_all(lookups).await.into_iter().flatten().collect();

        if found.is_empty() {
            warn!("Could not fetch any featured packages, serving fallback data");
            return FALLBACK_PACKAGES.clone();
        }

        found
    }
}

/// Trim caller input and reject empty values before any I/O
fn validate_query<'a>(value: &'a str, what: &str) -> RegistryResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ExplorerError::invalid_input(format!("{} is required", what)));
    }
    Ok(trimmed)
}
