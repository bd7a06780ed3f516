//! Stale-response suppression for overlapping searches
//!
//! Searches triggered in quick succession can resolve out of order.
//! A `SearchSession` tags every search with a generation number and
//! discards any result (or error) that finishes after a newer search
//! was issued, so the caller only ever sees the latest answer.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use spyglass_core::types::PackageSummary;

use crate::catalog::Catalog;
use crate::RegistryResult;


/// Serializes overlapping searches so only the most recently issued
/// one may deliver its answer
#[derive(Debug)]
pub struct SearchSession {
    catalog: Catalog,
    generation: AtomicU64,
}

impl SearchSession {
    /// Create a session over an existing catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            generation: AtomicU64::new(0),
        }
    }

    /// Run a search tagged with a fresh generation.
    ///
    /// Returns `Ok(None)` when a newer search was issued before this
    /// one finished. Errors from superseded searches are discarded the
    /// same way, since the caller no longer cares about that answer.
    pub async fn search(&self, term: &str) -> RegistryResult<Option<Vec<PackageSummary>>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.catalog.search(term).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            if let Err(error) = &result {
                debug!("Discarding error from superseded search: {}", error);
            }
            return Ok(None);
        }

        result.map(Some)
    }

    /// Generation number of the most recently issued search
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
