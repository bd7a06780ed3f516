//! Search result summary type.
//!
//! One `PackageSummary` per search hit; ephemeral, with no identity
//! beyond the package name.

use serde::{Deserialize, Serialize};

/// Field value used when a search hit omits a sub-field
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Flat search result entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub name: String,
    pub description: String,
    pub version: String,
    pub keywords: Vec<String>,
}

impl PackageSummary {
    /// Case-insensitive local match against name, description, or any
    /// keyword. Used by the results view to narrow a fetched page
    /// without another registry round-trip.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(&query))
    }
}
