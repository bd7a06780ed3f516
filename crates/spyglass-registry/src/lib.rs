//! Registry client for the Spyglass catalog explorer
//!
//! This crate provides the data layer behind every Spyglass view:
//! an HTTP client with connection pooling and retry logic, an optional
//! client-side request throttle, a TTL cache for package lookups, and
//! the typed catalog queries composed from those pieces.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod client;
pub mod limit;
pub mod retry;
pub mod session;

pub use api::{Packument, PackumentVersion, SearchResponse};
pub use cache::{CacheEntry, CacheStats, DetailsCache};
pub use catalog::{Catalog, FEATURED_PACKAGES, SEARCH_RESULT_LIMIT};
pub use client::{ClientConfig, RegistryClient, DEFAULT_REGISTRY_URL};
pub use limit::{RequestThrottle, ThrottleConfig};
pub use retry::RetryPolicy;
pub use session::SearchSession;

use spyglass_core::error::ExplorerError;

/// Alias every fallible registry call returns
pub type RegistryResult<T> = Result<T, ExplorerError>;
