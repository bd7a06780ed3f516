//! # spyglass-core
//!
//! Core types and utilities shared across all Spyglass crates.
//!
//! The main pieces:
//! - `types`: PackageDetails and PackageSummary for the catalog views,
//!   plus Person and Repository normalization covering npm's string forms
//! - `error`: the ExplorerError taxonomy and its result alias
//! - `utils`: deterministic ranking helpers for list rendering

pub mod error;
pub mod types;
pub mod utils;

// Flat re-exports for the names downstream crates reach for most
pub use error::{ExplorerError, ExplorerResult};
pub use types::{PackageDetails, PackageSummary, Person, Repository};
