//! Domain data types for the catalog explorer.
//!
//! This module provides the types the query layer produces and the
//! front-end renders:
//! - PackageDetails for the single-package view
//! - PackageSummary for search result listings
//! - Person and Repository normalized from the registry's loose forms

pub mod package;
pub mod summary;

pub use package::{PackageDetails, Person, Repository};
pub use summary::PackageSummary;
