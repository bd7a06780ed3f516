//! Package detail types for the single-package view.
//!
//! The registry leaves most descriptive fields optional, so every field
//! here is already normalized: absent upstream data is replaced by the
//! documented placeholder strings at construction time.

use serde::{Deserialize, Serialize};

/// Placeholder shown when the registry has no description for a package
pub const NO_DESCRIPTION: &str = "No description available";
/// Placeholder shown when a package ships no README
pub const NO_README: &str = "No README available";
/// License string used when the registry has no license metadata
pub const UNKNOWN_LICENSE: &str = "Unknown";
/// Version string used when the registry reports no `latest` dist-tag
pub const UNKNOWN_VERSION: &str = "0.0.0";
/// Author name used when the registry has no author metadata
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Full package details produced by a registry lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDetails {
    pub name: String,
    pub version: String,
    pub description: String,
    pub readme: String,
    pub license: String,
    pub author: Person,
    pub maintainers: Vec<Person>,
    pub repository: Option<Repository>,
    pub homepage: Option<String>,
}

/// Author or maintainer identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: String,
}

/// Source repository pointer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub url: String,
}

impl PackageDetails {
    /// Create details with placeholder values for everything but identity
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: NO_DESCRIPTION.to_string(),
            readme: NO_README.to_string(),
            license: UNKNOWN_LICENSE.to_string(),
            author: Person::unknown(),
            maintainers: Vec::new(),
            repository: None,
            homepage: None,
        }
    }
}

impl Person {
    /// Create a person record
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Placeholder identity for packages without author metadata
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_AUTHOR.to_string(),
            email: String::new(),
        }
    }

    /// Parse npm's unparsed person form: `Name <email> (url)`.
    ///
    /// Every segment is optional; the url segment is discarded. A string
    /// with no usable name yields the placeholder identity.
    pub fn parse(raw: &str) -> Self {
        let mut name_end = raw.len();
        let mut email = String::new();

        if let Some(open) = raw.find('<') {
            name_end = name_end.min(open);
            if let Some(close) = raw[open + 1..].find('>') {
                email = raw[open + 1..open + 1 + close].trim().to_string();
            }
        }
        if let Some(paren) = raw.find('(') {
            name_end = name_end.min(paren);
        }

        let name = raw[..name_end].trim();
        Self {
            name: if name.is_empty() {
                UNKNOWN_AUTHOR.to_string()
            } else {
                name.to_string()
            },
            email,
        }
    }
}

impl Repository {
    /// Create a repository pointer
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
