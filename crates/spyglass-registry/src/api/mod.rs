//! npm registry API response types
//!
//! The registry serves two document shapes Spyglass cares about: the
//! full packument from `GET /{name}` and the search envelope from
//! `GET /-/v1/search`. Both are decades-old formats with fields that
//! come in several alternative encodings, so the types here accept
//! every published form and collapse them into the display types from
//! `spyglass_core` afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use spyglass_core::types::package::{
    Person, Repository, NO_DESCRIPTION, NO_README, UNKNOWN_AUTHOR, UNKNOWN_LICENSE, UNKNOWN_VERSION,
};
use spyglass_core::types::summary::UNKNOWN_FIELD;
use spyglass_core::types::{PackageDetails, PackageSummary};


/// Dist-tag naming the version a plain `npm install` would pick
pub const LATEST_TAG: &str = "latest";

/// Full package document from `GET /{name}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Packument {
    /// Canonical package name
    pub name: String,
    /// Root-level description
    #[serde(default)]
    pub description: Option<String>,
    /// Root-level README text
    #[serde(default)]
    pub readme: Option<String>,
    /// License, as SPDX string or legacy object
    #[serde(default)]
    pub license: Option<LicenseField>,
    /// Package author
    #[serde(default)]
    pub author: Option<PersonField>,
    /// Current maintainer list
    #[serde(default)]
    pub maintainers: Option<Vec<PersonField>>,
    /// Source repository
    #[serde(default)]
    pub repository: Option<RepositoryField>,
    /// Project homepage
    #[serde(default)]
    pub homepage: Option<String>,
    /// Tag-to-version map; `latest` names the current release
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: HashMap<String, String>,
    /// Per-version metadata keyed by version string
    #[serde(default)]
    pub versions: HashMap<String, PackumentVersion>,
}

/// Metadata for a specific published version
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackumentVersion {
    /// Semver string for this release
    pub version: String,
    /// Version-level description
    #[serde(default)]
    pub description: Option<String>,
    /// Version-level README text
    #[serde(default)]
    pub readme: Option<String>,
    /// License, as SPDX string or legacy object
    #[serde(default)]
    pub license: Option<LicenseField>,
    /// Version author
    #[serde(default)]
    pub author: Option<PersonField>,
    /// Maintainers at publish time
    #[serde(default)]
    pub maintainers: Option<Vec<PersonField>>,
    /// Source repository
    #[serde(default)]
    pub repository: Option<RepositoryField>,
    /// Project homepage
    #[serde(default)]
    pub homepage: Option<String>,
}

/// License field in either modern SPDX-expression or legacy object form
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LicenseField {
    /// `"license": "MIT"`
    Expression(String),
    /// `"license": {"type": "MIT", "url": "..."}`
    Legacy {
        #[serde(rename = "type")]
        license_type: Option<String>,
        url: Option<String>,
    },
}

impl LicenseField {
    /// Collapse to a display string, dropping blank values
    pub fn into_license(self) -> Option<String> {
        let value = match self {
            LicenseField::Expression(expression) => Some(expression),
            LicenseField::Legacy { license_type, .. } => license_type,
        };
        value.filter(|license| !license.trim().is_empty())
    }
}

/// Person field in either unparsed-string or structured-object form
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PersonField {
    /// `"author": "Jane Doe <jane@example.com> (https://example.com)"`
    Unparsed(String),
    /// `"author": {"name": "Jane Doe", "email": "jane@example.com"}`
    Structured {
        name: Option<String>,
        email: Option<String>,
        url: Option<String>,
    },
}

impl PersonField {
    /// Collapse to a person record, substituting the placeholder
    /// identity when no usable name survives
    pub fn into_person(self) -> Person {
        match self {
            PersonField::Unparsed(raw) => Person::parse(&raw),
            PersonField::Structured { name, email, .. } => Person::new(
                name.filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                email.unwrap_or_default(),
            ),
        }
    }
}

/// Repository field in either shortcut-string or object form
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RepositoryField {
    /// `"repository": "github:facebook/react"`
    Url(String),
    /// `"repository": {"type": "git", "url": "..."}`
    Object {
        #[serde(rename = "type")]
        repo_type: Option<String>,
        url: Option<String>,
    },
}

impl RepositoryField {
    /// Collapse to a repository pointer, dropping blank URLs
    pub fn into_repository(self) -> Option<Repository> {
        let url = match self {
            RepositoryField::Url(url) => Some(url),
            RepositoryField::Object { url, .. } => url,
        };
        url.filter(|url| !url.trim().is_empty()).map(Repository::new)
    }
}

impl Packument {
    /// Collapse the full document into display-ready details.
    ///
    /// Fields published on the `latest` version win over the root
    /// document; anything still missing falls back to the placeholder
    /// values so the display types never carry empty required fields.
    pub fn into_details(mut self) -> PackageDetails {
        let latest_tag = self.dist_tags.get(LATEST_TAG).cloned();
        let latest = latest_tag
            .as_deref()
            .and_then(|version| self.versions.remove(version));

        let mut description = self.description;
        let mut readme = self.readme;
        let mut license = self.license;
        let mut author = self.author;
        let mut repository = self.repository;
        let mut homepage = self.homepage;
        let mut version_maintainers = None;

        if let Some(latest) = latest {
            description = latest.description.or(description);
            readme = latest.readme.or(readme);
            license = latest.license.or(license);
            author = latest.author.or(author);
            repository = latest.repository.or(repository);
            homepage = latest.homepage.or(homepage);
            version_maintainers = latest.maintainers;
        }

        // The root maintainer list tracks the current owners, so it
        // wins over the snapshot taken at publish time.
        let maintainers = self
            .maintainers
            .filter(|list| !list.is_empty())
            .or(version_maintainers)
            .unwrap_or_default();

        PackageDetails {
            name: self.name,
            version: latest_tag.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            description: non_blank(description).unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            readme: non_blank(readme).unwrap_or_else(|| NO_README.to_string()),
            license: license
                .and_then(LicenseField::into_license)
                .unwrap_or_else(|| UNKNOWN_LICENSE.to_string()),
            author: author
                .map(PersonField::into_person)
                .unwrap_or_else(Person::unknown),
            maintainers: maintainers
                .into_iter()
                .map(PersonField::into_person)
                .collect(),
            repository: repository.and_then(RepositoryField::into_repository),
            homepage: non_blank(homepage),
        }
    }
}

/// Search envelope from `GET /-/v1/search`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// One entry per hit, in registry relevance order
    #[serde(default)]
    pub objects: Vec<SearchObject>,
}

/// Wrapper around one search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchObject {
    /// The package summary itself
    pub package: SearchPackage,
}

/// Package summary inside a search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchPackage {
    /// Name of the matched package
    #[serde(default)]
    pub name: Option<String>,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Version the hit refers to
    #[serde(default)]
    pub version: Option<String>,
    /// Keyword list
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl SearchPackage {
    /// Flatten into a display summary, substituting defaults for
    /// whatever the hit omitted
    pub fn into_summary(self) -> PackageSummary {
        PackageSummary {
            name: self.name.unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            description: self
                .description
                .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            version: self.version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            keywords: self.keywords.unwrap_or_default(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
