//! Roadmap descriptor schema
//!
//! A descriptor is the immutable input to a single page render: the
//! roadmap's title and attribution, its sidebar navigation and the page
//! currently being viewed. Descriptors are deserialized from YAML or JSON
//! using camelCase keys.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, ValidationIssue};

/// Sidebar keys starting with this prefix carry metadata and are never
/// rendered as navigation groups.
pub const RESERVED_GROUP_PREFIX: char = '_';

/// Insertion-ordered mapping of group title to the pages in that group.
pub type Sidebar = IndexMap<String, Vec<PageRef>>;

// ============================================================================
// Schema
// ============================================================================

/// A roadmap and the page within it currently being viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapDescriptor {
    /// Roadmap title shown in the page header.
    #[serde(default)]
    pub title: String,

    /// Canonical roadmap URL, used as the share target.
    #[serde(default)]
    pub url: String,

    /// Link to the roadmap's contributor list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors_url: Option<String>,

    /// Number of contributors (including the author).
    #[serde(default)]
    pub contributors_count: u32,

    /// Roadmap author; an absent or null author renders as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: Author,

    /// Sidebar navigation; an absent or null sidebar renders as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sidebar: Sidebar,

    /// Page currently being viewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageRef>,
}

/// Roadmap author attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Profile link.
    #[serde(default)]
    pub url: String,
}

/// Reference to a single roadmap page.
///
/// `url` is the route used for active-state comparison; `path` locates the
/// page's content and is only required on the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    /// Route of the page.
    #[serde(default)]
    pub url: String,

    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Content location, typically with a leading `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl PageRef {
    /// Creates a page reference without a content path.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            path: None,
        }
    }

    /// Sets the content path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Returns `true` if a sidebar key is reserved for metadata.
#[must_use]
pub fn is_reserved_group(title: &str) -> bool {
    title.starts_with(RESERVED_GROUP_PREFIX)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ============================================================================
// Parsing
// ============================================================================

/// Serialization format of a descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl DescriptorFormat {
    /// Picks a format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parse a descriptor from text.
///
/// `origin` is only used to label parse errors.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` if the content is not a valid
/// descriptor in the given format.
pub fn parse_descriptor(
    content: &str,
    format: DescriptorFormat,
    origin: &Path,
) -> Result<RoadmapDescriptor, ConfigError> {
    match format {
        DescriptorFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })
        }
        DescriptorFormat::Json => {
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: Some(e.line()).filter(|&l| l > 0),
                message: e.to_string(),
            })
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Check a descriptor for problems that would break or degrade rendering.
///
/// A missing current page or content path is an error. Empty groups,
/// duplicate entry URLs and a current page absent from the sidebar are
/// warnings.
#[must_use]
pub fn validate_descriptor(descriptor: &RoadmapDescriptor) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match descriptor.page.as_ref() {
        None => issues.push(ValidationIssue::error("page", "current page is missing")),
        Some(page) if page.path.as_deref().is_none_or(str::is_empty) => {
            issues.push(ValidationIssue::error(
                "page.path",
                "current page has no content path",
            ));
        }
        Some(_) => {}
    }

    let mut seen_urls = HashSet::new();
    for (title, pages) in &descriptor.sidebar {
        if is_reserved_group(title) {
            continue;
        }
        if pages.is_empty() {
            issues.push(ValidationIssue::warning(
                format!("sidebar.{title}"),
                "group has no pages",
            ));
        }
        for page in pages {
            if !seen_urls.insert(page.url.as_str()) {
                issues.push(ValidationIssue::warning(
                    format!("sidebar.{title}"),
                    format!("duplicate page url '{}'", page.url),
                ));
            }
        }
    }

    if let Some(page) = descriptor.page.as_ref() {
        if !descriptor.sidebar.is_empty() && !seen_urls.contains(page.url.as_str()) {
            issues.push(ValidationIssue::warning(
                "page.url",
                format!("current page '{}' is not listed in the sidebar", page.url),
            ));
        }
    }

    issues
}
