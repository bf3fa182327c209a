//! Configuration loader
//!
//! Loading pipeline for the two inputs of a render:
//! 1. Read the file (missing files become `ConfigError::MissingFile`)
//! 2. Pick the format from the extension (descriptors only)
//! 3. Deserialize to typed config
//! 4. Apply environment overrides (site only)

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use roadmap_core::descriptor::{DescriptorFormat, RoadmapDescriptor, parse_descriptor};
use roadmap_core::error::ConfigError;
use roadmap_core::site::SiteConfig;

use crate::error::RoadmapError;

/// Environment variable overriding the site's repository URL.
pub const REPO_URL_ENV: &str = "ROADMAP_REPO_URL";

/// Load a roadmap descriptor from a YAML or JSON file.
///
/// # Errors
///
/// Returns `ConfigError::MissingFile` if the file does not exist,
/// `ConfigError::UnsupportedFormat` for unknown extensions and
/// `ConfigError::ParseError` for invalid content.
pub fn load_descriptor(path: &Path) -> Result<RoadmapDescriptor, RoadmapError> {
    let format = DescriptorFormat::from_path(path)?;
    let content = read_config_file(path)?;
    let descriptor = parse_descriptor(&content, format, path)?;

    tracing::debug!(
        path = %path.display(),
        groups = descriptor.sidebar.len(),
        "loaded descriptor"
    );

    Ok(descriptor)
}

/// Load site configuration.
///
/// With no path the default configuration is used. `ROADMAP_REPO_URL`
/// overrides the repository URL in either case.
///
/// # Errors
///
/// Returns `ConfigError::MissingFile` or `ConfigError::ParseError` if a
/// path is given and cannot be loaded.
pub fn load_site(path: Option<&Path>) -> Result<SiteConfig, RoadmapError> {
    let site = match path {
        Some(path) => {
            let content = read_config_file(path)?;
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?
        }
        None => SiteConfig::default(),
    };

    Ok(apply_env_overrides(site, std::env::var(REPO_URL_ENV).ok()))
}

/// Apply a repository URL override, ignoring empty values.
#[must_use]
pub fn apply_env_overrides(mut site: SiteConfig, repo_url: Option<String>) -> SiteConfig {
    if let Some(repo) = repo_url.filter(|r| !r.trim().is_empty()) {
        tracing::debug!(repo = %repo, "repository URL overridden from environment");
        site.url.repo = repo;
    }
    site
}

fn read_config_file(path: &Path) -> Result<String, RoadmapError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            RoadmapError::Config(ConfigError::MissingFile {
                path: path.to_path_buf(),
            })
        } else {
            RoadmapError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", path.display()),
            ))
        }
    })
}
