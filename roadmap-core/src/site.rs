//! Site-level configuration.
//!
//! A read-only record supplied by the site's configuration store. The
//! renderer only needs the repository URL for the header's share bar, but
//! arbitrary keys can be looked up with dotted paths.

use serde::{Deserialize, Serialize};

/// Repository linked from the page header when no site file overrides it.
pub const DEFAULT_REPO_URL: &str = "https://github.com/kamranahmedse/roadmap.sh";

/// Site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used as the document title for standalone output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Site description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Well-known site URLs.
    #[serde(default)]
    pub url: SiteUrls,
}

/// URLs the site links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteUrls {
    /// Source repository.
    #[serde(default = "default_repo_url")]
    pub repo: String,
}

fn default_repo_url() -> String {
    DEFAULT_REPO_URL.to_string()
}

impl Default for SiteUrls {
    fn default() -> Self {
        Self {
            repo: default_repo_url(),
        }
    }
}

impl SiteConfig {
    /// Repository URL shown in the share bar.
    #[must_use]
    pub fn repo_url(&self) -> &str {
        &self.url.repo
    }

    /// Look up a scalar value by dotted key, e.g. `"url.repo"`.
    ///
    /// Returns `None` for unknown keys and for keys naming a nested table.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        let mut node = serde_json::to_value(self).ok()?;
        for segment in key.split('.') {
            node = node.get_mut(segment)?.take();
        }
        match node {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
