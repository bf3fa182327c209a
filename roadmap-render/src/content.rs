//! Content resolution.
//!
//! A page's `path` names the markdown document shown in the content panel.
//! Resolution strips one leading `/` and hands the normalized path to an
//! injected [`ContentResolver`]. Two resolvers are provided: an explicit
//! in-memory [`ContentRegistry`] and a [`DirectoryResolver`] reading
//! markdown files from disk.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::RenderError;

/// A renderable unit of markdown content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Normalized path the content was resolved from.
    pub path: String,
    /// Markdown source.
    pub markdown: String,
}

impl Content {
    /// Creates a content unit.
    #[must_use]
    pub fn new(path: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            markdown: markdown.into(),
        }
    }
}

/// Maps a normalized content path to renderable content.
pub trait ContentResolver {
    /// Resolve `path` (already normalized, no leading `/`).
    ///
    /// # Errors
    ///
    /// Returns `RenderError::ContentNotFound` if nothing exists at `path`,
    /// or `RenderError::Io` if the backing store fails.
    fn resolve(&self, path: &str) -> Result<Content, RenderError>;
}

/// Strip a single leading `/` from a page path.
#[must_use]
pub fn normalize_content_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

// ============================================================================
// In-memory registry
// ============================================================================

type ContentFactory = Box<dyn Fn() -> String>;

/// Explicit mapping from normalized path to a content-producing function.
#[derive(Default)]
pub struct ContentRegistry {
    entries: HashMap<String, ContentFactory>,
}

impl ContentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory producing the markdown for `path`.
    ///
    /// `path` is normalized before insertion, so `/a` and `a` name the
    /// same entry. A later registration replaces an earlier one.
    pub fn register<F>(&mut self, path: &str, factory: F) -> &mut Self
    where
        F: Fn() -> String + 'static,
    {
        self.entries
            .insert(normalize_content_path(path).to_string(), Box::new(factory));
        self
    }

    /// Register fixed markdown for `path`.
    pub fn register_static(&mut self, path: &str, markdown: impl Into<String>) -> &mut Self {
        let markdown = markdown.into();
        self.register(path, move || markdown.clone())
    }

    /// Number of registered paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<&String> = self.entries.keys().collect();
        paths.sort();
        f.debug_struct("ContentRegistry")
            .field("paths", &paths)
            .finish()
    }
}

impl ContentResolver for ContentRegistry {
    fn resolve(&self, path: &str) -> Result<Content, RenderError> {
        self.entries.get(path).map_or_else(
            || {
                tracing::warn!(path, "content not registered");
                Err(RenderError::ContentNotFound {
                    path: path.to_string(),
                })
            },
            |factory| Ok(Content::new(path, factory())),
        )
    }
}

// ============================================================================
// Directory resolver
// ============================================================================

/// Resolves content from markdown files under a root directory.
///
/// `frontend/intro` is looked up as `<root>/frontend/intro.md`, then as
/// `<root>/frontend/intro/index.md`.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    /// Creates a resolver rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory content is read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidates(&self, path: &str) -> Vec<PathBuf> {
        let base = self.root.join(path);
        if base.extension().is_some_and(|e| e == "md") {
            return vec![base];
        }
        let mut file = base.clone().into_os_string();
        file.push(".md");
        vec![PathBuf::from(file), base.join("index.md")]
    }
}

/// Only plain, relative components may appear in a content path.
fn is_contained(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

impl ContentResolver for DirectoryResolver {
    fn resolve(&self, path: &str) -> Result<Content, RenderError> {
        if !is_contained(path) {
            tracing::warn!(path, "rejected content path outside content root");
            return Err(RenderError::ContentNotFound {
                path: path.to_string(),
            });
        }

        for candidate in self.candidates(path) {
            if !candidate.is_file() {
                continue;
            }
            tracing::debug!(path, file = %candidate.display(), "resolved content");
            let markdown = fs::read_to_string(&candidate).map_err(|source| RenderError::Io {
                path: candidate.display().to_string(),
                source,
            })?;
            return Ok(Content::new(path, markdown));
        }

        tracing::warn!(path, root = %self.root.display(), "content not found");
        Err(RenderError::ContentNotFound {
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_one_leading_slash() {
        assert_eq!(normalize_content_path("/frontend/intro"), "frontend/intro");
        assert_eq!(normalize_content_path("frontend/intro"), "frontend/intro");
        assert_eq!(normalize_content_path("//double"), "/double");
        assert_eq!(normalize_content_path("/"), "");
    }

    #[test]
    fn test_registry_resolves_registered_path() {
        let mut registry = ContentRegistry::new();
        registry.register_static("/frontend/intro", "# Intro");
        assert_eq!(registry.len(), 1);

        let content = registry.resolve("frontend/intro").unwrap();
        assert_eq!(content.path, "frontend/intro");
        assert_eq!(content.markdown, "# Intro");
    }

    #[test]
    fn test_registry_calls_factory_per_resolve() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut registry = ContentRegistry::new();
        registry.register("a", move || {
            counter.set(counter.get() + 1);
            format!("call {}", counter.get())
        });

        assert_eq!(registry.resolve("a").unwrap().markdown, "call 1");
        assert_eq!(registry.resolve("a").unwrap().markdown, "call 2");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_registry_miss() {
        let registry = ContentRegistry::new();
        assert!(registry.is_empty());
        let err = registry.resolve("missing").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "content not found: missing");
    }

    #[test]
    fn test_registry_debug_lists_paths() {
        let mut registry = ContentRegistry::new();
        registry.register_static("b", "").register_static("a", "");
        assert_eq!(
            format!("{registry:?}"),
            r#"ContentRegistry { paths: ["a", "b"] }"#
        );
    }

    #[test]
    fn test_directory_resolver_file_and_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("frontend/landscape")).unwrap();
        fs::write(dir.path().join("frontend/intro.md"), "# Intro").unwrap();
        fs::write(dir.path().join("frontend/landscape/index.md"), "# Landscape").unwrap();

        let resolver = DirectoryResolver::new(dir.path());
        assert_eq!(
            resolver.resolve("frontend/intro").unwrap().markdown,
            "# Intro"
        );
        assert_eq!(
            resolver.resolve("frontend/landscape").unwrap().markdown,
            "# Landscape"
        );
        assert_eq!(
            resolver.resolve("frontend/intro.md").unwrap().markdown,
            "# Intro"
        );
    }

    #[test]
    fn test_directory_resolver_keeps_dotted_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("backend")).unwrap();
        fs::write(dir.path().join("backend/node.md"), "# Node").unwrap();
        fs::write(dir.path().join("backend/node.js.md"), "# Node.js").unwrap();
        fs::write(dir.path().join("backend/v1.md"), "# v1").unwrap();

        let resolver = DirectoryResolver::new(dir.path());
        assert_eq!(
            resolver.resolve("backend/node.js").unwrap().markdown,
            "# Node.js"
        );
        assert!(resolver.resolve("backend/v1.2").unwrap_err().is_not_found());
    }

    #[test]
    fn test_directory_resolver_miss() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = DirectoryResolver::new(dir.path());
        assert!(resolver.resolve("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_directory_resolver_rejects_escape() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("content");
        fs::create_dir_all(&inner).unwrap();
        fs::write(dir.path().join("secret.md"), "secret").unwrap();

        let resolver = DirectoryResolver::new(&inner);
        assert!(resolver.resolve("../secret").unwrap_err().is_not_found());
        assert!(resolver.resolve("").unwrap_err().is_not_found());
    }
}
