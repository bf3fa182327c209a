//! Error types for roadmap page rendering.

use thiserror::Error;

/// Errors that abort a page render.
///
/// Every variant is fatal to the render that raised it; no partial output
/// is produced.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The current page's content path does not resolve to any content.
    #[error("content not found: {path}")]
    ContentNotFound {
        /// Normalized path that failed to resolve.
        path: String,
    },

    /// A field required for rendering is absent from the descriptor.
    #[error("malformed descriptor: missing {field}")]
    MalformedDescriptor {
        /// Dotted name of the missing field.
        field: &'static str,
    },

    /// Reading content from disk failed.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File being read.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Returns `true` if the error is a content lookup miss.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ContentNotFound { .. })
    }
}
