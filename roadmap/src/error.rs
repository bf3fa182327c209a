//! Error types for the `roadmap` CLI
//!
//! Aggregates loading and rendering errors and maps each to a process
//! exit code.

use roadmap_core::error::ConfigError;
use roadmap_render::RenderError;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `roadmap` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid descriptor or site file, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Render error (missing content, malformed descriptor)
    pub const RENDER_ERROR: i32 = 4;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `roadmap` operations.
#[derive(Debug, Error)]
pub enum RoadmapError {
    /// Descriptor or site configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Page render error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoadmapError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Render(RenderError::Io { .. }) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Render(_) => ExitCode::RENDER_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let config = RoadmapError::Config(ConfigError::MissingFile {
            path: PathBuf::from("roadmap.yaml"),
        });
        assert_eq!(config.exit_code(), ExitCode::CONFIG_ERROR);

        let not_found = RoadmapError::Render(RenderError::ContentNotFound {
            path: "frontend".to_string(),
        });
        assert_eq!(not_found.exit_code(), ExitCode::RENDER_ERROR);

        let malformed = RoadmapError::Render(RenderError::MalformedDescriptor { field: "page" });
        assert_eq!(malformed.exit_code(), ExitCode::RENDER_ERROR);

        let io = RoadmapError::Io(std::io::Error::other("disk"));
        assert_eq!(io.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_transparent_display() {
        let err = RoadmapError::Render(RenderError::ContentNotFound {
            path: "frontend/intro".to_string(),
        });
        assert_eq!(err.to_string(), "content not found: frontend/intro");
    }
}
