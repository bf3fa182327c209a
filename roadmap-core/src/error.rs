//! Core error types for roadmap rendering
//!
//! Loading and validation errors shared across the workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Descriptor and site configuration loading errors.
///
/// Covers every failure mode between reading a file from disk and
/// holding a typed [`RoadmapDescriptor`](crate::descriptor::RoadmapDescriptor)
/// or [`SiteConfig`](crate::site::SiteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML or JSON parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the file being parsed
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Referenced file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// File extension does not map to a known descriptor format
    #[error("unsupported descriptor format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat {
        /// Path with the unrecognized extension
        path: PathBuf,
    },

    /// One or more descriptors failed validation.
    #[error("{count} descriptor(s) failed validation")]
    ValidationFailed {
        /// Number of descriptors that failed validation.
        count: usize,
    },
}

// ============================================================================
// Validation Issues
// ============================================================================

/// Severity of a descriptor validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rendering cannot proceed.
    Error,
    /// Rendering succeeds but the output is probably not what was intended.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => f.write_str("ERROR"),
            Self::Warning => f.write_str("WARNING"),
        }
    }
}

/// A single problem found while validating a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// How serious the issue is.
    pub severity: Severity,
    /// Dotted path of the offending field (e.g. `page.path`).
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    /// Creates an error-severity issue.
    #[must_use]
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a warning-severity issue.
    #[must_use]
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this issue blocks rendering.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.field, self.message)
    }
}
