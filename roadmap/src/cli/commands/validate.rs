//! `validate` command handler.
//!
//! Checks each descriptor for structural problems and confirms its current
//! page's content resolves, without rendering anything.

use std::path::Path;

use roadmap_core::descriptor::validate_descriptor;
use roadmap_core::error::{ConfigError, Severity, ValidationIssue};
use roadmap_render::content::normalize_content_path;
use roadmap_render::{ContentResolver, DirectoryResolver};
use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::load_descriptor;
use crate::error::RoadmapError;

/// Validation outcome for a single file.
#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    valid: bool,
    issues: Vec<IssueReport>,
}

#[derive(Debug, Serialize)]
struct IssueReport {
    severity: &'static str,
    field: String,
    message: String,
}

impl From<&ValidationIssue> for IssueReport {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            severity: match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            },
            field: issue.field.clone(),
            message: issue.message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    total: usize,
    failed: usize,
}

#[derive(Debug, Serialize)]
struct Report {
    files: Vec<FileReport>,
    summary: Summary,
}

/// Execute `validate`.
///
/// # Errors
///
/// Returns `ConfigError::ValidationFailed` if any file has errors (or,
/// with `--strict`, warnings).
pub fn run(args: &ValidateArgs) -> Result<(), RoadmapError> {
    let resolver = DirectoryResolver::new(&args.content);

    let files: Vec<FileReport> = args
        .files
        .iter()
        .map(|path| check_file(path, &resolver, args.strict))
        .collect();

    let failed = files.iter().filter(|f| !f.valid).count();
    let report = Report {
        summary: Summary {
            total: files.len(),
            failed,
        },
        files,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => print_human(&report),
    }

    if failed > 0 {
        return Err(ConfigError::ValidationFailed { count: failed }.into());
    }
    Ok(())
}

fn check_file(path: &Path, resolver: &dyn ContentResolver, strict: bool) -> FileReport {
    let issues = match load_descriptor(path) {
        Ok(descriptor) => {
            let mut issues = validate_descriptor(&descriptor);
            let content_path = descriptor
                .page
                .as_ref()
                .and_then(|p| p.path.as_deref())
                .filter(|p| !p.is_empty())
                .map(normalize_content_path);
            if let Some(content_path) = content_path {
                if let Err(e) = resolver.resolve(content_path) {
                    issues.push(ValidationIssue::error("page.path", e.to_string()));
                }
            }
            issues
        }
        Err(e) => vec![ValidationIssue::error("file", e.to_string())],
    };

    let valid = !issues
        .iter()
        .any(|i| i.is_error() || (strict && i.severity == Severity::Warning));

    tracing::debug!(path = %path.display(), valid, issues = issues.len(), "validated descriptor");

    FileReport {
        path: path.display().to_string(),
        valid,
        issues: issues.iter().map(IssueReport::from).collect(),
    }
}

fn print_human(report: &Report) {
    for file in &report.files {
        let status = if file.valid { "ok" } else { "FAILED" };
        println!("{}: {status}", file.path);
        for issue in &file.issues {
            println!(
                "  {}: {}: {}",
                issue.severity.to_uppercase(),
                issue.field,
                issue.message
            );
        }
    }
    println!(
        "{} file(s) checked, {} failed",
        report.summary.total, report.summary.failed
    );
}
