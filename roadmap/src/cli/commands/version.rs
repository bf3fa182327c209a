//! `version` command handler.

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::RoadmapError;

/// Package metadata baked in at compile time.
#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    repository: &'static str,
}

impl VersionInfo {
    const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
        }
    }
}

/// Execute `version`.
///
/// # Errors
///
/// Returns an error if the JSON form cannot be serialized.
pub fn run(args: &VersionArgs) -> Result<(), RoadmapError> {
    let info = VersionInfo::current();
    match args.format {
        OutputFormat::Human => println!("{} {}", info.name, info.version),
        OutputFormat::Json => println!("{}", serde_json::to_string(&info)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_serializes_package_metadata() {
        let json = serde_json::to_value(VersionInfo::current()).unwrap();
        assert_eq!(json["name"], "roadmap");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["repository"].is_string());
    }
}
