//! Shared integration-test harness for running the `roadmap` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the built `roadmap` binary.
pub struct RoadmapProcess;

impl RoadmapProcess {
    /// Absolute path to a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    /// Content directory used by the fixtures.
    pub fn content_dir() -> PathBuf {
        Self::fixture_path("content")
    }

    /// Run `roadmap` with `args` and wait for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_roadmap"))
            .args(args)
            .arg("--quiet")
            .env_remove("ROADMAP_LOG_LEVEL")
            .env_remove("ROADMAP_REPO_URL")
            .env_remove("ROADMAP_SITE")
            .env_remove("ROADMAP_DESCRIPTOR")
            .env_remove("ROADMAP_CONTENT_DIR")
            .output()
            .expect("failed to run roadmap")
    }
}
