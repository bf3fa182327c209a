//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod render;
pub mod sidebar;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::RoadmapError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), RoadmapError> {
    match cli.command {
        Commands::Render(args) => render::run(&args),
        Commands::Sidebar(args) => sidebar::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}
