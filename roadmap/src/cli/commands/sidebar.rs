//! `sidebar` command handler.

use roadmap_render::build_sidebar;

use crate::cli::args::{OutputFormat, SidebarArgs};
use crate::config::load_descriptor;
use crate::error::RoadmapError;

/// Execute `sidebar`.
///
/// Prints the grouped sidebar, marking in-progress groups and the active
/// entry.
///
/// # Errors
///
/// Returns an error if the descriptor cannot be loaded or serialized.
pub fn run(args: &SidebarArgs) -> Result<(), RoadmapError> {
    let descriptor = load_descriptor(&args.descriptor)?;
    let groups = build_sidebar(&descriptor.sidebar, descriptor.page.as_ref());

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        OutputFormat::Human => {
            if groups.is_empty() {
                println!("No sidebar groups.");
            }
            for group in &groups {
                if group.status.is_in_progress() {
                    println!("{} [in progress]", group.title);
                } else {
                    println!("{}", group.title);
                }
                for entry in &group.entries {
                    let marker = if entry.active { '*' } else { ' ' };
                    println!("  {marker} {} ({})", entry.title, entry.url);
                }
            }
        }
    }

    Ok(())
}
