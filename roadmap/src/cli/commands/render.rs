//! `render` command handler.

use std::fs;

use roadmap_render::html::render_document;
use roadmap_render::{CmarkRenderer, DirectoryResolver, RoadmapView};

use crate::cli::args::RenderArgs;
use crate::config::{load_descriptor, load_site};
use crate::error::RoadmapError;

/// Execute `render`.
///
/// Loads the descriptor and site configuration, renders the page against
/// the content directory and writes HTML to stdout or `--output`.
///
/// # Errors
///
/// Returns an error if loading fails, the descriptor is malformed, the
/// content cannot be found or the output cannot be written.
pub fn run(args: &RenderArgs) -> Result<(), RoadmapError> {
    let descriptor = load_descriptor(&args.descriptor)?;
    let site = load_site(args.site.as_deref())?;
    let resolver = DirectoryResolver::new(&args.content);
    let renderer = CmarkRenderer::new();

    let mut view = RoadmapView::new(&descriptor, &resolver, &renderer, &site);
    if args.menu_open {
        view.toggle_menu();
    }

    let fragment = view.render()?;
    let html = if args.standalone {
        let title = site.title.as_deref().unwrap_or(&descriptor.title);
        render_document(&fragment, title)
    } else {
        fragment
    };

    match args.output.as_deref() {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, html)?;
            tracing::info!(output = %path.display(), "wrote roadmap page");
        }
        None => println!("{html}"),
    }

    Ok(())
}
