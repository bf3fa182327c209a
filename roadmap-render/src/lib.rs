//! `roadmap-render` — roadmap page rendering
//!
//! Turns a [`RoadmapDescriptor`](roadmap_core::descriptor::RoadmapDescriptor)
//! into an HTML page: a grouped sidebar with the active entry highlighted,
//! a header with share links and the current page's markdown content.

pub mod content;
pub mod error;
pub mod html;
pub mod markdown;
pub mod menu;
pub mod share;
pub mod sidebar;
pub mod view;

pub use content::{Content, ContentRegistry, ContentResolver, DirectoryResolver};
pub use error::RenderError;
pub use markdown::{CmarkRenderer, MarkdownRenderer};
pub use menu::MenuState;
pub use sidebar::{GroupStatus, SidebarEntry, SidebarGroup, build_sidebar};
pub use view::RoadmapView;
