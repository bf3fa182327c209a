//! HTML assembly for roadmap pages.
//!
//! Produces the page header, the mobile and desktop sidebars and the
//! content panel as a single HTML fragment, optionally wrapped in a
//! standalone document.

pub mod escape;
pub mod page;

pub use page::{PageParts, render_document, render_page};
