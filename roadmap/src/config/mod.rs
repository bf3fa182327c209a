//! Descriptor and site configuration loading.

pub mod loader;

pub use loader::{load_descriptor, load_site};
