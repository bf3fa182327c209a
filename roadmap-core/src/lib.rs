//! `roadmap-core` — shared types for roadmap page rendering
//!
//! This crate provides the roadmap descriptor schema, the site
//! configuration record and the error types shared across
//! `roadmap` (CLI) and `roadmap-render` (view rendering).

pub mod descriptor;
pub mod error;
pub mod site;
