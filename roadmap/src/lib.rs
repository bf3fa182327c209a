//! `roadmap` — render roadmap pages from descriptors
//!
//! This library backs the `roadmap` CLI: argument parsing, descriptor and
//! site loading, logging setup and command handlers.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
