//! Observability
//!
//! Structured logging for `roadmap` command runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
