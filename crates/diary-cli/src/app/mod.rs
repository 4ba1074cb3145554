//! Application-level utilities for the Diary CLI.
//!
//! This module provides:
//! - Path resolution for the config file and entry layout
//! - The terminal password prompt
//! - The per-run application context

mod context;
mod prompt;
mod resolver;

// Re-export public API
pub use context::{AppContext, CliSession};
pub use resolver::{resolve_config_path, resolve_layout};
