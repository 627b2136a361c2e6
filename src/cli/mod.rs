//! CLI interface for state-set-index
//!
//! Provides the `ssi` command-line utilities: building an index from terms
//! given on the command line, querying it, and managing persistent defaults.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, ConfigAction, IndexArgs};
pub use paths::{config_dir, IndexSettings, PersistentConfig};
