//! CLI library for testing purposes

pub mod config;
pub mod error;
pub mod path_glob;
pub mod sort;

pub use config::{Config, DEFAULT_CONFIG_FILE};
pub use error::CliError;
pub use path_glob::expand_input_globs;
pub use sort::{SortCommand, run_sort_command};
