//! Infrastructure layer - external adapters (filesystem, configuration).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod config;
pub mod export;

pub use config::{config_file_path, ensure_config_exists, load_config, save_config};
pub use export::{ensure_directories, export_snapshot};
