//! Configuration module
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field has a default, so the server also runs without a file.
//!
//! # Example
//!
//! ```no_run
//! use folio_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("folio.toml")).unwrap();
//! println!("Document links must contain: {}", config.index.path_marker);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, IndexConfig, ScrapeMode, ServerConfig, SingleConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
