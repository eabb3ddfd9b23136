//! Configuration module for Pagecrawl
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use pagecrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pagecrawl.toml")).unwrap();
//! println!("Following up to {} redirects", config.client.max_redirects);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClientConfig, Config, OutputConfig, ValidatorConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::parse_header;
