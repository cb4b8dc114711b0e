//! Configuration module for linkweir
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use linkweir::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Filtering anchors by prefix: {}", config.harvest.base_prefix);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, HarvestConfig, OutputConfig, UserAgentConfig};
pub use validation::validate;
