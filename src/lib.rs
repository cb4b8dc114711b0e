//! Linkweir: a canonical-link harvester
//!
//! This crate implements a two-stage pipeline: a harvest pass that paginates a
//! directory listing and queues every outbound link matching a target-domain
//! prefix, and a resolve pass that drains the queue and records each link's
//! self-declared canonical URL. Pending links live in a flat CSV file so an
//! interrupted run picks up where it left off.

pub mod config;
pub mod pipeline;
pub mod store;

use thiserror::Error;

/// Main error type for linkweir operations
#[derive(Debug, Error)]
pub enum WeirError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Harvest aborted at {page_url}: {reason}")]
    HarvestAborted { page_url: String, reason: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for linkweir operations
pub type Result<T> = std::result::Result<T, WeirError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::{
    build_http_client, fetch_page, harvest, resolve, run_resolve_pass, FetchOutcome,
    HarvestSummary, PassOutcome, ResolutionOutcome, ResolveSummary,
};
pub use store::{CsvOutput, CsvQueue};
