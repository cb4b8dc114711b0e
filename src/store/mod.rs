//! Durable stores for pending and resolved links
//!
//! This module provides the two flat-file stores the pipeline runs on:
//! - the persisted queue of pending links, rewritten each resolve pass
//! - the append-only output store of resolved canonical URLs
//!
//! Both hold one URL per record in a single-column CSV file with no header.

mod csv_store;

pub use csv_store::{CsvOutput, CsvQueue};

use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Empty record in {path}")]
    EmptyRecord { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered, durable storage of pending link records
///
/// The queue is owned by whichever phase is currently running: the harvester
/// only appends, the resolver reads everything, clears, and selectively
/// re-appends. Between resolve passes it contains exactly the records not yet
/// successfully resolved.
pub trait QueueStore {
    /// Reads the full ordered contents of the queue
    ///
    /// A missing queue file reads as empty, so a fresh run and a fully
    /// drained run look the same to the resolver.
    fn read_all(&self) -> StoreResult<Vec<String>>;

    /// Replaces the entire queue contents with the given records
    fn overwrite_all(&mut self, records: &[String]) -> StoreResult<()>;

    /// Appends a single record, flushed to disk before returning
    fn append_one(&mut self, record: &str) -> StoreResult<()>;
}

/// Append-only storage of resolved canonical URLs
///
/// No overwrite operation is exposed; the store grows monotonically across
/// runs.
pub trait OutputStore {
    /// Appends a single resolved URL, flushed to disk before returning
    fn append_one(&mut self, record: &str) -> StoreResult<()>;
}
