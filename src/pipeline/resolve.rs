//! The resolve pass: drain-snapshot-and-requeue
//!
//! Each pass snapshots the whole persisted queue, clears it, and works
//! through the snapshot in order. A record that fetches cleanly and declares
//! a canonical link moves to the output store for good; anything else goes
//! back into the queue for the next pass.
//!
//! Known gap, inherited deliberately: there is no retry cap, no backoff, and
//! no dead-letter sink. A record that never resolves keeps every pass
//! non-empty and the resolver loops forever. Bounding this requires per-
//! record attempt counts, which the single-column queue format cannot carry.

use crate::pipeline::fetcher::{fetch_page, FetchOutcome};
use crate::pipeline::html::extract_canonical;
use crate::store::{OutputStore, QueueStore};
use crate::WeirError;
use reqwest::Client;

/// Outcome of a single resolution attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The page declared a canonical URL
    Resolved(String),
    /// The page fetched cleanly but carries no canonical link tag
    NoCanonical,
    /// Non-success status or transport failure
    FetchFailed,
}

/// Counters for a single resolve pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// Records moved to the output store this pass
    pub resolved: u64,
    /// Records returned to the queue this pass
    pub requeued: u64,
}

/// Counters reported by a completed resolve phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveSummary {
    /// Number of passes run, including the final empty one
    pub passes: u32,
    /// Total records resolved across all passes
    pub resolved: u64,
}

/// Attempts to resolve one pending link to its canonical URL
async fn resolve_one(client: &Client, url: &str) -> ResolutionOutcome {
    match fetch_page(client, url).await {
        FetchOutcome::Success { body, .. } => match extract_canonical(&body) {
            Some(canonical) => ResolutionOutcome::Resolved(canonical),
            None => ResolutionOutcome::NoCanonical,
        },
        FetchOutcome::HttpError { status_code } => {
            tracing::error!("Fetch of {} returned status {}", url, status_code);
            ResolutionOutcome::FetchFailed
        }
        FetchOutcome::NetworkError { error } => {
            tracing::error!("Error resolving {}: {}", url, error);
            ResolutionOutcome::FetchFailed
        }
    }
}

/// Runs a single resolve pass over the current queue contents
///
/// Reads the full queue into a snapshot, clears the queue, then works the
/// snapshot in original order: resolved records are appended to the output
/// store, everything else is appended back to the queue. Every snapshot
/// record therefore ends the pass in exactly one of the two stores.
///
/// Durability caveat: the clear happens before any survivor is rewritten, so
/// a crash mid-pass loses the snapshot records not yet re-persisted. The
/// queue file is not crash-atomic across a pass.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `queue` - The persisted queue of pending links
/// * `output` - The append-only store of canonical URLs
///
/// # Returns
///
/// * `Ok(None)` - The queue was empty; the resolve phase is done
/// * `Ok(Some(PassOutcome))` - Pass counters; another pass may be needed
/// * `Err(WeirError)` - A store operation failed
pub async fn run_resolve_pass(
    client: &Client,
    queue: &mut impl QueueStore,
    output: &mut impl OutputStore,
) -> Result<Option<PassOutcome>, WeirError> {
    let snapshot = queue.read_all()?;
    if snapshot.is_empty() {
        println!("No more URLs to process. Exiting.");
        return Ok(None);
    }

    queue.overwrite_all(&[])?;

    let mut outcome = PassOutcome {
        resolved: 0,
        requeued: 0,
    };

    for url in &snapshot {
        match resolve_one(client, url).await {
            ResolutionOutcome::Resolved(canonical) => {
                output.append_one(&canonical)?;
                println!("Found canonical URL: {}", canonical);
                outcome.resolved += 1;
            }
            ResolutionOutcome::NoCanonical | ResolutionOutcome::FetchFailed => {
                queue.append_one(url)?;
                outcome.requeued += 1;
            }
        }
    }

    Ok(Some(outcome))
}

/// Runs resolve passes until a pass begins with an empty queue
///
/// See the module docs for the non-termination hazard: a permanently
/// unresolvable record makes this loop run forever.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `queue` - The persisted queue of pending links
/// * `output` - The append-only store of canonical URLs
///
/// # Returns
///
/// * `Ok(ResolveSummary)` - The queue drained completely
/// * `Err(WeirError)` - A store operation failed
pub async fn resolve(
    client: &Client,
    queue: &mut impl QueueStore,
    output: &mut impl OutputStore,
) -> Result<ResolveSummary, WeirError> {
    let mut summary = ResolveSummary {
        passes: 0,
        resolved: 0,
    };

    loop {
        summary.passes += 1;
        match run_resolve_pass(client, queue, output).await? {
            Some(pass) => {
                summary.resolved += pass.resolved;
                tracing::debug!(
                    "Resolve pass {} done: {} resolved, {} requeued",
                    summary.passes,
                    pass.resolved,
                    pass.requeued
                );
            }
            None => return Ok(summary),
        }
    }
}
