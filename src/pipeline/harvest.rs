//! The harvest pass: pagination and prefix filtering
//!
//! Walks a paginated listing, page 1 upward, and streams every anchor whose
//! href starts with the configured prefix into the persisted queue. Each
//! match is appended (and flushed) as soon as it is seen, so a harvest that
//! dies mid-listing still leaves everything it found on disk.

use crate::config::HarvestConfig;
use crate::pipeline::fetcher::{fetch_page, FetchOutcome};
use crate::pipeline::html::extract_anchor_hrefs;
use crate::store::QueueStore;
use crate::WeirError;
use reqwest::Client;

/// Counters reported by a completed harvest pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Number of listing pages fetched, including the final empty one
    pub pages_fetched: u32,
    /// Total matching links appended to the queue
    pub links_queued: u64,
}

/// Runs one full harvest pass over the paginated listing
///
/// Pagination stops at the first page that yields zero matching anchors.
/// This is a heuristic, not a guarantee: a sparse page in the middle of the
/// listing ends the harvest even though later pages might still match. That
/// is the inherited behavior and it is kept as-is.
///
/// Any fetch failure (non-success status or transport error) aborts the
/// whole pass. There is no retry and no per-page resume; queue entries
/// already written by earlier pages remain valid, which is what makes the
/// abort safe.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `config` - Prefix filter and page URL template
/// * `queue` - The persisted queue receiving matches
///
/// # Returns
///
/// * `Ok(HarvestSummary)` - Pagination ended at an empty page
/// * `Err(WeirError)` - A page fetch failed and the pass was aborted
pub async fn harvest(
    client: &Client,
    config: &HarvestConfig,
    queue: &mut impl QueueStore,
) -> Result<HarvestSummary, WeirError> {
    let mut page_number: u32 = 1;
    let mut links_queued: u64 = 0;

    loop {
        let page_url = format!("{}{}", config.page_template, page_number);
        tracing::debug!("Fetching listing page: {}", page_url);

        let body = match fetch_page(client, &page_url).await {
            FetchOutcome::Success { body, .. } => body,
            FetchOutcome::HttpError { status_code } => {
                tracing::error!(
                    "Failed to get a proper response from {}. Status code: {}",
                    page_url,
                    status_code
                );
                return Err(WeirError::HarvestAborted {
                    page_url,
                    reason: format!("HTTP status {}", status_code),
                });
            }
            FetchOutcome::NetworkError { error } => {
                tracing::error!("Error processing page {}: {}", page_url, error);
                return Err(WeirError::HarvestAborted {
                    page_url,
                    reason: error,
                });
            }
        };

        let mut new_urls_found = false;
        for href in extract_anchor_hrefs(&body) {
            if href.starts_with(&config.base_prefix) {
                // Streamed, not batched: each match is durable immediately
                queue.append_one(&href)?;
                links_queued += 1;
                new_urls_found = true;
            }
        }

        if !new_urls_found {
            println!("No new URLs found. Ending harvest.");
            return Ok(HarvestSummary {
                pages_fetched: page_number,
                links_queued,
            });
        }

        println!("Saved: {}", page_url);
        page_number += 1;
    }
}
