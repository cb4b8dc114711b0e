//! The two-stage harvest/resolve pipeline
//!
//! This module contains the core pipeline logic:
//! - HTTP fetching with explicit outcome classification
//! - HTML anchor and canonical-link extraction
//! - The harvest pass (pagination + prefix filtering)
//! - The resolve pass (drain-snapshot-and-requeue)

mod fetcher;
mod harvest;
mod html;
mod resolve;

pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use harvest::{harvest, HarvestSummary};
pub use html::{extract_anchor_hrefs, extract_canonical};
pub use resolve::{resolve, run_resolve_pass, PassOutcome, ResolutionOutcome, ResolveSummary};
