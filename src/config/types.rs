use serde::Deserialize;

/// Main configuration structure for linkweir
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub harvest: HarvestConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Harvest pass configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HarvestConfig {
    /// Only anchors whose href starts with this prefix are queued
    #[serde(rename = "base-prefix")]
    pub base_prefix: String,

    /// Listing page URL template; the page number is appended verbatim
    /// (e.g. "https://example.com/servers?page=" + "1")
    #[serde(rename = "page-template")]
    pub page_template: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the pending-link queue file (rewritten each resolve pass)
    #[serde(rename = "queue-path")]
    pub queue_path: String,

    /// Path to the canonical URL output file (append-only)
    #[serde(rename = "canonical-path")]
    pub canonical_path: String,

    /// Path to the error log file
    #[serde(rename = "log-path")]
    pub log_path: String,
}
