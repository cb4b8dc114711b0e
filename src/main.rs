//! Linkweir main entry point
//!
//! This is the command-line interface for the linkweir canonical-link
//! harvester.

use anyhow::Context;
use clap::Parser;
use linkweir::config::load_config;
use linkweir::pipeline::{build_http_client, harvest, resolve};
use linkweir::store::{CsvOutput, CsvQueue};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Linkweir: a canonical-link harvester
///
/// Linkweir walks a paginated directory listing, queues every outbound link
/// matching a target-domain prefix, then resolves each queued link to its
/// self-declared canonical URL. Pending links persist in a flat CSV queue,
/// so an interrupted run resumes where it left off.
#[derive(Parser, Debug)]
#[command(name = "linkweir")]
#[command(version = "1.0.0")]
#[command(about = "A canonical-link harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Run only the harvest phase, leaving the queue for a later run
    #[arg(long, conflicts_with = "resolve_only")]
    harvest_only: bool,

    /// Skip harvesting and resolve whatever the queue already holds
    #[arg(long, conflicts_with = "harvest_only")]
    resolve_only: bool,

    /// Validate config and show what would run without fetching anything
    #[arg(long, conflicts_with_all = ["harvest_only", "resolve_only"])]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load and validate configuration before anything else; config errors
    // are the one failure class that predates the log file
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    // Errors persist in the configured log file; progress goes to stdout
    setup_logging(&config.output.log_path, cli.verbose, cli.quiet)
        .with_context(|| format!("Failed to open log file {}", config.output.log_path))?;

    tracing::info!("Configuration loaded from: {}", cli.config.display());

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    run_pipeline(&config, cli.harvest_only, cli.resolve_only).await;

    Ok(())
}

/// Sets up the tracing subscriber writing to the persistent log file
fn setup_logging(log_path: &str, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let filter = if quiet {
        // Only record errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkweir=info,warn"),
            1 => EnvFilter::new("linkweir=debug,info"),
            2 => EnvFilter::new("linkweir=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    if let Some(parent) = std::path::Path::new(log_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .init();

    Ok(())
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &linkweir::config::Config) {
    println!("=== Linkweir Dry Run ===\n");

    println!("Harvest:");
    println!("  Anchor prefix: {}", config.harvest.base_prefix);
    println!("  Page template: {}<n>", config.harvest.page_template);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Queue file: {}", config.output.queue_path);
    println!("  Canonical file: {}", config.output.canonical_path);
    println!("  Log file: {}", config.output.log_path);

    println!("\n✓ Configuration is valid");
}

/// Runs harvest then resolve, honoring the phase-selection flags
///
/// A harvest failure does not stop the resolve phase: whatever was queued
/// before the abort is still valid work, and resolving it is exactly what a
/// rerun would do anyway. Failures land in the log; the process itself
/// exits zero either way.
async fn run_pipeline(config: &linkweir::config::Config, harvest_only: bool, resolve_only: bool) {
    let client = match build_http_client(&config.user_agent) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    let mut queue = match CsvQueue::open(&config.output.queue_path) {
        Ok(queue) => queue,
        Err(e) => {
            tracing::error!("Failed to open queue file: {}", e);
            return;
        }
    };

    if !resolve_only {
        println!("Starting initial URL harvest...");
        match harvest(&client, &config.harvest, &mut queue).await {
            Ok(summary) => {
                println!(
                    "Harvest complete: {} links queued over {} pages.",
                    summary.links_queued, summary.pages_fetched
                );
            }
            Err(e) => {
                tracing::error!("Harvest aborted: {}", e);
                println!("Harvest aborted; queued links are preserved. See log for details.");
            }
        }
    }

    if harvest_only {
        return;
    }

    let mut output = match CsvOutput::open(&config.output.canonical_path) {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("Failed to open canonical output file: {}", e);
            return;
        }
    };

    println!("Starting to resolve canonical URLs...");
    match resolve(&client, &mut queue, &mut output).await {
        Ok(summary) => {
            println!(
                "Canonical URL resolution completed: {} resolved in {} passes.",
                summary.resolved, summary.passes
            );
        }
        Err(e) => {
            tracing::error!("Resolve phase failed: {}", e);
            println!("Resolve phase failed; pending links remain queued. See log for details.");
        }
    }
}
