//! CLI tool for inspecting shortener statistics without the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List target URLs and the colors of their short URLs
//! cargo run --bin stats -- targets
//!
//! # Print chart data for a target (target only)
//! cargo run --bin stats -- charts https://example.com
//!
//! # Chart two short URLs without the total line
//! cargo run --bin stats -- charts https://example.com --child ex1 --child ex2 --no-total
//! ```
//!
//! # Environment Variables
//!
//! Same upstream settings as the server (`UPSTREAM_URL`, `URL_LIST_PATH`,
//! `METRICS_PATH`, `UPSTREAM_TIMEOUT_SECONDS`). `--upstream` overrides
//! `UPSTREAM_URL`.

use url_shortener_stats::api::dto::charts::ChartsResponse;
use url_shortener_stats::application::services::{metrics_processor, selection};
use url_shortener_stats::config::Config;
use url_shortener_stats::domain::entities::{TargetUrl, UrlEntity};
use url_shortener_stats::domain::repositories::MetricsSource;
use url_shortener_stats::infrastructure::http::HttpMetricsSource;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for shortener statistics.
#[derive(Parser)]
#[command(name = "stats")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the shortener API
    #[arg(long, global = true, env = "UPSTREAM_URL")]
    upstream: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List target URLs and their short URLs
    Targets,

    /// Load statistics for a target and print chart data as JSON
    Charts {
        /// Target URL, as listed by `stats targets`
        target: String,

        /// Short URL to include (repeatable)
        #[arg(short, long = "child")]
        children: Vec<String>,

        /// Include every short URL
        #[arg(short, long, conflicts_with = "children")]
        all: bool,

        /// Leave out the total line of the target
        #[arg(long)]
        no_total: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()
        .or_else(|e| match &cli.upstream {
            Some(_) => Ok(fallback_config()),
            None => Err(e),
        })
        .context("Upstream is not configured (set UPSTREAM_URL or pass --upstream)")?;
    if let Some(upstream) = cli.upstream {
        config.upstream_url = upstream;
    }
    config.validate()?;

    let source = HttpMetricsSource::new(&config.upstream_settings())
        .context("Failed to create upstream client")?;

    match cli.command {
        Commands::Targets => list_targets(&source).await?,
        Commands::Charts {
            target,
            children,
            all,
            no_total,
        } => print_charts(&source, &target, &children, all, no_total).await?,
    }

    Ok(())
}

/// Configuration with defaults, used when only `--upstream` is given.
fn fallback_config() -> Config {
    Config {
        upstream_url: String::new(),
        url_list_path: "api/v2/url_list".to_string(),
        metrics_path: "api/v2/metrics".to_string(),
        upstream_timeout_seconds: 10,
        listen_addr: "0.0.0.0:3000".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

async fn load_targets(source: &dyn MetricsSource) -> Result<Vec<TargetUrl>> {
    let entries = source
        .fetch_url_list()
        .await
        .context("Failed to load URL list")?;

    Ok(entries
        .into_iter()
        .map(|(target, children)| TargetUrl::new(target, children))
        .collect())
}

/// Prints every target with its short URLs, each in its display color.
async fn list_targets(source: &dyn MetricsSource) -> Result<()> {
    let targets = load_targets(source).await?;

    println!("{}", "Target URLs".bright_blue().bold());
    println!();

    if targets.is_empty() {
        println!("{}", "No target URLs found".yellow());
        return Ok(());
    }

    for target in &targets {
        println!("{}", target.identifier().bright_white().bold());

        if target.children().is_empty() {
            println!("  {}", "(no short URLs)".dimmed());
        }

        for child in target.children() {
            let swatch = match hex_to_rgb(child.color()) {
                Some((r, g, b)) => "■".truecolor(r, g, b),
                None => "■".normal(),
            };
            println!("  {} {} {}", swatch, child.identifier().cyan(), child.color().dimmed());
        }
    }

    println!();
    println!("Total: {}", targets.len().to_string().green());

    Ok(())
}

/// Loads statistics for `target`, applies the requested selection and
/// prints both charts as JSON.
async fn print_charts(
    source: &dyn MetricsSource,
    target: &str,
    children: &[String],
    all: bool,
    no_total: bool,
) -> Result<()> {
    let mut target_url = load_targets(source)
        .await?
        .into_iter()
        .find(|t| t.identifier() == target)
        .with_context(|| format!("Target URL '{}' not found", target))?;

    target_url
        .load_statistics(source)
        .await
        .with_context(|| format!("Failed to load statistics for '{}'", target))?;

    selection::reset(&mut target_url);
    if all {
        selection::toggle_all(&mut target_url, true);
    }
    for child in children {
        selection::toggle_child(&mut target_url, child, true)?;
    }
    target_url.set_selected(!no_total);

    let charts = metrics_processor::build_charts(&target_url);

    eprintln!(
        "{} {} ({} of {} short URLs selected)",
        "Charts for".bright_blue(),
        target.bright_white().bold(),
        target_url.selected_children().len(),
        target_url.children().len()
    );

    let json = serde_json::to_string_pretty(&ChartsResponse::from(charts))
        .context("Failed to serialize charts")?;
    println!("{}", json);

    Ok(())
}

/// Parses `#rrggbb`.
fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}
