//! Folio scraper entry point
//!
//! Loads configuration, applies command-line overrides and serves
//! `POST /scrape`.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use folio_scraper::config::{load_config_with_hash, validate, Config, ScrapeMode};
use folio_scraper::server::serve;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Folio: fetches an index page and extracts the text of every document it links to
#[derive(Parser, Debug)]
#[command(name = "folio-scraper")]
#[command(version)]
#[command(about = "Index-and-document scraping server", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Variant served by POST /scrape
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config, print the effective settings and exit
    #[arg(long)]
    check_config: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Index,
    Single,
}

impl From<ModeArg> for ScrapeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Index => ScrapeMode::Index,
            ModeArg::Single => ScrapeMode::Single,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    apply_overrides(&mut config, &cli);
    validate(&config).context("invalid configuration")?;

    if cli.check_config {
        print_config(&config);
        return Ok(());
    }

    serve(&config).await.context("server failed")?;
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(mode) = cli.mode {
        config.server.mode = mode.into();
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("folio_scraper=info,warn"),
            1 => EnvFilter::new("folio_scraper=debug,tower_http=debug,info"),
            2 => EnvFilter::new("folio_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --check-config: shows the settings the server would run with
fn print_config(config: &Config) {
    println!("=== Folio Scraper Configuration ===\n");

    println!("Server:");
    println!("  Listen: {}:{}", config.server.host, config.server.port);
    println!("  Mode: {:?}", config.server.mode);

    println!("\nHTTP client:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);

    println!("\nIndex variant:");
    println!("  Link selector: {}", config.index.link_selector);
    println!("  Content selector: {}", config.index.content_selector);
    println!("  Heading selector: {}", config.index.heading_selector);
    println!("  Path marker: {}", config.index.path_marker);
    println!("  Title suffix pattern: {}", config.index.title_suffix_pattern);
    println!("  Untitled fallback: {}", config.index.untitled_fallback);
    println!("  Collapse whitespace: {}", config.index.collapse_whitespace);
    match config.index.max_concurrent_fetches {
        Some(limit) => println!("  Max concurrent fetches: {}", limit),
        None => println!("  Max concurrent fetches: unbounded"),
    }

    println!("\nSingle variant:");
    println!("  Base URL: {}", config.single.base_url);
    println!("  Source label: {}", config.single.source_label);

    println!("\n✓ Configuration is valid");
}
