//! Wiki Time Travel main entry point
//!
//! Command-line front end: the URL argument plays the active tab, the
//! terminal plays the popup, and the navigation target is printed.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use wiki_time_travel::config::{load_config_with_hash, Config};
use wiki_time_travel::dates::{format_long_date, DateBound};
use wiki_time_travel::url::{classify_with, page_language_with};
use wiki_time_travel::{PopupView, RevisionClient, Session, TabPort};
use tracing_subscriber::EnvFilter;

/// Wiki Time Travel: open an article as it was at the end of a given day
///
/// Given the URL of a Wikipedia article, shows when the page was created and,
/// with --date, prints the URL of the revision that was current at the end of
/// that day (UTC).
#[derive(Parser, Debug)]
#[command(name = "wiki-time-travel")]
#[command(version)]
#[command(about = "Open a wiki article as it was on a given date", long_about = None)]
struct Cli {
    /// Article URL (e.g. https://en.wikipedia.org/wiki/Earth)
    #[arg(value_name = "URL")]
    url: String,

    /// Date to travel to (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE", conflicts_with = "classify")]
    date: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Only classify the URL; no network requests
    #[arg(long)]
    classify: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if cli.classify {
        handle_classify(&cli.url, &config);
        return Ok(());
    }

    let client = RevisionClient::new(&config).context("failed to build HTTP client")?;
    let tab = ArgumentTab {
        url: cli.url.clone(),
    };
    let mut session = Session::new(client, tab, TerminalView);

    let state = session.load().await?;
    if !state.accepts_action() {
        return Ok(());
    }

    let Some(input) = cli.date else {
        return Ok(());
    };

    session.select_date(&input);
    let target = session.travel().await?;
    println!("{}", target);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wiki_time_travel=info,warn"),
            1 => EnvFilter::new("wiki_time_travel=debug,info"),
            2 => EnvFilter::new("wiki_time_travel=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --classify: shows the URL shape without touching the network
fn handle_classify(url: &str, config: &Config) {
    let shape = classify_with(url, &config.site);
    println!("Shape: {}", shape.label());
    if shape.is_page() {
        if let Some(language) = page_language_with(url, &config.site) {
            println!("Language: {}", language);
        }
    }
}

/// The URL given on the command line stands in for the browser tab
struct ArgumentTab {
    url: String,
}

impl TabPort for ArgumentTab {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn navigate(&mut self, url: &str) {
        tracing::debug!("navigation target: {}", url);
    }
}

/// Renders popup output to the terminal
struct TerminalView;

impl PopupView for TerminalView {
    fn show_not_a_page(&mut self) {
        println!("Not a Wikipedia article.");
    }

    fn show_page(&mut self, title: &str, creation_text: &str, bound: &DateBound) {
        println!("{}", title);
        println!("{}", creation_text);
        println!(
            "Valid dates: {} to {}",
            format_long_date(bound.min_date()),
            format_long_date(bound.max_date())
        );
    }

    fn set_action_enabled(&mut self, enabled: bool) {
        tracing::debug!(enabled, "action control");
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("Error: {}", message);
    }
}
