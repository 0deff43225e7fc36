// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! lodewatch CLI - FINAL FANTASY XIV world status from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Show all worlds, grouped by data center
//! lodewatch
//!
//! # Only one data center
//! lodewatch --group Chaos
//!
//! # JSON output
//! lodewatch --format json --pretty
//!
//! # Query a different regional Lodestone
//! lodewatch --base-url https://na.finalfantasyxiv.com
//! ```

mod output;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use lodewatch_lodestone::{LodestoneClient, LodestoneConfig, DEFAULT_BASE_URL};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

use output::{json, text};

// ============================================================================
// CLI Definition
// ============================================================================

/// lodewatch CLI - FFXIV world status.
#[derive(Parser)]
#[command(name = "lodewatch")]
#[command(about = "FINAL FANTASY XIV world status CLI")]
#[command(long_about = r#"
lodewatch fetches the Lodestone world status page and prints the current
state of every world: data center, category, online/maintenance status, and
whether new characters can be created.

Examples:
  lodewatch                      # All worlds, grouped by data center
  lodewatch --group Chaos        # One data center
  lodewatch --format json        # JSON output for scripting
"#)]
#[command(version)]
pub struct Cli {
    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Only show worlds in the given data-center group.
    #[arg(long, short)]
    pub group: Option<String>,

    /// Lodestone base URL to query.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Verbose output (show debug info).
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("lodewatch_fetch=debug,lodewatch_lodestone=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn run(cli: &Cli) -> Result<()> {
    let config = LodestoneConfig {
        base_url: cli.base_url.clone(),
        ..LodestoneConfig::default()
    };

    let client = LodestoneClient::with_config(config)?;
    let mut worlds = client.world_status()?;

    if worlds.is_empty() {
        // A valid but empty result usually means the page structure changed.
        warn!("No worlds extracted from the status page");
    }

    if let Some(group) = &cli.group {
        worlds.retain(|w| w.group.eq_ignore_ascii_case(group));
    }

    match cli.format {
        OutputFormat::Text => {
            let formatter = text::TextFormatter::new(!cli.no_color);
            print!("{}", formatter.format_worlds(&worlds));
        }
        OutputFormat::Json => {
            println!("{}", json::render(&worlds, cli.pretty)?);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }

    Ok(())
}
