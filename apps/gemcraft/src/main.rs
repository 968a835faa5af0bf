//! # Gemcraft
//!
//! The command-line front-end for the gemcraft fusion engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │           apps/gemcraft (THE BINARY)         │
//! │                                              │
//! │  ┌─────────────┐        ┌────────────────┐   │
//! │  │    CLI      │        │  Config (toml) │   │
//! │  │   (clap)    │        │                │   │
//! │  └──────┬──────┘        └───────┬────────┘   │
//! │         └───────────┬───────────┘            │
//! │                     ▼                        │
//! │             ┌───────────────┐                │
//! │             │ gemcraft-core │                │
//! │             │  (THE ENGINE) │                │
//! │             └───────────────┘                │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! gemcraft eval "(k+k)+(k+k)" --show-all
//! gemcraft eval --file recipes/kill16.txt --json-mode
//! gemcraft flatten "(o+o)+o"
//! gemcraft colors
//! ```

use clap::Parser;
use gemcraft::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing — GEMCRAFT_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr so stdout stays clean for reports.
    let log_format = std::env::var("GEMCRAFT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "gemcraft=debug"
    } else {
        "gemcraft=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the gemcraft startup banner.
fn print_banner() {
    eprintln!(
        "gemcraft v{} - gem fusion calculator\n",
        env!("CARGO_PKG_VERSION")
    );
}
