//! # NumenCoach
//!
//! The main binary for the NumenCoach numerology engine.
//!
//! This application provides:
//! - CLI interface for calculations, name tuning and compatibility
//! - HTTP JSON API server (axum-based)
//! - A local cache of the last calculated profile
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              apps/numencoach (THE BINARY)            │
//! │                                                      │
//! │   ┌─────────────┐    ┌─────────────┐    ┌────────┐   │
//! │   │    CLI      │    │  HTTP API   │    │ config │   │
//! │   │   (clap)    │    │   (axum)    │    │ (toml) │   │
//! │   └──────┬──────┘    └──────┬──────┘    └────────┘   │
//! │          └────────┬─────────┘                        │
//! │                   ▼                                  │
//! │          ┌─────────────────┐                         │
//! │          │ numencoach-core │                         │
//! │          │   (THE LOGIC)   │                         │
//! │          └─────────────────┘                         │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! numencoach calculate -n "Aryan Raj" -d 07/09/2003 --save
//! numencoach tune -n "Aryan Raj" -s pythagorean
//! numencoach compat --name-a Aryan --dob-a 07/09/2003 --name-b Maya --dob-b 23/04/1991
//! numencoach meaning 22
//! numencoach server --port 8080
//! ```

use clap::Parser;
use numencoach::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // NUMENCOACH_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr so --json-mode output on stdout stays clean.
    let log_format =
        std::env::var("NUMENCOACH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "numencoach=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the NumenCoach startup banner.
fn print_banner() {
    println!(
        r#"
  NumenCoach v{}

  Chaldean • Pythagorean • Deterministic
"#,
        env!("CARGO_PKG_VERSION")
    );
}
