//! # NumenCoach CLI Module
//!
//! This module implements the CLI interface for NumenCoach.
//!
//! ## Available Commands
//!
//! - `calculate` - Full numerology profile for a name and date of birth
//! - `tune` - Suggest spellings with a different Expression
//! - `compat` - Compatibility of two profiles
//! - `meaning` - Narrative text for a number
//! - `cache show|clear` - Inspect or clear the cached profile
//! - `server` - Start the HTTP server

mod commands;

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use clap::{Args, Parser, Subcommand};
use numencoach_core::{LetterSystem, NumerologyError};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// NumenCoach - numerology profiles, name tuning and compatibility
///
/// Chaldean and Pythagorean letter systems, optional master-number
/// preservation, deterministic for a given evaluation date.
#[derive(Parser, Debug)]
#[command(name = "numencoach")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(short = 'c', long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Path to the profile cache database (overrides the config file)
    #[arg(short = 'C', long, global = true)]
    pub cache: Option<PathBuf>,

    /// Evaluation date, YYYY-MM-DD (default: now)
    #[arg(long, global = true)]
    pub at: Option<String>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Letter system and master policy; unset values come from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SystemArgs {
    /// Letter system (chaldean, pythagorean)
    #[arg(short, long)]
    pub system: Option<LetterSystem>,

    /// Keep 11, 22 and 33 unreduced (true, false)
    #[arg(long)]
    pub preserve_masters: Option<bool>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the full numerology profile
    Calculate {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Date of birth, DD/MM/YYYY
        #[arg(short, long)]
        dob: String,

        #[command(flatten)]
        system: SystemArgs,

        /// Store the result as the cached profile
        #[arg(long)]
        save: bool,
    },

    /// Suggest name spellings with a different Expression
    Tune {
        /// Full name
        #[arg(short, long)]
        name: String,

        #[command(flatten)]
        system: SystemArgs,

        /// Replacement letters to try (default: ABC)
        #[arg(long)]
        alphabet: Option<String>,

        /// Maximum suggestions (default: 3)
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Compare two profiles
    Compat {
        /// First full name
        #[arg(long)]
        name_a: String,

        /// First date of birth, DD/MM/YYYY
        #[arg(long)]
        dob_a: String,

        /// Second full name
        #[arg(long)]
        name_b: String,

        /// Second date of birth, DD/MM/YYYY
        #[arg(long)]
        dob_b: String,

        #[command(flatten)]
        system: SystemArgs,
    },

    /// Show the narrative text for a number
    Meaning {
        /// Number (1-9, 11, 22, 33; 0-8 for challenges; 13, 14, 16, 19 for karmic debt)
        number: u32,
    },

    /// Inspect or clear the cached profile
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Start HTTP server
    Server {
        /// Host to bind to (overrides the config file)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Cache subcommands.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum CacheAction {
    /// Print the cached profile
    Show,
    /// Remove the cached profile
    Clear,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), NumerologyError> {
    let config = AppConfig::load(&cli.config)?.with_env_overrides();
    let ctx = Context {
        cache_path: cli.cache.unwrap_or_else(|| config.cache.path.clone()),
        config,
        at: cli.at,
        json_mode: cli.json_mode,
        verbose: cli.verbose,
    };

    match cli.command {
        Some(Commands::Calculate {
            name,
            dob,
            system,
            save,
        }) => cmd_calculate(&ctx, &name, &dob, &system, save),
        Some(Commands::Tune {
            name,
            system,
            alphabet,
            max,
        }) => cmd_tune(&ctx, &name, &system, alphabet, max),
        Some(Commands::Compat {
            name_a,
            dob_a,
            name_b,
            dob_b,
            system,
        }) => cmd_compat(&ctx, (&name_a, &dob_a), (&name_b, &dob_b), &system),
        Some(Commands::Meaning { number }) => cmd_meaning(&ctx, number),
        Some(Commands::Cache { action }) => match action {
            CacheAction::Show => cmd_cache_show(&ctx),
            CacheAction::Clear => cmd_cache_clear(&ctx),
        },
        Some(Commands::Server { host, port }) => cmd_server(ctx, host, port).await,
        None => {
            // No subcommand - show the cached profile by default
            cmd_cache_show(&ctx)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_calculate() {
        let cli = Cli::try_parse_from([
            "numencoach",
            "--json-mode",
            "--at",
            "2026-10-19",
            "calculate",
            "-n",
            "Aryan Raj",
            "-d",
            "07/09/2003",
            "-s",
            "pythagorean",
            "--preserve-masters",
            "false",
            "--save",
        ])
        .expect("parse");

        assert!(cli.json_mode);
        assert_eq!(cli.at.as_deref(), Some("2026-10-19"));
        let Some(Commands::Calculate {
            name,
            dob,
            system,
            save,
        }) = cli.command
        else {
            panic!("expected calculate");
        };
        assert_eq!(name, "Aryan Raj");
        assert_eq!(dob, "07/09/2003");
        assert_eq!(system.system, Some(LetterSystem::Pythagorean));
        assert_eq!(system.preserve_masters, Some(false));
        assert!(save);
    }

    #[test]
    fn rejects_unknown_system() {
        let result = Cli::try_parse_from(["numencoach", "tune", "-n", "Aryan", "-s", "vedic"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_cache_clear() {
        let cli = Cli::try_parse_from(["numencoach", "cache", "clear"]).expect("parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Cache {
                action: CacheAction::Clear
            })
        ));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["numencoach", "-q"]).expect("parse");
        assert!(cli.quiet);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }
}
