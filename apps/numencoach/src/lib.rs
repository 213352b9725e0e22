//! # numencoach
//!
//! Application layer for the NumenCoach engine: the CLI, the HTTP API and
//! the configuration file. Exposed as a library so integration tests can
//! build routers and configs directly.

pub mod api;
pub mod cli;
pub mod config;

use chrono::{DateTime, Utc};
use numencoach_core::{NumerologyError, instant_from_iso_date};

/// The evaluation instant for a request: the given `YYYY-MM-DD` date at
/// midnight UTC, or the current time.
pub fn evaluation_instant(at: Option<&str>) -> Result<DateTime<Utc>, NumerologyError> {
    Ok(match at {
        Some(date) => instant_from_iso_date(date)?,
        None => Utc::now(),
    })
}
