//! # Application Configuration
//!
//! `numencoach.toml`, parsed with serde + toml:
//!
//! ```toml
//! [defaults]
//! system = "chaldean"
//! preserve_masters = true
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! rate_limit = 100
//! cors_origins = []
//!
//! [cache]
//! path = "numencoach.redb"
//! ```
//!
//! Every key is optional. A missing file yields the defaults above; a
//! malformed file is an error.
//!
//! ## Environment Overrides
//!
//! - `NUMENCOACH_RATE_LIMIT`: Requests per second (0 disables)
//! - `NUMENCOACH_CORS_ORIGINS`: Comma-separated origins, or "*" for all

use numencoach_core::{LetterSystem, NumerologyError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "numencoach.toml";

const RATE_LIMIT_ENV: &str = "NUMENCOACH_RATE_LIMIT";
const CORS_ORIGINS_ENV: &str = "NUMENCOACH_CORS_ORIGINS";

// =============================================================================
// SECTIONS
// =============================================================================

/// Profile settings applied when a request or command leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileDefaults {
    pub system: LetterSystem,
    pub preserve_masters: bool,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            system: LetterSystem::Chaldean,
            preserve_masters: true,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests per second across all clients. 0 disables limiting.
    pub rate_limit: u32,
    /// Allowed CORS origins. Empty means localhost only; `["*"]` allows all.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rate_limit: 100,
            cors_origins: Vec::new(),
        }
    }
}

/// Profile cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("numencoach.redb"),
        }
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub defaults: ProfileDefaults,
    pub server: ServerConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, NumerologyError> {
        toml::from_str(source).map_err(|e| NumerologyError::DeserializationError(e.to_string()))
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, NumerologyError> {
        if !path.exists() {
            tracing::debug!("Config {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let source = std::fs::read_to_string(path).map_err(|e| {
            NumerologyError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply `NUMENCOACH_RATE_LIMIT` and `NUMENCOACH_CORS_ORIGINS`.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(RATE_LIMIT_ENV).ok().as_deref(),
            std::env::var(CORS_ORIGINS_ENV).ok().as_deref(),
        )
    }

    /// Apply override values as they would appear in the environment.
    ///
    /// An unparseable rate limit is ignored with a warning.
    #[must_use]
    pub fn with_overrides(mut self, rate_limit: Option<&str>, cors_origins: Option<&str>) -> Self {
        if let Some(raw) = rate_limit {
            match raw.trim().parse::<u32>() {
                Ok(rps) => self.server.rate_limit = rps,
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", RATE_LIMIT_ENV, raw, e),
            }
        }
        if let Some(raw) = cors_origins {
            self.server.cors_origins = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
