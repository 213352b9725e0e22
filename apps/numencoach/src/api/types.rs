//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Request fields accept both `snake_case` and camelCase spellings
//! (`fullName`, `preserveMasters`).

use crate::config::ProfileDefaults;
use numencoach_core::{
    CoachingText, CompatibilityReport, LetterSystem, NameSuggestion, NumerologyError, Profile,
    ProfileSnapshot, ResultsBundle, meanings,
    primitives::{MAX_NAME_LENGTH, MAX_TUNER_ALPHABET, MAX_TUNER_SUGGESTIONS},
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// PROFILE INPUT
// =============================================================================

/// A profile as submitted by a client. Unset fields take the server defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(alias = "fullName")]
    pub full_name: String,
    pub dob: String,
    #[serde(default)]
    pub system: Option<LetterSystem>,
    #[serde(default, alias = "preserveMasters")]
    pub preserve_masters: Option<bool>,
}

impl ProfileInput {
    /// Build and validate the profile.
    ///
    /// Rejects names over `MAX_NAME_LENGTH` bytes before normalization,
    /// then applies [`Profile::validate`].
    pub fn to_profile(&self, defaults: &ProfileDefaults) -> Result<Profile, NumerologyError> {
        if self.full_name.len() > MAX_NAME_LENGTH {
            return Err(NumerologyError::InvalidInput(format!(
                "Name length {} exceeds maximum {} bytes",
                self.full_name.len(),
                MAX_NAME_LENGTH
            )));
        }

        let profile = Profile::new(
            self.full_name.clone(),
            self.dob.clone(),
            self.system.unwrap_or(defaults.system),
            self.preserve_masters.unwrap_or(defaults.preserve_masters),
        );
        profile.validate()?;
        Ok(profile)
    }
}

// =============================================================================
// CALCULATE
// =============================================================================

/// Full calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(flatten)]
    pub profile: ProfileInput,
    /// Evaluation date `YYYY-MM-DD`. Defaults to now.
    #[serde(default)]
    pub at: Option<String>,
    /// Store the result as the cached profile.
    #[serde(default)]
    pub save: bool,
}

/// Full calculation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub results: Option<ResultsBundle>,
    pub coaching: Option<CoachingText>,
    #[serde(default)]
    pub saved: bool,
    pub error: Option<String>,
}

impl CalculateResponse {
    pub fn success(results: ResultsBundle, coaching: CoachingText, saved: bool) -> Self {
        Self {
            success: true,
            results: Some(results),
            coaching: Some(coaching),
            saved,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            results: None,
            coaching: None,
            saved: false,
            error: Some(message.into()),
        }
    }
}

// =============================================================================
// TUNE
// =============================================================================

/// Name Tuner request. `alphabet` and `max_suggestions` widen the search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuneRequest {
    #[serde(alias = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub system: Option<LetterSystem>,
    #[serde(default, alias = "preserveMasters")]
    pub preserve_masters: Option<bool>,
    #[serde(default)]
    pub alphabet: Option<String>,
    #[serde(default)]
    pub max_suggestions: Option<usize>,
}

impl TuneRequest {
    /// Check the request against the input limits.
    pub fn validate(&self) -> Result<(), NumerologyError> {
        if self.full_name.len() > MAX_NAME_LENGTH {
            return Err(NumerologyError::InvalidInput(format!(
                "Name length {} exceeds maximum {} bytes",
                self.full_name.len(),
                MAX_NAME_LENGTH
            )));
        }
        if let Some(alphabet) = &self.alphabet {
            if alphabet.is_empty()
                || alphabet.len() > MAX_TUNER_ALPHABET
                || !alphabet.bytes().all(|b| b.is_ascii_alphabetic())
            {
                return Err(NumerologyError::InvalidInput(format!(
                    "alphabet must be 1-{} ASCII letters",
                    MAX_TUNER_ALPHABET
                )));
            }
        }
        if let Some(max) = self.max_suggestions {
            if max == 0 || max > MAX_TUNER_SUGGESTIONS {
                return Err(NumerologyError::InvalidInput(format!(
                    "max_suggestions must be 1-{}",
                    MAX_TUNER_SUGGESTIONS
                )));
            }
        }
        Ok(())
    }
}

/// Name Tuner response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuneResponse {
    pub success: bool,
    pub baseline: Option<u32>,
    pub suggestions: Vec<NameSuggestion>,
    pub error: Option<String>,
}

impl TuneResponse {
    pub fn success(baseline: u32, suggestions: Vec<NameSuggestion>) -> Self {
        Self {
            success: true,
            baseline: Some(baseline),
            suggestions,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            baseline: None,
            suggestions: Vec::new(),
            error: Some(message.into()),
        }
    }
}

// =============================================================================
// COMPATIBILITY
// =============================================================================

/// Two profiles to compare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    pub a: ProfileInput,
    pub b: ProfileInput,
    #[serde(default)]
    pub at: Option<String>,
}

/// Compatibility response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    pub success: bool,
    pub report: Option<CompatibilityReport>,
    pub error: Option<String>,
}

impl CompatibilityResponse {
    pub fn success(report: CompatibilityReport) -> Self {
        Self {
            success: true,
            report: Some(report),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            report: None,
            error: Some(message.into()),
        }
    }
}

// =============================================================================
// MEANING
// =============================================================================

/// Karmic debt narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarmicDebtJson {
    pub summary: String,
    pub meaning: String,
    pub lesson: String,
}

/// Everything the narrative tables hold for one number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningResponse {
    pub number: u32,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub coaching: Vec<String>,
    pub lucky_day: Option<String>,
    pub lucky_color: Option<String>,
    pub pinnacle: Option<String>,
    pub challenge: Option<String>,
    pub karmic_debt: Option<KarmicDebtJson>,
}

impl MeaningResponse {
    /// Collect every table entry for `number`.
    pub fn lookup(number: u32) -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        let mut response = Self {
            number,
            lucky_day: meanings::lucky_day(number).map(str::to_string),
            lucky_color: meanings::lucky_color(number).map(str::to_string),
            pinnacle: meanings::pinnacle_meaning(number).map(str::to_string),
            challenge: meanings::challenge_meaning(number).map(str::to_string),
            karmic_debt: meanings::karmic_debt_meaning(number).map(|m| KarmicDebtJson {
                summary: m.summary.to_string(),
                meaning: m.meaning.to_string(),
                lesson: m.lesson.to_string(),
            }),
            ..Self::default()
        };
        if let Some(m) = meanings::number_meaning(number) {
            response.summary = Some(m.summary.to_string());
            response.strengths = owned(&m.strengths);
            response.weaknesses = owned(&m.weaknesses);
            response.coaching = owned(&m.coaching);
        }
        response
    }

    /// Whether any table had an entry.
    pub fn is_found(&self) -> bool {
        self.summary.is_some()
            || self.pinnacle.is_some()
            || self.challenge.is_some()
            || self.karmic_debt.is_some()
    }
}

// =============================================================================
// CACHED PROFILE
// =============================================================================

/// Cached profile response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub snapshot: Option<ProfileSnapshot>,
    pub error: Option<String>,
}

impl ProfileResponse {
    pub fn found(snapshot: ProfileSnapshot) -> Self {
        Self {
            success: true,
            snapshot: Some(snapshot),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            snapshot: None,
            error: Some(message.into()),
        }
    }
}

/// Cache clear response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearResponse {
    pub success: bool,
    pub cleared: bool,
    pub error: Option<String>,
}
