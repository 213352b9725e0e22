//! # Core Type Definitions
//!
//! This module contains all value types for the NumenCoach numerology engine:
//! - Input records (`Profile`, `LetterSystem`)
//! - Per-number output (`NumberResult`, `Intermediate`)
//! - The aggregate output (`ResultsBundle`) and its extended parts
//! - Name Tuner output (`NameSuggestion`)
//! - Persisted record (`ProfileSnapshot`)
//! - Error types (`NumerologyError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Use `BTreeMap` for keyed data so serialization order is stable
//! - Are plain values: no shared state, no interior mutability

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::date::BirthDate;
use crate::normalize::normalize_name;

// =============================================================================
// LETTER SYSTEM
// =============================================================================

/// The letter-to-number table a profile is evaluated with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LetterSystem {
    /// Chaldean values 1-8 over irregular letter groups.
    #[default]
    Chaldean,
    /// Pythagorean values 1-9 cycling through the alphabet.
    Pythagorean,
}

impl LetterSystem {
    /// Lower-case name of the system, as used on the wire and in config files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterSystem::Chaldean => "chaldean",
            LetterSystem::Pythagorean => "pythagorean",
        }
    }
}

impl std::fmt::Display for LetterSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LetterSystem {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chaldean" => Ok(LetterSystem::Chaldean),
            "pythagorean" => Ok(LetterSystem::Pythagorean),
            other => Err(NumerologyError::UnknownSystem(other.to_string())),
        }
    }
}

// =============================================================================
// PROFILE
// =============================================================================

fn default_preserve_masters() -> bool {
    true
}

/// The raw input to a calculation.
///
/// The engine never validates a profile itself; callers at the boundary
/// use [`Profile::validate`] before handing it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name as typed, accents and punctuation included.
    #[serde(alias = "fullName")]
    pub full_name: String,
    /// Date of birth as `DD/MM/YYYY`.
    pub dob: String,
    /// Letter table to use for name numbers.
    #[serde(default)]
    pub system: LetterSystem,
    /// Keep 11, 22 and 33 unreduced.
    #[serde(alias = "preserveMasters", default = "default_preserve_masters")]
    pub preserve_masters: bool,
}

impl Profile {
    /// Create a new profile.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        dob: impl Into<String>,
        system: LetterSystem,
        preserve_masters: bool,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            dob: dob.into(),
            system,
            preserve_masters,
        }
    }

    /// Boundary validation.
    ///
    /// - `dob` must split into three numeric components forming a real calendar date
    /// - the name must keep at least one letter after normalization
    pub fn validate(&self) -> Result<(), NumerologyError> {
        let date = BirthDate::parse(&self.dob)?;
        if !date.is_calendar_date() {
            return Err(NumerologyError::MalformedDate(self.dob.clone()));
        }
        if normalize_name(&self.full_name).is_empty() {
            return Err(NumerologyError::EmptyName);
        }
        Ok(())
    }
}

// =============================================================================
// NUMBER RESULT
// =============================================================================

/// Digit trace kept for display and audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intermediate {
    /// The individual digits that were summed.
    pub digits: Vec<u32>,
    /// Their sum before reduction.
    pub sum: u32,
}

/// A reduced number together with its pre-reduction trace.
///
/// Invariant: reducing `raw` (or the sum of `intermediate.digits`) with the
/// same master policy yields `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberResult {
    /// Final value: 1-9, or 11/22/33 when masters are preserved. 0 for empty input.
    pub value: u32,
    /// Sum before reduction.
    pub raw: Option<u32>,
    /// Digit-level trace, for date-derived numbers.
    pub intermediate: Option<Intermediate>,
}

impl NumberResult {
    /// A result that only carries its raw sum.
    #[must_use]
    pub const fn with_raw(value: u32, raw: u32) -> Self {
        Self {
            value,
            raw: Some(raw),
            intermediate: None,
        }
    }

    /// A result carrying the full digit trace.
    #[must_use]
    pub fn with_intermediate(value: u32, digits: Vec<u32>, sum: u32) -> Self {
        Self {
            value,
            raw: Some(sum),
            intermediate: Some(Intermediate { digits, sum }),
        }
    }
}

// =============================================================================
// LO-SHU GRID
// =============================================================================

/// Frequency of digits 1-9 in a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoShuGrid {
    /// Digit (1-9) to occurrence count. Always has all nine keys.
    pub counts: BTreeMap<u32, u32>,
    /// Digits whose count is zero, ascending.
    pub missing: Vec<u32>,
}

impl LoShuGrid {
    /// Count for a digit, 0 for anything outside 1-9.
    #[must_use]
    pub fn count(&self, digit: u32) -> u32 {
        self.counts.get(&digit).copied().unwrap_or(0)
    }

    /// The grid in the traditional 3x3 layout (4 9 2 / 3 5 7 / 8 1 6).
    #[must_use]
    pub fn rows(&self) -> [[(u32, u32); 3]; 3] {
        const LAYOUT: [[u32; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];
        LAYOUT.map(|row| row.map(|digit| (digit, self.count(digit))))
    }
}

// =============================================================================
// PINNACLES & CHALLENGES
// =============================================================================

/// Fixed life-stage label attached to each pinnacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    #[serde(rename = "Birth to 27")]
    BirthTo27,
    #[serde(rename = "28-36")]
    From28To36,
    #[serde(rename = "37-45")]
    From37To45,
    #[serde(rename = "46 onwards")]
    From46Onwards,
}

impl LifeStage {
    /// Display label for the age range.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            LifeStage::BirthTo27 => "Birth to 27",
            LifeStage::From28To36 => "28-36",
            LifeStage::From37To45 => "37-45",
            LifeStage::From46Onwards => "46 onwards",
        }
    }
}

impl std::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One pinnacle value and the life stage it governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pinnacle {
    pub value: u32,
    pub ages: LifeStage,
}

/// The four pinnacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pinnacles {
    pub first: Pinnacle,
    pub second: Pinnacle,
    pub third: Pinnacle,
    pub fourth: Pinnacle,
}

/// The four challenges. Absolute differences, never reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenges {
    pub first: u32,
    pub second: u32,
    pub third: u32,
    pub fourth: u32,
}

// =============================================================================
// NAME-DERIVED EXTRAS
// =============================================================================

/// Most frequent letter value in a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenPassion {
    pub value: u32,
    pub count: u32,
}

/// Which number a karmic debt was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KarmicSource {
    LifePath,
    Expression,
    SoulUrge,
    Personality,
}

impl KarmicSource {
    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            KarmicSource::LifePath => "Life Path",
            KarmicSource::Expression => "Expression",
            KarmicSource::SoulUrge => "Soul Urge",
            KarmicSource::Personality => "Personality",
        }
    }
}

/// A raw sum equal to 13, 14, 16 or 19.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarmicDebt {
    #[serde(rename = "type")]
    pub source: KarmicSource,
    pub number: u32,
}

// =============================================================================
// RESULTS BUNDLE
// =============================================================================

/// Everything derived from one profile at one evaluation instant.
///
/// Built once by `calculate_all_numbers`; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsBundle {
    pub life_path: NumberResult,
    pub expression: NumberResult,
    pub soul_urge: NumberResult,
    pub personality: NumberResult,
    pub birthday: u32,
    pub maturity: u32,
    pub lo_shu: LoShuGrid,
    pub pinnacles: Pinnacles,
    pub challenges: Challenges,
    pub personal_year: u32,
    pub personal_month: u32,
    pub personal_day: u32,
    pub balance_number: u32,
    pub hidden_passion: HiddenPassion,
    pub subconscious_self: u32,
    pub karmic_debt: Vec<KarmicDebt>,
    pub calculated_at: DateTime<Utc>,
}

// =============================================================================
// NAME SUGGESTION
// =============================================================================

/// One Name Tuner candidate. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSuggestion {
    /// The mutated, normalized name.
    pub name: String,
    /// Expression value of the mutated name.
    pub new_expression: u32,
    /// `new_expression - baseline`.
    pub delta: i32,
    /// Description of the substitution, e.g. `First letter: A → B`.
    pub change: String,
}

// =============================================================================
// PROFILE SNAPSHOT
// =============================================================================

/// The last calculated profile, as kept by the local cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub profile: Profile,
    pub results: ResultsBundle,
    pub saved_at: DateTime<Utc>,
}

impl ProfileSnapshot {
    /// Create a new snapshot.
    #[must_use]
    pub fn new(profile: Profile, results: ResultsBundle, saved_at: DateTime<Utc>) -> Self {
        Self {
            profile,
            results,
            saved_at,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the NumenCoach engine.
///
/// - No silent failures
/// - The engine never catches its own errors; they surface to the caller
#[derive(Debug, Error)]
pub enum NumerologyError {
    /// The date of birth does not split into three numeric components.
    #[error("Malformed date of birth: {0:?} (expected DD/MM/YYYY)")]
    MalformedDate(String),

    /// The name has no Latin letters left after normalization.
    #[error("Name contains no Latin letters")]
    EmptyName,

    /// The letter system name is not recognised.
    #[error("Unknown letter system: {0:?}")]
    UnknownSystem(String),

    /// A request field is out of bounds or unparseable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
