//! # Compatibility Comparator
//!
//! Runs the orchestrator on two profiles and scores Life Path, Expression
//! and Soul Urge: each pair contributes `max(0, 9 - |a - b|)`, for a total
//! of 0-27, reported as a rounded percentage.
//!
//! Integer arithmetic only. Rounding is half-up, matching `round(x)` for
//! the non-negative ratios involved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::calculate_all_numbers;
use crate::primitives::{COMPATIBILITY_COMPARISONS, COMPATIBILITY_MAX_SCORE};
use crate::{NumerologyError, Profile, ResultsBundle};

/// Fixed bands the percentage falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityBand {
    Excellent,
    Good,
    Moderate,
    Challenging,
}

impl CompatibilityBand {
    /// Band for a percentage.
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => CompatibilityBand::Excellent,
            60..=79 => CompatibilityBand::Good,
            40..=59 => CompatibilityBand::Moderate,
            _ => CompatibilityBand::Challenging,
        }
    }

    /// Static analysis text.
    #[must_use]
    pub fn analysis(&self) -> &'static str {
        match self {
            CompatibilityBand::Excellent => {
                "Excellent compatibility! You share similar life goals and values."
            }
            CompatibilityBand::Good => "Good compatibility with potential for growth together.",
            CompatibilityBand::Moderate => "Moderate compatibility. Communication will be key.",
            CompatibilityBand::Challenging => {
                "Challenging compatibility. Focus on understanding differences."
            }
        }
    }
}

/// Result of comparing two profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// 0-100.
    pub percentage: u8,
    /// Raw score, 0-27.
    pub score: u32,
    pub band: CompatibilityBand,
    pub analysis: String,
    pub results_a: ResultsBundle,
    pub results_b: ResultsBundle,
}

/// Similarity of two values on the 0-9 scale.
#[must_use]
pub fn pair_score(a: u32, b: u32) -> u32 {
    COMPATIBILITY_MAX_SCORE.saturating_sub(a.abs_diff(b))
}

/// Score two bundles: (raw score, rounded percentage).
#[must_use]
pub fn score_bundles(a: &ResultsBundle, b: &ResultsBundle) -> (u32, u8) {
    let score = pair_score(a.life_path.value, b.life_path.value)
        + pair_score(a.expression.value, b.expression.value)
        + pair_score(a.soul_urge.value, b.soul_urge.value);

    let total = COMPATIBILITY_MAX_SCORE * COMPATIBILITY_COMPARISONS;
    // round(score * 100 / total), half-up
    let percentage = (score * 200 + total) / (total * 2);
    (score, percentage.min(100) as u8)
}

/// Compare two profiles as of `at`.
pub fn calculate_compatibility(
    a: &Profile,
    b: &Profile,
    at: DateTime<Utc>,
) -> Result<CompatibilityReport, NumerologyError> {
    let results_a = calculate_all_numbers(a, at)?;
    let results_b = calculate_all_numbers(b, at)?;

    let (score, percentage) = score_bundles(&results_a, &results_b);
    let band = CompatibilityBand::from_percentage(percentage);

    Ok(CompatibilityReport {
        percentage,
        score,
        band,
        analysis: band.analysis().to_string(),
        results_a,
        results_b,
    })
}

// =============================================================================
// TESTS
// =============================================================================
