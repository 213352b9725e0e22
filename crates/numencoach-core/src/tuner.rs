//! # Name Tuner
//!
//! A bounded local search for name spellings with a different Expression.
//!
//! The search applies one operator, "substitute the letter at a position",
//! over a fixed set of positions and a fixed replacement alphabet:
//!
//! - Default positions: first and last character (last only when the
//!   normalized name has more than one character)
//! - Default alphabet: `A`, `B`, `C`; a replacement equal to the current
//!   letter is skipped
//! - Candidates with an unchanged Expression are dropped
//! - Survivors are stably sorted by descending `|delta|` and capped
//!
//! With the defaults there are at most 6 candidates. This samples nearby
//! spellings; it does not find the closest achievable Expression.

use serde::{Deserialize, Serialize};

use crate::core_numbers::compute_name_numbers;
use crate::normalize::normalize_name;
use crate::primitives::{TUNER_ALPHABET, TUNER_MAX_SUGGESTIONS};
use crate::{LetterSystem, NameSuggestion};

/// Where the substitution operator is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationPosition {
    First,
    Last,
}

impl MutationPosition {
    fn label(&self) -> &'static str {
        match self {
            MutationPosition::First => "First letter",
            MutationPosition::Last => "Last letter",
        }
    }

    /// Byte index in a normalized (ASCII) name, if the position applies.
    fn index(&self, name: &str) -> Option<usize> {
        match self {
            MutationPosition::First if !name.is_empty() => Some(0),
            MutationPosition::Last if name.len() > 1 => Some(name.len() - 1),
            _ => None,
        }
    }
}

/// Search bounds for the tuner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunerConfig {
    /// Positions to mutate, in search order.
    pub positions: Vec<MutationPosition>,
    /// Replacement letters, in search order. Non-letters are ignored.
    pub alphabet: String,
    /// Maximum number of suggestions returned.
    pub max_suggestions: usize,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            positions: vec![MutationPosition::First, MutationPosition::Last],
            alphabet: TUNER_ALPHABET.to_string(),
            max_suggestions: TUNER_MAX_SUGGESTIONS,
        }
    }
}

/// Name Tuner bound to a letter system and master policy.
#[derive(Debug, Clone)]
pub struct NameTuner {
    system: LetterSystem,
    preserve_masters: bool,
    config: TunerConfig,
}

impl NameTuner {
    /// Tuner with the default search bounds.
    #[must_use]
    pub fn new(system: LetterSystem, preserve_masters: bool) -> Self {
        Self::with_config(system, preserve_masters, TunerConfig::default())
    }

    /// Tuner with custom search bounds.
    #[must_use]
    pub fn with_config(system: LetterSystem, preserve_masters: bool, config: TunerConfig) -> Self {
        Self {
            system,
            preserve_masters,
            config,
        }
    }

    /// The search bounds in use.
    #[must_use]
    pub fn config(&self) -> &TunerConfig {
        &self.config
    }

    fn expression_of(&self, name: &str) -> u32 {
        compute_name_numbers(name, self.system, self.preserve_masters)
            .expression
            .value
    }

    /// Suggestions for `full_name`, best first.
    #[must_use]
    pub fn suggest(&self, full_name: &str) -> Vec<NameSuggestion> {
        let normalized = normalize_name(full_name);
        let baseline = self.expression_of(&normalized);
        let replacements: Vec<char> = self
            .config
            .alphabet
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let mut suggestions = Vec::new();
        for position in &self.config.positions {
            let Some(index) = position.index(&normalized) else {
                continue;
            };
            let original = char::from(normalized.as_bytes()[index]);

            for &letter in &replacements {
                if letter == original {
                    continue;
                }
                let mut candidate = normalized.clone();
                candidate.replace_range(index..=index, letter.encode_utf8(&mut [0; 4]));

                let new_expression = self.expression_of(&candidate);
                let delta = new_expression as i32 - baseline as i32;
                if delta != 0 {
                    suggestions.push(NameSuggestion {
                        name: candidate,
                        new_expression,
                        delta,
                        change: format!("{}: {} → {}", position.label(), original, letter),
                    });
                }
            }
        }

        suggestions.sort_by_key(|s| std::cmp::Reverse(s.delta.unsigned_abs()));
        suggestions.truncate(self.config.max_suggestions);
        suggestions
    }
}

/// Default-bounded suggestions for `full_name`.
#[must_use]
pub fn generate_name_suggestions(
    full_name: &str,
    system: LetterSystem,
    preserve_masters: bool,
) -> Vec<NameSuggestion> {
    NameTuner::new(system, preserve_masters).suggest(full_name)
}

// =============================================================================
// TESTS
// =============================================================================
