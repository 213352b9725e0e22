//! # Core Number Calculators
//!
//! - **Life Path**: all digits of the birth date summed, then reduced
//! - **Expression / Soul Urge / Personality**: letter values of the whole
//!   name, its vowels, and its consonants
//! - **Birthday**: the day component, reduced
//! - **Maturity**: Life Path + Expression, reduced

use crate::date::{BirthDate, dob_digits};
use crate::normalize::{is_vowel, normalize_name};
use crate::reduce::reduce_number;
use crate::tables::letter_value;
use crate::{LetterSystem, NumberResult, NumerologyError};

/// Life Path number with its digit trace.
pub fn life_path_from_dob(
    dob: &str,
    preserve_masters: bool,
) -> Result<NumberResult, NumerologyError> {
    let digits = dob_digits(dob)?;
    let sum = digits.iter().sum();
    Ok(NumberResult::with_intermediate(
        reduce_number(sum, preserve_masters),
        digits,
        sum,
    ))
}

/// The three name-derived core numbers.
///
/// `soul_urge.raw + personality.raw == expression.raw` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameNumbers {
    pub expression: NumberResult,
    pub soul_urge: NumberResult,
    pub personality: NumberResult,
}

impl NameNumbers {
    /// Unreduced sum of every letter.
    #[must_use]
    pub fn expression_sum(&self) -> u32 {
        self.expression.raw.unwrap_or(0)
    }

    /// Unreduced sum of vowels.
    #[must_use]
    pub fn vowel_sum(&self) -> u32 {
        self.soul_urge.raw.unwrap_or(0)
    }

    /// Unreduced sum of consonants.
    #[must_use]
    pub fn consonant_sum(&self) -> u32 {
        self.personality.raw.unwrap_or(0)
    }
}

/// Expression, Soul Urge and Personality for a raw name.
///
/// Never fails: a name with no letters produces zero sums and zero values.
#[must_use]
pub fn compute_name_numbers(
    full_name: &str,
    system: LetterSystem,
    preserve_masters: bool,
) -> NameNumbers {
    let name = normalize_name(full_name);
    let mut expression_sum = 0u32;
    let mut vowel_sum = 0u32;
    let mut consonant_sum = 0u32;

    for (i, ch) in name.char_indices() {
        if ch == ' ' {
            continue;
        }
        let value = letter_value(ch, system);
        if is_vowel(&name, i) {
            vowel_sum += value;
        } else {
            consonant_sum += value;
        }
        expression_sum += value;
    }

    NameNumbers {
        expression: NumberResult::with_raw(
            reduce_number(expression_sum, preserve_masters),
            expression_sum,
        ),
        soul_urge: NumberResult::with_raw(reduce_number(vowel_sum, preserve_masters), vowel_sum),
        personality: NumberResult::with_raw(
            reduce_number(consonant_sum, preserve_masters),
            consonant_sum,
        ),
    }
}

/// Birthday number: the reduced day of month.
pub fn birthday_number(dob: &str, preserve_masters: bool) -> Result<u32, NumerologyError> {
    let date = BirthDate::parse(dob)?;
    Ok(reduce_number(date.day, preserve_masters))
}

/// Maturity number from already-reduced Life Path and Expression values.
#[must_use]
pub fn maturity_number(life_path: u32, expression: u32, preserve_masters: bool) -> u32 {
    reduce_number(life_path + expression, preserve_masters)
}

// =============================================================================
// TESTS
// =============================================================================
