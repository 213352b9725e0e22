//! # Extended Number Calculators
//!
//! Numbers derived from the birth date components, the evaluation date,
//! or the letter distribution of the name.
//!
//! Pinnacles reduce their sums; Challenges are plain absolute differences.

use std::collections::{BTreeMap, BTreeSet};

use crate::date::{BirthDate, dob_digits};
use crate::normalize::normalize_name;
use crate::primitives::KARMIC_DEBT_NUMBERS;
use crate::reduce::reduce_number;
use crate::tables::{letter_value, pythagorean_value};
use crate::{
    Challenges, HiddenPassion, KarmicDebt, KarmicSource, LetterSystem, LifeStage, LoShuGrid,
    NumberResult, NumerologyError, Pinnacle, Pinnacles,
};

// =============================================================================
// DATE-DERIVED
// =============================================================================

/// Digit-frequency grid of the birth date. Zeros are ignored.
pub fn lo_shu_from_dob(dob: &str) -> Result<LoShuGrid, NumerologyError> {
    let mut counts: BTreeMap<u32, u32> = (1..=9).map(|d| (d, 0)).collect();
    for digit in dob_digits(dob)? {
        if let Some(count) = counts.get_mut(&digit) {
            *count += 1;
        }
    }
    let missing = counts
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(digit, _)| *digit)
        .collect();
    Ok(LoShuGrid { counts, missing })
}

/// Day, month and year, each reduced on its own.
fn reduced_components(
    dob: &str,
    preserve_masters: bool,
) -> Result<(u32, u32, u32), NumerologyError> {
    let date = BirthDate::parse(dob)?;
    Ok((
        reduce_number(date.day, preserve_masters),
        reduce_number(date.month, preserve_masters),
        reduce_number(date.year, preserve_masters),
    ))
}

/// The four pinnacles.
pub fn calculate_pinnacles(
    dob: &str,
    preserve_masters: bool,
) -> Result<Pinnacles, NumerologyError> {
    let (day, month, year) = reduced_components(dob, preserve_masters)?;

    let first = reduce_number(month + day, preserve_masters);
    let second = reduce_number(day + year, preserve_masters);
    let third = reduce_number(first + second, preserve_masters);
    let fourth = reduce_number(month + year, preserve_masters);

    Ok(Pinnacles {
        first: Pinnacle {
            value: first,
            ages: LifeStage::BirthTo27,
        },
        second: Pinnacle {
            value: second,
            ages: LifeStage::From28To36,
        },
        third: Pinnacle {
            value: third,
            ages: LifeStage::From37To45,
        },
        fourth: Pinnacle {
            value: fourth,
            ages: LifeStage::From46Onwards,
        },
    })
}

/// The four challenges. Differences are not reduced.
pub fn calculate_challenges(
    dob: &str,
    preserve_masters: bool,
) -> Result<Challenges, NumerologyError> {
    let (day, month, year) = reduced_components(dob, preserve_masters)?;

    let first = month.abs_diff(day);
    let second = day.abs_diff(year);

    Ok(Challenges {
        first,
        second,
        third: first.abs_diff(second),
        fourth: month.abs_diff(year),
    })
}

/// Personal Year for `current_year`.
pub fn calculate_personal_year(
    dob: &str,
    current_year: u32,
    preserve_masters: bool,
) -> Result<u32, NumerologyError> {
    let date = BirthDate::parse(dob)?;
    let universal_year = reduce_number(current_year, preserve_masters);
    let birth_day = reduce_number(date.day, preserve_masters);
    let birth_month = reduce_number(date.month, preserve_masters);
    Ok(reduce_number(
        universal_year + birth_day + birth_month,
        preserve_masters,
    ))
}

/// Personal Month from a Personal Year and a calendar month (1-12).
#[must_use]
pub fn calculate_personal_month(
    personal_year: u32,
    current_month: u32,
    preserve_masters: bool,
) -> u32 {
    reduce_number(personal_year + current_month, preserve_masters)
}

/// Personal Day from a Personal Month and a calendar day (1-31).
#[must_use]
pub fn calculate_personal_day(
    personal_month: u32,
    current_day: u32,
    preserve_masters: bool,
) -> u32 {
    reduce_number(personal_month + current_day, preserve_masters)
}

// =============================================================================
// NAME-DERIVED
// =============================================================================

/// Letter values of every letter in the normalized name, spaces skipped.
fn name_values(full_name: &str, system: LetterSystem) -> Vec<u32> {
    normalize_name(full_name)
        .chars()
        .filter(|&ch| ch != ' ')
        .map(|ch| letter_value(ch, system))
        .collect()
}

/// Balance number: initials summed under the Pythagorean table, whatever
/// system the profile uses.
#[must_use]
pub fn calculate_balance_number(full_name: &str, preserve_masters: bool) -> u32 {
    let initials_sum = normalize_name(full_name)
        .split(' ')
        .filter_map(|token| token.chars().next())
        .map(pythagorean_value)
        .sum();
    reduce_number(initials_sum, preserve_masters)
}

/// Most frequent letter value.
///
/// Ties go to the smallest value. A name with no letters yields value 1 with count 0.
#[must_use]
pub fn calculate_hidden_passion(full_name: &str, system: LetterSystem) -> HiddenPassion {
    let mut tally: BTreeMap<u32, u32> = BTreeMap::new();
    for value in name_values(full_name, system) {
        *tally.entry(value).or_insert(0) += 1;
    }

    let mut best = HiddenPassion { value: 1, count: 0 };
    for (value, count) in tally {
        if count > best.count {
            best = HiddenPassion { value, count };
        }
    }
    best
}

/// Subconscious Self: 9 minus the number of distinct letter values.
#[must_use]
pub fn calculate_subconscious_self(full_name: &str, system: LetterSystem) -> u32 {
    let distinct: BTreeSet<u32> = name_values(full_name, system).into_iter().collect();
    9u32.saturating_sub(distinct.len() as u32)
}

// =============================================================================
// KARMIC DEBT
// =============================================================================

/// Flag raw sums equal to 13, 14, 16 or 19.
///
/// Only `raw` is inspected; reduced values are never candidates. Results
/// keep the order of `numbers`.
#[must_use]
pub fn check_karmic_debt(numbers: &[(KarmicSource, &NumberResult)]) -> Vec<KarmicDebt> {
    numbers
        .iter()
        .filter_map(|(source, result)| {
            result
                .raw
                .filter(|raw| KARMIC_DEBT_NUMBERS.contains(raw))
                .map(|number| KarmicDebt {
                    source: *source,
                    number,
                })
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lo_shu_counts_and_missing() {
        let grid = lo_shu_from_dob("07/09/2003").expect("grid");
        assert_eq!(grid.count(7), 1);
        assert_eq!(grid.count(9), 1);
        assert_eq!(grid.count(2), 1);
        assert_eq!(grid.count(3), 1);
        assert_eq!(grid.missing, vec![1, 4, 5, 6, 8]);
        assert_eq!(grid.counts.len(), 9);
    }

    #[test]
    fn lo_shu_repeated_digits() {
        let grid = lo_shu_from_dob("11/11/1111").expect("grid");
        assert_eq!(grid.count(1), 8);
        assert_eq!(grid.missing.len(), 8);
    }

    #[test]
    fn pinnacles_reference_date() {
        // day 7, month 9, year 2003 -> 5
        let p = calculate_pinnacles("07/09/2003", true).expect("pinnacles");
        assert_eq!(p.first.value, 7); // 9 + 7 = 16 -> 7
        assert_eq!(p.second.value, 3); // 7 + 5 = 12 -> 3
        assert_eq!(p.third.value, 1); // 7 + 3 = 10 -> 1
        assert_eq!(p.fourth.value, 5); // 9 + 5 = 14 -> 5
        assert_eq!(p.first.ages, LifeStage::BirthTo27);
        assert_eq!(p.fourth.ages, LifeStage::From46Onwards);
    }

    #[test]
    fn pinnacles_keep_masters() {
        // day 29 -> 11, month 11, year 2000 -> 2
        let p = calculate_pinnacles("29/11/2000", true).expect("pinnacles");
        assert_eq!(p.first.value, 22); // 11 + 11
        let collapsed = calculate_pinnacles("29/11/2000", false).expect("pinnacles");
        assert_eq!(collapsed.first.value, 4); // 2 + 2
    }

    #[test]
    fn challenges_reference_date() {
        let c = calculate_challenges("07/09/2003", true).expect("challenges");
        assert_eq!(c.first, 2); // |9 - 7|
        assert_eq!(c.second, 2); // |7 - 5|
        assert_eq!(c.third, 0); // |2 - 2|
        assert_eq!(c.fourth, 4); // |9 - 5|
    }

    #[test]
    fn challenges_are_not_reduced() {
        // day 29 -> 11, month 01 -> 1, year 2000 -> 2
        let c = calculate_challenges("29/01/2000", true).expect("challenges");
        assert_eq!(c.first, 10);
        assert_eq!(c.second, 9);
        assert_eq!(c.third, 1);
        assert_eq!(c.fourth, 1);
    }

    #[test]
    fn personal_cycles() {
        // 2026 -> 10 -> 1; day 7; month 9 -> 1 + 7 + 9 = 17 -> 8
        let year = calculate_personal_year("07/09/2003", 2026, true).expect("year");
        assert_eq!(year, 8);
        // 8 + 10 = 18 -> 9
        let month = calculate_personal_month(year, 10, true);
        assert_eq!(month, 9);
        // 9 + 19 = 28 -> 10 -> 1
        assert_eq!(calculate_personal_day(month, 19, true), 1);
    }

    #[test]
    fn balance_uses_pythagorean_initials() {
        // A(1) + R(9) = 10 -> 1
        assert_eq!(calculate_balance_number("Aryan Raj", true), 1);
        // single token
        assert_eq!(calculate_balance_number("zed", true), 8);
        assert_eq!(calculate_balance_number("", true), 0);
    }

    #[test]
    fn hidden_passion_most_frequent() {
        // Chaldean ARYAN: 1,2,1,1,5 -> 1 appears three times
        let hp = calculate_hidden_passion("ARYAN", LetterSystem::Chaldean);
        assert_eq!(hp, HiddenPassion { value: 1, count: 3 });
    }

    #[test]
    fn hidden_passion_tie_goes_to_smallest_value() {
        // Pythagorean B(2) C(3) -> tie, 2 wins
        let hp = calculate_hidden_passion("CB", LetterSystem::Pythagorean);
        assert_eq!(hp, HiddenPassion { value: 2, count: 1 });
    }

    #[test]
    fn hidden_passion_empty_name() {
        let hp = calculate_hidden_passion("", LetterSystem::Chaldean);
        assert_eq!(hp, HiddenPassion { value: 1, count: 0 });
    }

    #[test]
    fn subconscious_self_counts_distinct_values() {
        // Chaldean ARYAN: {1, 2, 5}
        assert_eq!(calculate_subconscious_self("ARYAN", LetterSystem::Chaldean), 6);
        assert_eq!(calculate_subconscious_self("", LetterSystem::Chaldean), 9);
        // Pythagorean A..I covers all nine values
        assert_eq!(
            calculate_subconscious_self("ABCDEFGHI", LetterSystem::Pythagorean),
            0
        );
    }

    #[test]
    fn karmic_debt_checks_raw_only() {
        let thirteen = NumberResult::with_raw(4, 13);
        let plain = NumberResult::with_raw(4, 22);
        let no_raw = NumberResult {
            value: 4,
            raw: None,
            intermediate: None,
        };
        let nineteen = NumberResult::with_intermediate(1, vec![1, 9], 19);

        let found = check_karmic_debt(&[
            (KarmicSource::LifePath, &nineteen),
            (KarmicSource::Expression, &thirteen),
            (KarmicSource::SoulUrge, &plain),
            (KarmicSource::Personality, &no_raw),
        ]);

        assert_eq!(
            found,
            vec![
                KarmicDebt {
                    source: KarmicSource::LifePath,
                    number: 19
                },
                KarmicDebt {
                    source: KarmicSource::Expression,
                    number: 13
                },
            ]
        );
    }
}
