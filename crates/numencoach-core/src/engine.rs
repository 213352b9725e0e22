//! # Orchestrator
//!
//! `calculate_all_numbers` composes every calculator into one
//! [`ResultsBundle`]. The evaluation instant is a parameter: Personal
//! Year/Month/Day use its calendar date and `calculated_at` records it,
//! so identical inputs always give identical bundles.
//!
//! Failure is total. The first malformed-date error is returned and no
//! partial bundle is produced.

use chrono::{DateTime, Datelike, Utc};

use crate::core_numbers::{
    birthday_number, compute_name_numbers, life_path_from_dob, maturity_number,
};
use crate::extended::{
    calculate_balance_number, calculate_challenges, calculate_hidden_passion,
    calculate_personal_day, calculate_personal_month, calculate_personal_year,
    calculate_pinnacles, calculate_subconscious_self, check_karmic_debt, lo_shu_from_dob,
};
use crate::{KarmicSource, NumerologyError, Profile, ResultsBundle};

/// Derive every number for `profile` as of `at`.
pub fn calculate_all_numbers(
    profile: &Profile,
    at: DateTime<Utc>,
) -> Result<ResultsBundle, NumerologyError> {
    let Profile {
        full_name,
        dob,
        system,
        preserve_masters,
    } = profile;
    let (system, preserve) = (*system, *preserve_masters);

    let life_path = life_path_from_dob(dob, preserve)?;
    let names = compute_name_numbers(full_name, system, preserve);
    let birthday = birthday_number(dob, preserve)?;
    let maturity = maturity_number(life_path.value, names.expression.value, preserve);
    let lo_shu = lo_shu_from_dob(dob)?;

    let pinnacles = calculate_pinnacles(dob, preserve)?;
    let challenges = calculate_challenges(dob, preserve)?;
    let personal_year = calculate_personal_year(dob, at.year().unsigned_abs(), preserve)?;
    let personal_month = calculate_personal_month(personal_year, at.month(), preserve);
    let personal_day = calculate_personal_day(personal_month, at.day(), preserve);
    let balance_number = calculate_balance_number(full_name, preserve);
    let hidden_passion = calculate_hidden_passion(full_name, system);
    let subconscious_self = calculate_subconscious_self(full_name, system);

    let karmic_debt = check_karmic_debt(&[
        (KarmicSource::LifePath, &life_path),
        (KarmicSource::Expression, &names.expression),
        (KarmicSource::SoulUrge, &names.soul_urge),
        (KarmicSource::Personality, &names.personality),
    ]);

    Ok(ResultsBundle {
        life_path,
        expression: names.expression,
        soul_urge: names.soul_urge,
        personality: names.personality,
        birthday,
        maturity,
        lo_shu,
        pinnacles,
        challenges,
        personal_year,
        personal_month,
        personal_day,
        balance_number,
        hidden_passion,
        subconscious_self,
        karmic_debt,
        calculated_at: at,
    })
}

// =============================================================================
// TESTS
// =============================================================================
