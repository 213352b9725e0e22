//! # Birth Date Parsing
//!
//! Structural parsing of `DD/MM/YYYY` strings. The engine only requires
//! three non-empty all-digit components; calendar validity is checked by
//! boundary validation, not here.

use crate::NumerologyError;
use crate::primitives::DOB_SEPARATOR;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// The three numeric components of a date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl BirthDate {
    /// Parse `DD/MM/YYYY`.
    ///
    /// Returns `MalformedDate` unless the string splits into exactly three
    /// non-empty components made only of ASCII digits.
    pub fn parse(dob: &str) -> Result<Self, NumerologyError> {
        let malformed = || NumerologyError::MalformedDate(dob.to_string());

        let parts: Vec<&str> = dob.trim().split(DOB_SEPARATOR).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(malformed());
        };

        let component = |part: &str| -> Result<u32, NumerologyError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u32>().map_err(|_| malformed())
        };

        Ok(Self {
            day: component(*day)?,
            month: component(*month)?,
            year: component(*year)?,
        })
    }

    /// Whether the components name a real Gregorian date.
    #[must_use]
    pub fn is_calendar_date(&self) -> bool {
        i32::try_from(self.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .is_some()
    }
}

/// Every digit character of `dob`, separators removed, in order.
///
/// Fails with `MalformedDate` under the same rule as [`BirthDate::parse`].
pub fn dob_digits(dob: &str) -> Result<Vec<u32>, NumerologyError> {
    BirthDate::parse(dob)?;
    Ok(dob.trim().chars().filter_map(|c| c.to_digit(10)).collect())
}

/// Evaluation instant for an ISO `YYYY-MM-DD` date, at midnight UTC.
pub fn instant_from_iso_date(date: &str) -> Result<DateTime<Utc>, NumerologyError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| {
            NumerologyError::InvalidInput(format!(
                "evaluation date {date:?} is not YYYY-MM-DD"
            ))
        })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_components() {
        let date = BirthDate::parse("07/09/2003").expect("parse");
        assert_eq!(
            date,
            BirthDate {
                day: 7,
                month: 9,
                year: 2003
            }
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(BirthDate::parse(" 07/09/2003 ").is_ok());
    }

    #[test]
    fn rejects_structural_errors() {
        for dob in ["", "07/09", "07/09/2003/1", "07/ 9/2003", "+7/09/2003", "07/09/"] {
            assert!(
                matches!(BirthDate::parse(dob), Err(NumerologyError::MalformedDate(_))),
                "{dob:?}"
            );
        }
    }

    #[test]
    fn structural_parse_ignores_calendar() {
        let date = BirthDate::parse("31/02/2003").expect("parse");
        assert!(!date.is_calendar_date());
        assert!(BirthDate::parse("29/02/2024").expect("parse").is_calendar_date());
    }

    #[test]
    fn iso_instant_is_midnight_utc() {
        let at = instant_from_iso_date("2026-10-19").expect("instant");
        assert_eq!(at.to_rfc3339(), "2026-10-19T00:00:00+00:00");
        assert!(instant_from_iso_date("19/10/2026").is_err());
        assert!(instant_from_iso_date("2026-02-30").is_err());
    }

    #[test]
    fn digits_keep_zeros() {
        assert_eq!(
            dob_digits("07/09/2003").expect("digits"),
            vec![0, 7, 0, 9, 2, 0, 0, 3]
        );
    }
}
