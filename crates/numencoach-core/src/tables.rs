//! # Letter-Value Tables
//!
//! Two fixed mappings from Latin letters to single digits.
//!
//! | System      | Values | Rule                                      |
//! |-------------|--------|-------------------------------------------|
//! | Chaldean    | 1-8    | Fixed letter groups, nothing maps to 9    |
//! | Pythagorean | 1-9    | `((position - 1) mod 9) + 1`              |
//!
//! Anything that is not an upper-case Latin letter is worth 0. Normalized
//! names only contain `A-Z` and spaces, so callers never see the 0.

use crate::LetterSystem;

/// Chaldean value of an upper-case letter.
#[must_use]
pub const fn chaldean_value(ch: char) -> u32 {
    match ch {
        'A' | 'I' | 'J' | 'Q' | 'Y' => 1,
        'B' | 'K' | 'R' => 2,
        'C' | 'G' | 'L' | 'S' => 3,
        'D' | 'M' | 'T' => 4,
        'E' | 'H' | 'N' | 'X' => 5,
        'U' | 'V' | 'W' => 6,
        'O' | 'Z' => 7,
        'F' | 'P' => 8,
        _ => 0,
    }
}

/// Pythagorean value of an upper-case letter.
#[must_use]
pub const fn pythagorean_value(ch: char) -> u32 {
    if ch.is_ascii_uppercase() {
        let position = (ch as u32) - ('A' as u32) + 1;
        ((position - 1) % 9) + 1
    } else {
        0
    }
}

/// Value of `ch` under `system`.
#[must_use]
pub const fn letter_value(ch: char, system: LetterSystem) -> u32 {
    match system {
        LetterSystem::Chaldean => chaldean_value(ch),
        LetterSystem::Pythagorean => pythagorean_value(ch),
    }
}

// =============================================================================
// TESTS
// =============================================================================
