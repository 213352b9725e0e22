//! # Name Normalizer & Vowel Classifier
//!
//! `normalize_name` turns free-form input into upper-case ASCII letters
//! separated by single spaces:
//!
//! 1. NFD-decompose and drop combining diacritical marks (U+0300..=U+036F)
//! 2. Replace every character that is not a Latin letter or whitespace with a space
//! 3. Collapse whitespace runs, trim, upper-case
//!
//! The function is total and idempotent.

use crate::primitives::VOWELS;
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Normalize a raw name. Empty input yields an empty string.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let cleaned: String = raw
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| {
            if c.is_ascii_alphabetic() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

fn is_plain_vowel(byte: u8) -> bool {
    VOWELS.contains(&byte)
}

/// Classify the letter at `index` of a normalized name.
///
/// `A E I O U` are always vowels. `Y` is a vowel only when neither
/// neighbour is one of `A E I O U`; a missing neighbour at either end
/// counts as not-a-vowel. Everything else is a consonant.
#[must_use]
pub fn is_vowel(name: &str, index: usize) -> bool {
    let bytes = name.as_bytes();
    match bytes.get(index) {
        Some(&b'Y') => {
            let prev = index.checked_sub(1).and_then(|i| bytes.get(i)).copied();
            let next = bytes.get(index + 1).copied();
            !prev.is_some_and(is_plain_vowel) && !next.is_some_and(is_plain_vowel)
        }
        Some(&b) => is_plain_vowel(b),
        None => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize_name("Áryan Räj"), "ARYAN RAJ");
        assert_eq!(normalize_name("François Müller"), "FRANCOIS MULLER");
    }

    #[test]
    fn replaces_punctuation_and_collapses_spaces() {
        assert_eq!(normalize_name("  o'brien -  smith\t jr. "), "O BRIEN SMITH JR");
    }

    #[test]
    fn non_latin_input_becomes_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("123 !?"), "");
        assert_eq!(normalize_name("Дмитрий"), "");
    }

    #[test]
    fn idempotent_on_samples() {
        for raw in ["Áryan Räj", "  a  b ", "Zoë-Yvette", ""] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn plain_vowels() {
        let name = "AEIOUB";
        for i in 0..5 {
            assert!(is_vowel(name, i));
        }
        assert!(!is_vowel(name, 5));
    }

    #[test]
    fn y_between_consonants_is_vowel() {
        // L-Y-N
        assert!(is_vowel("LYNN", 1));
        // at the end, previous is a consonant
        assert!(is_vowel("MARY", 3));
        assert!(is_vowel("GARRY", 4));
    }

    #[test]
    fn y_next_to_vowel_is_consonant() {
        // A-Y-A
        assert!(!is_vowel("MAYA", 2));
        // Y-A at start
        assert!(!is_vowel("YASMIN", 0));
        // R-Y-A
        assert!(!is_vowel("ARYAN", 2));
    }

    #[test]
    fn y_alone_is_vowel() {
        assert!(is_vowel("Y", 0));
        assert!(is_vowel("A Y", 2));
    }

    #[test]
    fn out_of_range_is_not_vowel() {
        assert!(!is_vowel("ABC", 10));
    }
}
