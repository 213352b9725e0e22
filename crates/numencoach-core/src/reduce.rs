//! # Digit Reducer
//!
//! Every number the engine reports goes through [`reduce_number`].
//!
//! - With `preserve_masters`, 11, 22 and 33 are returned unchanged, both as
//!   input and as any intermediate digit sum.
//! - Otherwise digits are summed until a single digit remains.
//! - 0 stays 0 (only reachable from empty names).

use crate::primitives::MASTER_NUMBERS;

/// Whether `n` is one of 11, 22, 33.
#[must_use]
pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the base-10 digits of `n`.
#[must_use]
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit, optionally stopping at a master number.
#[must_use]
pub fn reduce_number(n: u32, preserve_masters: bool) -> u32 {
    if preserve_masters && is_master(n) {
        return n;
    }
    let mut n = n;
    while n > 9 {
        n = digit_sum(n);
        if preserve_masters && is_master(n) {
            return n;
        }
    }
    n
}

// =============================================================================
// TESTS
// =============================================================================
