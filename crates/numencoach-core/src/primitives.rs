//! # Engine Primitives
//!
//! Compiled-in constants for the NumenCoach engine.
//!
//! The engine starts with no data but fixed rules.
//! These values are immutable at runtime.

/// Numbers exempt from reduction when masters are preserved.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Raw sums flagged as karmic debt.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// Letters that are always vowels. `Y` is decided by context.
pub const VOWELS: [u8; 5] = [b'A', b'E', b'I', b'O', b'U'];

/// Separator between date-of-birth components.
pub const DOB_SEPARATOR: char = '/';

/// Maximum per-number score in a compatibility comparison.
pub const COMPATIBILITY_MAX_SCORE: u32 = 9;

/// Number of core numbers compared for compatibility (Life Path, Expression, Soul Urge).
pub const COMPATIBILITY_COMPARISONS: u32 = 3;

/// Replacement letters tried by the default Name Tuner.
pub const TUNER_ALPHABET: &str = "ABC";

/// Suggestions returned by the default Name Tuner.
pub const TUNER_MAX_SUGGESTIONS: usize = 3;

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Maximum accepted length of a full name, in bytes.
///
/// Enforced at the API boundary, not by the engine.
pub const MAX_NAME_LENGTH: usize = 512;

/// Maximum alphabet size a tuner configuration may use.
pub const MAX_TUNER_ALPHABET: usize = 26;

/// Maximum suggestions a tuner configuration may request.
pub const MAX_TUNER_SUGGESTIONS: usize = 50;

// =============================================================================
// SNAPSHOT FORMAT
// =============================================================================

/// Magic bytes for the snapshot binary format header.
pub const MAGIC_BYTES: &[u8; 4] = b"NUMC";

/// Current snapshot format version.
///
/// Increment this when making breaking changes to the serialization format.
pub const FORMAT_VERSION: u8 = 1;

/// Cache key under which the last profile snapshot is stored.
pub const LAST_PROFILE_KEY: &str = "numencoach_profile";
