//! # numencoach-core
//!
//! The deterministic numerology engine for NumenCoach.
//!
//! Given a profile (full name, date of birth, letter system, master-number
//! policy) and an evaluation instant, the engine derives a fixed set of
//! numerology numbers. It also ranks nearby name spellings by their
//! Expression and scores the compatibility of two profiles.
//!
//! ## Architectural Constraints
//!
//! - Pure functions over plain values; the only stateful piece is the
//!   optional `storage` cache
//! - Integer arithmetic only
//! - The current date is never read here; callers pass the instant
//! - No async, no network dependencies

// =============================================================================
// MODULES
// =============================================================================

pub mod compatibility;
pub mod core_numbers;
pub mod date;
pub mod engine;
pub mod extended;
pub mod formats;
pub mod meanings;
pub mod normalize;
pub mod primitives;
pub mod reduce;
pub mod storage;
pub mod tables;
pub mod tuner;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Challenges, HiddenPassion, Intermediate, KarmicDebt, KarmicSource, LetterSystem, LifeStage,
    LoShuGrid, NameSuggestion, NumberResult, NumerologyError, Pinnacle, Pinnacles, Profile,
    ProfileSnapshot, ResultsBundle,
};

// =============================================================================
// RE-EXPORTS: Calculators
// =============================================================================

pub use compatibility::{CompatibilityBand, CompatibilityReport, calculate_compatibility};
pub use core_numbers::{NameNumbers, compute_name_numbers};
pub use date::{BirthDate, instant_from_iso_date};
pub use engine::calculate_all_numbers;
pub use normalize::normalize_name;
pub use reduce::reduce_number;
pub use tuner::{MutationPosition, NameTuner, TunerConfig, generate_name_suggestions};

// =============================================================================
// RE-EXPORTS: Narrative
// =============================================================================

pub use meanings::{CoachingText, Confidence, KarmicDebtMeaning, NumberMeaning, coaching_text};

// =============================================================================
// RE-EXPORTS: Formats and Storage
// =============================================================================

pub use formats::{SnapshotHeader, snapshot_from_bytes, snapshot_to_bytes};
pub use storage::ProfileCache;
