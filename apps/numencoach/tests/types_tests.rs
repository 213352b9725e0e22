//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use numencoach::api::{
    CalculateRequest, CalculateResponse, CompatibilityRequest, HealthResponse, MeaningResponse,
    ProfileInput, TuneRequest, TuneResponse,
};
use numencoach::config::ProfileDefaults;
use numencoach_core::{LetterSystem, NumerologyError};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_serialization() {
    let health = HealthResponse {
        status: "ok".to_string(),
        version: "0.3.0".to_string(),
    };

    let json = serde_json::to_string(&health).unwrap();
    assert!(json.contains("\"status\":\"ok\""));
    assert!(json.contains("\"version\":\"0.3.0\""));
}

// =============================================================================
// PROFILE INPUT TESTS
// =============================================================================

#[test]
fn test_profile_input_snake_case() {
    let json = r#"{"full_name":"Aryan Raj","dob":"07/09/2003","system":"pythagorean","preserve_masters":false}"#;
    let input: ProfileInput = serde_json::from_str(json).unwrap();

    assert_eq!(input.full_name, "Aryan Raj");
    assert_eq!(input.system, Some(LetterSystem::Pythagorean));
    assert_eq!(input.preserve_masters, Some(false));
}

#[test]
fn test_profile_input_camel_case_aliases() {
    let json = r#"{"fullName":"Aryan","dob":"07/09/2003","preserveMasters":true}"#;
    let input: ProfileInput = serde_json::from_str(json).unwrap();

    assert_eq!(input.full_name, "Aryan");
    assert_eq!(input.system, None);
    assert_eq!(input.preserve_masters, Some(true));
}

#[test]
fn test_profile_input_unknown_system_rejected() {
    let json = r#"{"full_name":"Aryan","dob":"07/09/2003","system":"vedic"}"#;
    assert!(serde_json::from_str::<ProfileInput>(json).is_err());
}

#[test]
fn test_profile_input_missing_dob_rejected() {
    let json = r#"{"full_name":"Aryan"}"#;
    assert!(serde_json::from_str::<ProfileInput>(json).is_err());
}

#[test]
fn test_to_profile_applies_defaults() {
    let input = ProfileInput {
        full_name: "Aryan".to_string(),
        dob: "07/09/2003".to_string(),
        system: None,
        preserve_masters: None,
    };
    let defaults = ProfileDefaults {
        system: LetterSystem::Pythagorean,
        preserve_masters: false,
    };

    let profile = input.to_profile(&defaults).unwrap();
    assert_eq!(profile.system, LetterSystem::Pythagorean);
    assert!(!profile.preserve_masters);
}

#[test]
fn test_to_profile_rejects_long_name() {
    let input = ProfileInput {
        full_name: "A".repeat(10_000),
        dob: "07/09/2003".to_string(),
        system: None,
        preserve_masters: None,
    };

    let result = input.to_profile(&ProfileDefaults::default());
    assert!(matches!(result, Err(NumerologyError::InvalidInput(_))));
}

// =============================================================================
// CALCULATE REQUEST TESTS
// =============================================================================

#[test]
fn test_calculate_request_is_flat() {
    let json = r#"{"fullName":"Aryan","dob":"07/09/2003","at":"2026-10-19","save":true}"#;
    let request: CalculateRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.profile.full_name, "Aryan");
    assert_eq!(request.at.as_deref(), Some("2026-10-19"));
    assert!(request.save);
}

#[test]
fn test_calculate_request_defaults() {
    let json = r#"{"full_name":"Aryan","dob":"07/09/2003"}"#;
    let request: CalculateRequest = serde_json::from_str(json).unwrap();

    assert!(request.at.is_none());
    assert!(!request.save);
}

#[test]
fn test_calculate_error_response() {
    let response = CalculateResponse::error("Calculation failed: bad date");

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"success\":false"));
    assert!(json.contains("\"results\":null"));
    assert!(json.contains("bad date"));
}

// =============================================================================
// TUNE REQUEST TESTS
// =============================================================================

fn tune(alphabet: Option<&str>, max: Option<usize>) -> TuneRequest {
    TuneRequest {
        full_name: "Aryan".to_string(),
        system: None,
        preserve_masters: None,
        alphabet: alphabet.map(str::to_string),
        max_suggestions: max,
    }
}

#[test]
fn test_tune_request_validation() {
    assert!(tune(None, None).validate().is_ok());
    assert!(tune(Some("XYZ"), Some(10)).validate().is_ok());
    assert!(tune(Some(""), None).validate().is_err());
    assert!(tune(Some("AB C"), None).validate().is_err());
    assert!(tune(Some(&"A".repeat(27)), None).validate().is_err());
    assert!(tune(None, Some(0)).validate().is_err());
    assert!(tune(None, Some(51)).validate().is_err());
}

#[test]
fn test_tune_error_response() {
    let response = TuneResponse::error("Invalid request");
    assert!(!response.success);
    assert!(response.baseline.is_none());
    assert!(response.suggestions.is_empty());
}

// =============================================================================
// COMPATIBILITY REQUEST TESTS
// =============================================================================

#[test]
fn test_compatibility_request_deserialization() {
    let json = r#"{
        "a": {"full_name":"Aryan","dob":"07/09/2003"},
        "b": {"fullName":"Maya","dob":"12/12/1999","system":"chaldean"}
    }"#;
    let request: CompatibilityRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.a.full_name, "Aryan");
    assert_eq!(request.b.full_name, "Maya");
    assert_eq!(request.b.system, Some(LetterSystem::Chaldean));
    assert!(request.at.is_none());
}

// =============================================================================
// MEANING RESPONSE TESTS
// =============================================================================

#[test]
fn test_meaning_lookup_core_number() {
    let meaning = MeaningResponse::lookup(7);

    assert!(meaning.is_found());
    assert_eq!(meaning.lucky_day.as_deref(), Some("Monday"));
    assert_eq!(meaning.strengths.len(), 3);
    assert_eq!(meaning.weaknesses.len(), 3);
    assert_eq!(meaning.coaching.len(), 3);
    assert!(meaning.pinnacle.is_some());
    assert!(meaning.challenge.is_some());
    assert!(meaning.karmic_debt.is_none());
}

#[test]
fn test_meaning_lookup_zero_is_challenge_only() {
    let meaning = MeaningResponse::lookup(0);

    assert!(meaning.is_found());
    assert!(meaning.summary.is_none());
    assert!(meaning.challenge.is_some());
}

#[test]
fn test_meaning_lookup_missing() {
    let meaning = MeaningResponse::lookup(10);

    assert!(!meaning.is_found());
    assert_eq!(
        meaning,
        MeaningResponse {
            number: 10,
            ..MeaningResponse::default()
        }
    );
}
