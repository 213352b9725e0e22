//! Integration tests for the NumenCoach HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use axum::http::StatusCode;
use axum_test::TestServer;
use numencoach::api::{
    AppState, CalculateResponse, ClearResponse, CompatibilityResponse, HealthResponse,
    MeaningResponse, ProfileResponse, TuneResponse, create_router,
};
use numencoach::config::{ProfileDefaults, ServerConfig};
use numencoach_core::{CompatibilityBand, LetterSystem, ProfileCache};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a test server backed by a fresh cache in a temp directory.
/// The directory must outlive the server.
fn create_test_server() -> (TestServer, TempDir) {
    create_test_server_with(ServerConfig {
        rate_limit: 0,
        ..ServerConfig::default()
    })
}

fn create_test_server_with(server: ServerConfig) -> (TestServer, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let cache = ProfileCache::open(dir.path().join("profile.redb")).unwrap();
    let state = AppState::new(ProfileDefaults::default(), Some(cache));
    let router = create_router(state, &server);
    (TestServer::new(router).unwrap(), dir)
}

fn aryan() -> serde_json::Value {
    json!({
        "full_name": "Aryan",
        "dob": "07/09/2003",
        "at": "2026-10-19"
    })
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _dir) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// CALCULATE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_calculate_reference_profile() {
    let (server, _dir) = create_test_server();

    let response = server.post("/calculate").json(&aryan()).await;

    response.assert_status_ok();
    let result: CalculateResponse = response.json();
    assert!(result.success);
    assert!(!result.saved);
    assert!(result.error.is_none());

    let results = result.results.unwrap();
    assert_eq!(results.life_path.value, 3);
    assert_eq!(results.expression.value, 1);
    assert_eq!(results.soul_urge.value, 2);
    assert_eq!(results.personality.value, 8);
    assert_eq!(results.birthday, 7);
    assert_eq!(results.maturity, 4);
    assert_eq!(results.personal_year, 8);
    assert!(results.karmic_debt.is_empty());
    assert_eq!(
        results.calculated_at.to_rfc3339(),
        "2026-10-19T00:00:00+00:00"
    );

    let coaching = result.coaching.unwrap();
    assert!(!coaching.title.is_empty());
}

#[tokio::test]
async fn test_calculate_accepts_camel_case_and_system() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/calculate")
        .json(&json!({
            "fullName": "Aryan",
            "dob": "07/09/2003",
            "system": "pythagorean",
            "preserveMasters": false,
            "at": "2026-10-19"
        }))
        .await;

    response.assert_status_ok();
    let result: CalculateResponse = response.json();
    assert_eq!(result.results.unwrap().expression.value, 5);
}

#[tokio::test]
async fn test_calculate_malformed_date() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/calculate")
        .json(&json!({ "full_name": "Aryan", "dob": "2003-09-07" }))
        .await;

    response.assert_status_bad_request();
    let result: CalculateResponse = response.json();
    assert!(!result.success);
    assert!(result.results.is_none());
    assert!(result.error.is_some());
}

#[tokio::test]
async fn test_calculate_impossible_date() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/calculate")
        .json(&json!({ "full_name": "Aryan", "dob": "30/02/2003" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_calculate_empty_name() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/calculate")
        .json(&json!({ "full_name": "123 !!", "dob": "07/09/2003" }))
        .await;

    response.assert_status_bad_request();
    let result: CalculateResponse = response.json();
    assert!(!result.success);
}

#[tokio::test]
async fn test_calculate_bad_evaluation_date() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/calculate")
        .json(&json!({ "full_name": "Aryan", "dob": "07/09/2003", "at": "19/10/2026" }))
        .await;

    response.assert_status_bad_request();
}

// =============================================================================
// PROFILE CACHE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_profile_empty_cache() {
    let (server, _dir) = create_test_server();

    let response = server.get("/profile").await;

    response.assert_status_not_found();
    let result: ProfileResponse = response.json();
    assert!(!result.success);
    assert!(result.snapshot.is_none());
}

#[tokio::test]
async fn test_save_then_load_then_clear() {
    let (server, _dir) = create_test_server();

    let mut request = aryan();
    request["save"] = json!(true);
    let response = server.post("/calculate").json(&request).await;
    response.assert_status_ok();
    let result: CalculateResponse = response.json();
    assert!(result.saved);

    let response = server.get("/profile").await;
    response.assert_status_ok();
    let profile: ProfileResponse = response.json();
    let snapshot = profile.snapshot.unwrap();
    assert_eq!(snapshot.profile.full_name, "Aryan");
    assert_eq!(snapshot.profile.system, LetterSystem::Chaldean);
    assert_eq!(snapshot.results, result.results.unwrap());

    let response = server.delete("/profile").await;
    response.assert_status_ok();
    let cleared: ClearResponse = response.json();
    assert!(cleared.success);
    assert!(cleared.cleared);

    server.get("/profile").await.assert_status_not_found();

    let response = server.delete("/profile").await;
    let cleared: ClearResponse = response.json();
    assert!(!cleared.cleared);
}

#[tokio::test]
async fn test_save_without_cache_is_not_fatal() {
    let state = AppState::new(ProfileDefaults::default(), None);
    let router = create_router(
        state,
        &ServerConfig {
            rate_limit: 0,
            ..ServerConfig::default()
        },
    );
    let server = TestServer::new(router).unwrap();

    let mut request = aryan();
    request["save"] = json!(true);
    let response = server.post("/calculate").json(&request).await;

    response.assert_status_ok();
    let result: CalculateResponse = response.json();
    assert!(result.success);
    assert!(!result.saved);

    server.get("/profile").await.assert_status_not_found();
}

// =============================================================================
// TUNE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_tune_default_search() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/tune")
        .json(&json!({ "full_name": "Aryan" }))
        .await;

    response.assert_status_ok();
    let result: TuneResponse = response.json();
    assert!(result.success);
    assert_eq!(result.baseline, Some(1));
    let names: Vec<&str> = result.suggestions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["BRYAN", "ARYAC", "ARYAB"]);
    for suggestion in &result.suggestions {
        assert_ne!(suggestion.new_expression, 1);
    }
}

#[tokio::test]
async fn test_tune_max_suggestions() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/tune")
        .json(&json!({ "full_name": "Aryan", "alphabet": "ABCDEFG", "max_suggestions": 1 }))
        .await;

    response.assert_status_ok();
    let result: TuneResponse = response.json();
    assert_eq!(result.suggestions.len(), 1);
}

#[tokio::test]
async fn test_tune_invalid_alphabet() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/tune")
        .json(&json!({ "full_name": "Aryan", "alphabet": "A1" }))
        .await;

    response.assert_status_bad_request();
    let result: TuneResponse = response.json();
    assert!(!result.success);
    assert!(result.suggestions.is_empty());
}

#[tokio::test]
async fn test_tune_empty_name() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/tune")
        .json(&json!({ "full_name": "!!!" }))
        .await;

    response.assert_status_bad_request();
}

// =============================================================================
// COMPATIBILITY ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_compatibility_with_self() {
    let (server, _dir) = create_test_server();

    let profile = json!({ "full_name": "Aryan", "dob": "07/09/2003" });
    let response = server
        .post("/compatibility")
        .json(&json!({ "a": profile, "b": profile, "at": "2026-10-19" }))
        .await;

    response.assert_status_ok();
    let result: CompatibilityResponse = response.json();
    let report = result.report.unwrap();
    assert_eq!(report.percentage, 100);
    assert_eq!(report.band, CompatibilityBand::Excellent);
    assert_eq!(report.results_a, report.results_b);
}

#[tokio::test]
async fn test_compatibility_rejects_bad_profile() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/compatibility")
        .json(&json!({
            "a": { "full_name": "Aryan", "dob": "07/09/2003" },
            "b": { "full_name": "Maya", "dob": "31/04/1999" }
        }))
        .await;

    response.assert_status_bad_request();
    let result: CompatibilityResponse = response.json();
    assert!(result.report.is_none());
}

// =============================================================================
// MEANING ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_meaning_master_number() {
    let (server, _dir) = create_test_server();

    let response = server.get("/meaning/22").await;

    response.assert_status_ok();
    let meaning: MeaningResponse = response.json();
    assert_eq!(meaning.number, 22);
    assert!(meaning.summary.is_some());
    assert_eq!(meaning.strengths.len(), 3);
    assert!(meaning.lucky_day.is_some());
}

#[tokio::test]
async fn test_meaning_karmic_debt() {
    let (server, _dir) = create_test_server();

    let response = server.get("/meaning/13").await;

    response.assert_status_ok();
    let meaning: MeaningResponse = response.json();
    assert!(meaning.summary.is_none());
    assert!(meaning.karmic_debt.is_some());
}

#[tokio::test]
async fn test_meaning_unknown_number() {
    let (server, _dir) = create_test_server();

    server.get("/meaning/10").await.assert_status_not_found();
}

// =============================================================================
// RATE LIMIT TESTS
// =============================================================================

#[tokio::test]
async fn test_rate_limit_exhausted() {
    let (server, _dir) = create_test_server_with(ServerConfig {
        rate_limit: 1,
        ..ServerConfig::default()
    });

    server.get("/health").await.assert_status_ok();
    let response = server.get("/health").await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    let retry_after: u64 = response
        .header("retry-after")
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(retry_after >= 1);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}

// =============================================================================
// BODY LIMIT TESTS
// =============================================================================

#[tokio::test]
async fn test_oversized_body_rejected() {
    let (server, _dir) = create_test_server();

    let response = server
        .post("/calculate")
        .json(&json!({ "full_name": "A".repeat(128 * 1024), "dob": "07/09/2003" }))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}
