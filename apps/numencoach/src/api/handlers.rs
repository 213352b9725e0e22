//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{
        CalculateRequest, CalculateResponse, ClearResponse, CompatibilityRequest,
        CompatibilityResponse, HealthResponse, MeaningResponse, ProfileResponse, TuneRequest,
        TuneResponse,
    },
};
use crate::evaluation_instant;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use numencoach_core::{
    CompatibilityReport, NameTuner, NumerologyError, ProfileSnapshot, TunerConfig,
    calculate_all_numbers, calculate_compatibility, coaching_text, compute_name_numbers,
    normalize_name,
};

/// Client mistakes are 400; everything else is a server fault.
fn error_status(error: &NumerologyError) -> StatusCode {
    match error {
        NumerologyError::MalformedDate(_)
        | NumerologyError::EmptyName
        | NumerologyError::UnknownSystem(_)
        | NumerologyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        NumerologyError::SerializationError(_)
        | NumerologyError::DeserializationError(_)
        | NumerologyError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// CALCULATE HANDLER
// =============================================================================

/// Run the full engine on one profile, optionally caching the result.
pub async fn calculate_handler(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> impl IntoResponse {
    let outcome = request
        .profile
        .to_profile(&state.defaults)
        .and_then(|profile| {
            let at = evaluation_instant(request.at.as_deref())?;
            let results = calculate_all_numbers(&profile, at)?;
            Ok((profile, results))
        });

    let (profile, results) = match outcome {
        Ok(v) => v,
        Err(e) => {
            return (
                error_status(&e),
                Json(CalculateResponse::error(format!("Calculation failed: {}", e))),
            );
        }
    };
    let coaching = coaching_text(&results);

    let mut saved = false;
    if request.save {
        match &state.cache {
            Some(cache) => {
                let snapshot = ProfileSnapshot::new(profile, results.clone(), Utc::now());
                if let Err(e) = cache.save(&snapshot) {
                    tracing::error!("Profile cache save failed: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(CalculateResponse::error(format!("Save failed: {}", e))),
                    );
                }
                saved = true;
            }
            None => tracing::warn!("Save requested but no profile cache is configured"),
        }
    }

    tracing::debug!(
        life_path = results.life_path.value,
        expression = results.expression.value,
        saved,
        "Profile calculated"
    );
    (
        StatusCode::OK,
        Json(CalculateResponse::success(results, coaching, saved)),
    )
}

// =============================================================================
// TUNE HANDLER
// =============================================================================

/// Suggest spellings with a different Expression.
pub async fn tune_handler(
    State(state): State<AppState>,
    Json(request): Json<TuneRequest>,
) -> impl IntoResponse {
    if let Err(e) = request.validate() {
        return (
            error_status(&e),
            Json(TuneResponse::error(format!("Invalid request: {}", e))),
        );
    }
    if normalize_name(&request.full_name).is_empty() {
        let e = NumerologyError::EmptyName;
        return (
            error_status(&e),
            Json(TuneResponse::error(format!("Invalid request: {}", e))),
        );
    }

    let system = request.system.unwrap_or(state.defaults.system);
    let preserve = request
        .preserve_masters
        .unwrap_or(state.defaults.preserve_masters);

    let mut config = TunerConfig::default();
    if let Some(alphabet) = request.alphabet {
        config.alphabet = alphabet;
    }
    if let Some(max) = request.max_suggestions {
        config.max_suggestions = max;
    }

    let baseline = compute_name_numbers(&request.full_name, system, preserve)
        .expression
        .value;
    let suggestions = NameTuner::with_config(system, preserve, config).suggest(&request.full_name);

    (
        StatusCode::OK,
        Json(TuneResponse::success(baseline, suggestions)),
    )
}

// =============================================================================
// COMPATIBILITY HANDLER
// =============================================================================

/// Compare two profiles.
pub async fn compatibility_handler(
    State(state): State<AppState>,
    Json(request): Json<CompatibilityRequest>,
) -> impl IntoResponse {
    match compare(&state, &request) {
        Ok(report) => (
            StatusCode::OK,
            Json(CompatibilityResponse::success(report)),
        ),
        Err(e) => (
            error_status(&e),
            Json(CompatibilityResponse::error(format!("Comparison failed: {}", e))),
        ),
    }
}

fn compare(
    state: &AppState,
    request: &CompatibilityRequest,
) -> Result<CompatibilityReport, NumerologyError> {
    let a = request.a.to_profile(&state.defaults)?;
    let b = request.b.to_profile(&state.defaults)?;
    let at = evaluation_instant(request.at.as_deref())?;
    calculate_compatibility(&a, &b, at)
}

// =============================================================================
// MEANING HANDLER
// =============================================================================

/// Narrative tables for one number. 404 when no table has an entry.
pub async fn meaning_handler(Path(number): Path<u32>) -> impl IntoResponse {
    let response = MeaningResponse::lookup(number);
    let status = if response.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(response))
}

// =============================================================================
// CACHED PROFILE HANDLERS
// =============================================================================

/// The last saved profile snapshot.
pub async fn get_profile_handler(State(state): State<AppState>) -> impl IntoResponse {
    let Some(cache) = &state.cache else {
        return (
            StatusCode::NOT_FOUND,
            Json(ProfileResponse::error("No profile cache configured")),
        );
    };

    match cache.load() {
        Ok(Some(snapshot)) => (StatusCode::OK, Json(ProfileResponse::found(snapshot))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ProfileResponse::error("No cached profile")),
        ),
        Err(e) => {
            tracing::error!("Profile cache load failed: {}", e);
            (
                error_status(&e),
                Json(ProfileResponse::error(format!("Load failed: {}", e))),
            )
        }
    }
}

/// Remove the saved profile snapshot.
pub async fn clear_profile_handler(State(state): State<AppState>) -> impl IntoResponse {
    let Some(cache) = &state.cache else {
        return (
            StatusCode::NOT_FOUND,
            Json(ClearResponse {
                success: false,
                cleared: false,
                error: Some("No profile cache configured".to_string()),
            }),
        );
    };

    match cache.clear() {
        Ok(cleared) => (
            StatusCode::OK,
            Json(ClearResponse {
                success: true,
                cleared,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!("Profile cache clear failed: {}", e);
            (
                error_status(&e),
                Json(ClearResponse {
                    success: false,
                    cleared: false,
                    error: Some(format!("Clear failed: {}", e)),
                }),
            )
        }
    }
}
