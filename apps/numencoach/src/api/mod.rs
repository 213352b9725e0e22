//! # NumenCoach HTTP API Module
//!
//! This module implements the HTTP JSON API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /calculate` - Full results bundle and coaching text for a profile
//! - `POST /tune` - Name Tuner suggestions
//! - `POST /compatibility` - Compare two profiles
//! - `GET /meaning/{number}` - Narrative tables for a number
//! - `GET /profile` - Last cached profile snapshot
//! - `DELETE /profile` - Clear the cached profile
//!
//! ## Security Configuration
//!
//! From `[server]` in the config file, or the environment:
//!
//! - `cors_origins` / `NUMENCOACH_CORS_ORIGINS`: allowed origins, or "*" for all (default: localhost only)
//! - `rate_limit` / `NUMENCOACH_RATE_LIMIT`: requests per second (default: 100, 0 to disable)

mod handlers;
mod middleware;
mod types;

pub use middleware::{GlobalRateLimiter, create_rate_limiter};
// Re-export handlers and types for integration tests (via `numencoach::api::*`)
#[allow(unused_imports)]
pub use handlers::{
    calculate_handler, clear_profile_handler, compatibility_handler, get_profile_handler,
    health_handler, meaning_handler, tune_handler,
};
#[allow(unused_imports)]
pub use types::{
    CalculateRequest, CalculateResponse, ClearResponse, CompatibilityRequest,
    CompatibilityResponse, HealthResponse, KarmicDebtJson, MeaningResponse, ProfileInput,
    ProfileResponse, TuneRequest, TuneResponse,
};

use crate::config::{AppConfig, ProfileDefaults, ServerConfig};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use numencoach_core::{NumerologyError, ProfileCache};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size.
const MAX_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: profile defaults and the optional cache.
#[derive(Clone)]
pub struct AppState {
    pub defaults: ProfileDefaults,
    /// `None` disables `/profile` and `save`.
    pub cache: Option<Arc<ProfileCache>>,
}

impl AppState {
    #[must_use]
    pub fn new(defaults: ProfileDefaults, cache: Option<ProfileCache>) -> Self {
        Self {
            defaults,
            cache: cache.map(Arc::new),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from the configured origins.
///
/// - `["*"]`: allows all origins
/// - empty: localhost only
/// - otherwise: the listed origins; invalid entries are skipped
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
        return CorsLayer::permissive();
    }

    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(hv) => {
                tracing::info!("CORS: Allowing origin: {}", origin);
                Some(hv)
            }
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if allowed_origins.is_empty() {
        tracing::info!("CORS: No origins configured, defaulting to localhost only");
        return build_localhost_cors();
    }

    restricted_cors(allowed_origins)
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    restricted_cors(origins)
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting - global quota (if enabled)
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/calculate", post(handlers::calculate_handler))
        .route("/tune", post(handlers::tune_handler))
        .route("/compatibility", post(handlers::compatibility_handler))
        .route("/meaning/{number}", get(handlers::meaning_handler))
        .route(
            "/profile",
            get(handlers::get_profile_handler).delete(handlers::clear_profile_handler),
        );

    if server.rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", server.rate_limit);
        router = router.layer(axum_middleware::from_fn_with_state(
            create_rate_limiter(server.rate_limit),
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer(&server.cors_origins))
                .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(
    config: &AppConfig,
    cache: Option<ProfileCache>,
) -> Result<(), NumerologyError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config.defaults, cache);
    let router = create_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| NumerologyError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("NumenCoach HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| NumerologyError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler, run until the process is killed.
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
