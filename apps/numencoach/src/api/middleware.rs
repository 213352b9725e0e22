//! # Middleware Module
//!
//! Global request quota for the NumenCoach HTTP API.
//!
//! The quota comes from `[server] rate_limit` (or `NUMENCOACH_RATE_LIMIT`).
//! Rejections use the same `{ success, error }` body as every other
//! endpoint and carry a `Retry-After` header in whole seconds.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{
    Quota, RateLimiter,
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Used when the configured quota is zero.
const DEFAULT_RPS: NonZeroU32 = NonZeroU32::MIN.saturating_add(99);

// =============================================================================
// RATE LIMITER
// =============================================================================

/// Process-wide limiter shared by every route.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Build a limiter for `requests_per_second`.
///
/// Zero falls back to [`DEFAULT_RPS`]; the router disables limiting by
/// not installing the middleware at all.
pub fn create_rate_limiter(requests_per_second: u32) -> GlobalRateLimiter {
    let rps = NonZeroU32::new(requests_per_second).unwrap_or(DEFAULT_RPS);
    Arc::new(RateLimiter::direct(Quota::per_second(rps)))
}

/// Whole seconds to wait, rounded up, never below one.
fn retry_after_secs(wait: Duration) -> u64 {
    let secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
    secs.max(1)
}

/// Pass the request through, or answer 429 once the quota is spent.
pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match limiter.check() {
        Ok(()) => next.run(request).await,
        Err(not_until) => {
            let wait = not_until.wait_time_from(DefaultClock::default().now());
            let retry_after = retry_after_secs(wait);
            tracing::warn!(retry_after, "Rate limit exceeded");
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after.to_string())],
                Json(serde_json::json!({
                    "success": false,
                    "error": "Too many requests",
                })),
            )
                .into_response()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
