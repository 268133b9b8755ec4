//! Origin-aware CORS negotiation.
//!
//! The allow-list semantics cannot be expressed with
//! `tower_http::cors::CorsLayer`: an allowed origin must be echoed back
//! verbatim (credentialed requests forbid a wildcard), and a disallowed
//! origin falls back to the configured default origin — but only if that
//! default is itself a member of the allow-list. The fallback never grants
//! the caller's own origin anything; it is fail-closed by design, not an
//! error.
//!
//! Preflight `OPTIONS` requests are answered here with a 204 and CORS
//! headers only, before routing and before any auth check — a gated
//! preflight would make browsers abort the real request.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use civitrack_config::CorsConfig;

use crate::state::AppState;

const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";
const EXPOSED_HEADERS: &str = "Set-Cookie";
const MAX_AGE_SECONDS: &str = "86400";

/// Decide which origin, if any, a response may be shared with.
///
/// Pure function of its inputs:
/// - no `Origin` header → `None` (same-origin or non-browser caller, no
///   CORS headers at all)
/// - origin in the allow-list → echoed verbatim
/// - otherwise the configured default origin, but only if the default is
///   itself allow-listed; else `None`
pub fn resolve_origin<'a>(
    request_origin: Option<&'a str>,
    config: &'a CorsConfig,
) -> Option<&'a str> {
    let origin = request_origin?;

    if config.allowed_origins.iter().any(|o| o == origin) {
        return Some(origin);
    }

    if config.allowed_origins.iter().any(|o| *o == config.default_origin) {
        return Some(config.default_origin.as_str());
    }

    None
}

/// CORS middleware. Applied outside the auth gate so every response,
/// including every rejection, carries the negotiated headers.
pub async fn cors_middleware(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let request_origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let resolved =
        resolve_origin(request_origin.as_deref(), &state.cors_config).map(str::to_owned);

    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut(), resolved.as_deref());
        return response;
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut(), resolved.as_deref());
    response
}

/// Emit the CORS header set for a resolved origin. With no resolved origin
/// only `Vary: Origin` is written, so caches never mix origins.
fn apply_cors_headers(headers: &mut HeaderMap, resolved_origin: Option<&str>) {
    headers.append(header::VARY, HeaderValue::from_static("Origin"));

    let Some(origin) = resolved_origin else {
        return;
    };
    let Ok(origin_value) = HeaderValue::from_str(origin) else {
        return;
    };

    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin_value);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static(EXPOSED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(MAX_AGE_SECONDS),
    );
}
