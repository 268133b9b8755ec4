//! Baseline security headers and transport enforcement.
//!
//! The header set is fixed and applied idempotently (`if_not_present`) at
//! the router level, so a handler that already set one of them wins. In a
//! production-designated environment HSTS is added and plaintext requests
//! are answered with a 308 to the HTTPS-equivalent URL before any other
//! pipeline stage runs; 308 preserves method and body across the redirect.

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

/// Apply the hardening header set to all responses.
pub fn apply(router: Router, production: bool) -> Router {
    let router = router
        // Clickjacking protection (legacy + modern)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("frame-ancestors 'none'"),
        ))
        // Prevent MIME sniffing
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        // Limit referrer leakage
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        // Disable powerful browser features by default
        .layer(SetResponseHeaderLayer::if_not_present(
            header::HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("camera=(), microphone=(), geolocation=()"),
        ));

    if production {
        router.layer(SetResponseHeaderLayer::if_not_present(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=63072000; includeSubDomains"),
        ))
    } else {
        router
    }
}

/// Production HTTPS enforcement. Trusts `x-forwarded-proto` from the
/// fronting proxy; a plaintext request is redirected permanently (308) to
/// the same path and query over HTTPS.
pub async fn https_redirect(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if state.server_config.production {
        let plaintext = req
            .headers()
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            == Some("http");

        if plaintext
            && let Some(host) = req
                .headers()
                .get(header::HOST)
                .and_then(|value| value.to_str().ok())
        {
            let target = match req.uri().path_and_query() {
                Some(pq) => format!("https://{}{}", host, pq),
                None => format!("https://{}", host),
            };
            return Redirect::permanent(&target).into_response();
        }
    }

    next.run(req).await
}
