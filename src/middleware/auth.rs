//! The authorization gate.
//!
//! A protected request moves through `Unauthenticated -> TokenPresented ->
//! Verified -> Authorized`, or terminates `Rejected` at any step:
//!
//! - no/malformed `Authorization` header → 401 `MissingCredential`
//! - failed token verification → 403 `InvalidOrExpiredCredential`
//! - role not in the route's allowed set → 403 `Forbidden`
//!
//! [`authorize`] is the whole machine as a pure synchronous function;
//! [`require_auth`] / [`require_officer`] / [`require_admin`] adapt it to
//! `axum::middleware::from_fn_with_state` route layers, and [`AuthUser`]
//! is the extractor handlers use to read the forwarded identity.
//!
//! On success the principal is attached to the forwarded request as a
//! request extension and as read-only `x-auth-*` headers for the
//! downstream handler; nothing else about the request is mutated.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, HeaderValue, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use civitrack_auth::{Principal, verify_bearer};
use civitrack_config::JwtConfig;
use civitrack_core::{AppError, Capability, Role};

use crate::state::AppState;

/// Run the gate against a request's headers.
///
/// An empty `allowed_roles` slice means any verified credential passes;
/// a non-empty slice additionally demands the principal's role be one of
/// its members. A verified token with no (known) role never satisfies a
/// role demand — the credential is fine, the authorization is not, so the
/// rejection is `Forbidden` rather than a credential error.
pub fn authorize(
    headers: &HeaderMap,
    allowed_roles: &[Role],
    jwt_config: &JwtConfig,
) -> Result<Principal, AppError> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let principal = verify_bearer(header_value, jwt_config)?;

    if !allowed_roles.is_empty() {
        match principal.role {
            Some(role) if allowed_roles.contains(&role) => {}
            _ => {
                return Err(AppError::forbidden(
                    "Access denied. Your role does not permit this operation.",
                ));
            }
        }
    }

    Ok(principal)
}

/// Capability check for use inside handlers, after the gate has run.
pub fn require_capability(principal: &Principal, capability: Capability) -> Result<(), AppError> {
    if !principal.can(capability) {
        return Err(AppError::forbidden(
            "Access denied. Your role does not permit this operation.",
        ));
    }
    Ok(())
}

/// Middleware that gates a route nest on the given roles and annotates the
/// forwarded request with the verified identity.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &'static [Role],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let principal = authorize(&parts.headers, allowed_roles, &state.jwt_config)?;

    annotate(&mut parts.headers, &principal);
    parts.extensions.insert(principal);

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Any verified credential may pass.
pub async fn require_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, &[]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Officer-or-above routes.
pub async fn require_officer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, &[Role::Officer, Role::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Admin-only routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, &[Role::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Attach the identity as read-only context headers for the downstream
/// handler. Values that are not valid header text are simply skipped.
fn annotate(headers: &mut HeaderMap, principal: &Principal) {
    if let Ok(value) = HeaderValue::from_str(&principal.id) {
        headers.insert("x-auth-subject", value);
    }
    if let Some(email) = &principal.email
        && let Ok(value) = HeaderValue::from_str(email)
    {
        headers.insert("x-auth-email", value);
    }
    if let Some(role) = principal.role {
        headers.insert("x-auth-role", HeaderValue::from_static(role.as_str()));
    }
}

/// Extractor that provides the authenticated principal to a handler.
///
/// Prefers the principal a route-layer gate already attached; on routes
/// without a gate it runs verification itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(principal) = parts.extensions.get::<Principal>() {
            return Ok(AuthUser(principal.clone()));
        }

        let principal = authorize(&parts.headers, &[], &state.jwt_config)?;
        Ok(AuthUser(principal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civitrack_auth::issue_access_token;
    use civitrack_core::ErrorCode;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret-key-32-characters-xx".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn headers_with_token(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn test_no_header_is_missing_credential() {
        let err = authorize(&HeaderMap::new(), &[], &test_jwt_config()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingCredential);
    }

    #[test]
    fn test_garbage_token_is_invalid_credential() {
        let headers = headers_with_token("garbage");
        let err = authorize(&headers, &[], &test_jwt_config()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOrExpiredCredential);
    }

    #[test]
    fn test_wrong_role_is_forbidden() {
        let config = test_jwt_config();
        let token = issue_access_token("1", None, Some(Role::Officer), &config).unwrap();
        let headers = headers_with_token(&token);

        let err = authorize(&headers, &[Role::Admin], &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn test_roleless_token_on_role_gated_route_is_forbidden() {
        let config = test_jwt_config();
        let token = issue_access_token("1", None, None, &config).unwrap();
        let headers = headers_with_token(&token);

        let err = authorize(&headers, &[Role::Admin], &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn test_matching_role_is_authorized() {
        let config = test_jwt_config();
        let token =
            issue_access_token("1", Some("clerk@city.gov"), Some(Role::Admin), &config).unwrap();
        let headers = headers_with_token(&token);

        let principal = authorize(&headers, &[Role::Admin], &config).unwrap();
        assert_eq!(principal.id, "1");
        assert_eq!(principal.role, Some(Role::Admin));
    }

    #[test]
    fn test_empty_role_set_accepts_any_verified_token() {
        let config = test_jwt_config();
        let token = issue_access_token("1", None, Some(Role::Citizen), &config).unwrap();
        let headers = headers_with_token(&token);

        assert!(authorize(&headers, &[], &config).is_ok());
    }

    #[test]
    fn test_annotate_sets_context_headers() {
        let principal = Principal {
            id: "42".to_string(),
            email: Some("a@b.com".to_string()),
            role: Some(Role::Officer),
        };
        let mut headers = HeaderMap::new();
        annotate(&mut headers, &principal);

        assert_eq!(headers.get("x-auth-subject").unwrap(), "42");
        assert_eq!(headers.get("x-auth-email").unwrap(), "a@b.com");
        assert_eq!(headers.get("x-auth-role").unwrap(), "officer");
    }

    #[test]
    fn test_annotate_skips_absent_claims() {
        let principal = Principal {
            id: "42".to_string(),
            email: None,
            role: None,
        };
        let mut headers = HeaderMap::new();
        annotate(&mut headers, &principal);

        assert!(headers.get("x-auth-email").is_none());
        assert!(headers.get("x-auth-role").is_none());
    }

    #[test]
    fn test_require_capability_fails_closed() {
        let citizen = Principal {
            id: "1".to_string(),
            email: None,
            role: Some(Role::Citizen),
        };
        assert!(require_capability(&citizen, Capability::Read).is_ok());
        let err = require_capability(&citizen, Capability::Delete).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
