//! Token issue and verification.
//!
//! Verification is a pure, synchronous function of the token and the
//! injected secret: no I/O, no retries, nothing to clean up if the caller
//! disconnects. Failure is definitive and all-or-nothing — a token that
//! does not verify yields no [`Principal`] under any circumstance.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};

use civitrack_config::JwtConfig;
use civitrack_core::{AppError, Role};

use crate::claims::{Claims, Principal};

/// Creates a signed access token for the given subject.
///
/// `email` and `role` are optional claims; when absent they are left out
/// of the token entirely rather than written as empty values.
///
/// # Errors
///
/// Returns an internal error if encoding fails (e.g. unusable secret).
pub fn issue_access_token(
    subject: &str,
    email: Option<&str>,
    role: Option<Role>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: subject.to_string(),
        email: email.map(str::to_string),
        role: role.map(|r| r.as_str().to_string()),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("Failed to create token: {}", e)))
}

/// Verifies a raw token string and returns the decoded [`Principal`].
///
/// # Errors
///
/// - `InvalidOrExpiredCredential` for a malformed token, a bad signature,
///   or an expired `exp` claim.
/// - `InternalError` for key/library faults; the detail goes to the server
///   log, never to the client.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Principal, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| Principal::from_claims(data.claims))
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidKeyFormat
        | ErrorKind::InvalidEcdsaKey
        | ErrorKind::InvalidRsaKey(_)
        | ErrorKind::Crypto(_) => AppError::internal(format!("token verification fault: {}", e)),
        _ => AppError::invalid_credential("Invalid or expired token"),
    })
}

/// Verifies an `Authorization` header value of the form `Bearer <token>`.
///
/// An absent header or one without the `Bearer ` prefix is
/// `MissingCredential`; everything else defers to [`verify_token`].
pub fn verify_bearer(
    header_value: Option<&str>,
    jwt_config: &JwtConfig,
) -> Result<Principal, AppError> {
    let header_value = header_value
        .ok_or_else(|| AppError::missing_credential("Missing authorization header"))?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::missing_credential("Invalid authorization header format"))?;

    verify_token(token, jwt_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use civitrack_core::ErrorCode;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_round_trip_preserves_claims() {
        let config = get_test_jwt_config();

        let token =
            issue_access_token("1", Some("a@b.com"), Some(Role::Officer), &config).unwrap();
        let principal = verify_token(&token, &config).unwrap();

        assert_eq!(
            principal,
            Principal {
                id: "1".to_string(),
                email: Some("a@b.com".to_string()),
                role: Some(Role::Officer),
            }
        );
    }

    #[test]
    fn test_verify_garbage_token() {
        let config = get_test_jwt_config();
        let err = verify_token("not-a-jwt", &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOrExpiredCredential);
    }

    #[test]
    fn test_verify_wrong_secret() {
        let config = get_test_jwt_config();
        let token = issue_access_token("7", None, Some(Role::Admin), &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };

        let err = verify_token(&token, &wrong_config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOrExpiredCredential);
    }

    #[test]
    fn test_verify_expired_token() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "7".to_string(),
            email: None,
            role: Some("citizen".to_string()),
            exp: now - 7200,
            iat: now - 10800,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOrExpiredCredential);
    }

    #[test]
    fn test_verify_bearer_missing_header() {
        let config = get_test_jwt_config();
        let err = verify_bearer(None, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingCredential);
    }

    #[test]
    fn test_verify_bearer_malformed_prefix() {
        let config = get_test_jwt_config();
        let token = issue_access_token("7", None, None, &config).unwrap();

        let err = verify_bearer(Some(&format!("Token {}", token)), &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingCredential);

        let err = verify_bearer(Some(&token), &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingCredential);
    }

    #[test]
    fn test_verify_bearer_success() {
        let config = get_test_jwt_config();
        let token = issue_access_token("3", None, Some(Role::Admin), &config).unwrap();

        let principal = verify_bearer(Some(&format!("Bearer {}", token)), &config).unwrap();
        assert_eq!(principal.id, "3");
        assert_eq!(principal.role, Some(Role::Admin));
    }

    #[test]
    fn test_absent_optional_claims_stay_absent() {
        let config = get_test_jwt_config();
        let token = issue_access_token("11", None, None, &config).unwrap();

        let principal = verify_token(&token, &config).unwrap();
        assert!(principal.email.is_none());
        assert!(principal.role.is_none());
    }
}
