//! Application error types with HTTP response conversion.
//!
//! Every rejection produced by the authorization pipeline (and by the
//! handlers it wraps) is an [`AppError`]: a closed [`ErrorCode`] plus a
//! client-facing message. Converting an `AppError` into a response yields
//! the JSON envelope
//!
//! ```json
//! { "success": false, "message": "...", "error": { "code": "..." } }
//! ```
//!
//! Internal faults keep their detail in the server log only; the client
//! always receives a generic message for those.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use std::fmt;

/// Closed set of error codes the API can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No `Authorization` header, or one without a `Bearer ` prefix.
    MissingCredential,
    /// The token failed verification: malformed, bad signature, or expired.
    InvalidOrExpiredCredential,
    /// The credential verified but the role does not permit the operation.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// Unexpected fault inside the pipeline or a handler.
    InternalError,
}

impl ErrorCode {
    /// HTTP status this code maps to.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::MissingCredential => StatusCode::UNAUTHORIZED,
            ErrorCode::InvalidOrExpiredCredential => StatusCode::FORBIDDEN,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::MissingCredential => "MISSING_CREDENTIAL",
            ErrorCode::InvalidOrExpiredCredential => "INVALID_OR_EXPIRED_CREDENTIAL",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingCredential, message)
    }

    pub fn invalid_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidOrExpiredCredential, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Internal fault. The detail is logged server-side; the client only
    /// ever sees a generic message.
    pub fn internal(detail: impl fmt::Display) -> Self {
        tracing::error!(detail = %detail, "internal error in request pipeline");
        Self::new(ErrorCode::InternalError, "Internal server error")
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.message,
            "error": { "code": self.code }
        }));

        (self.status(), body).into_response()
    }
}
