//! # CiviTrack API
//!
//! The authorization core of a municipal issue-tracking API, built with
//! axum. The pipeline in front of every sensitive route does four things:
//!
//! - **Token verification**: `Authorization: Bearer <jwt>` headers are
//!   verified against a single injected secret; verification is
//!   all-or-nothing and fails closed.
//! - **Permission gating**: a closed role enumeration (citizen, officer,
//!   admin) mapped to capabilities (create/read/update/delete) by a static
//!   table; role-gated route nests reject mismatched roles with 403.
//! - **CORS negotiation**: allow-listed origins are echoed verbatim,
//!   disallowed origins fall back (fail-closed) to a configured default,
//!   and preflights are answered 204 before any auth check.
//! - **Security headers**: a fixed hardening set on every response, with
//!   HSTS and a 308 HTTPS redirect in production.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── civitrack-core     # error taxonomy, roles/capabilities table
//! ├── civitrack-config   # env-sourced immutable configuration
//! └── civitrack-auth     # JWT claims, issue/verify
//! src/
//! ├── middleware/        # auth gate, CORS negotiator, security headers
//! ├── modules/           # thin handlers the pipeline wraps
//! ├── logging.rs         # tracing setup + request logging
//! ├── router.rs          # composition and layer ordering
//! └── state.rs           # shared application state
//! ```
//!
//! ## Error envelope
//!
//! Every pipeline rejection renders as
//! `{"success": false, "message": ..., "error": {"code": ...}}` with codes
//! `MISSING_CREDENTIAL` (401), `INVALID_OR_EXPIRED_CREDENTIAL` (403),
//! `FORBIDDEN` (403), `NOT_FOUND` (404), and `INTERNAL_ERROR` (500).
//!
//! ## Environment variables
//!
//! ```bash
//! JWT_SECRET=change-me
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=https://app.city.gov,https://staff.city.gov
//! DEFAULT_ORIGIN=https://app.city.gov
//! APP_ENV=production   # enables HSTS + HTTPS redirect
//! HOST=0.0.0.0
//! PORT=3000
//! ```

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use civitrack_auth;
pub use civitrack_config;
pub use civitrack_core;
