//! Middleware for the request authorization pipeline.
//!
//! Every inbound request flows through these stages, outermost first:
//!
//! 1. [`headers`]: security headers on every response, plus the production
//!    HTTPS redirect that runs before anything else
//! 2. [`cors`]: origin negotiation; preflights short-circuit here with a
//!    204 and are never auth-gated
//! 3. [`auth`]: the authorization gate on protected route nests
//!
//! Because CORS and the security headers wrap the auth gate, every
//! rejection the gate produces still carries correct CORS and hardening
//! headers on the way out — an error response without them would be
//! swallowed by the browser as an opaque network failure.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware::from_fn_with_state};
//! use crate::middleware::auth::{require_auth, require_admin};
//!
//! let api = Router::new()
//!     .nest("/issues", issues_router()
//!         .route_layer(from_fn_with_state(state.clone(), require_auth)))
//!     .nest("/admin", admin_router()
//!         .route_layer(from_fn_with_state(state.clone(), require_admin)));
//! ```

pub mod auth;
pub mod cors;
pub mod headers;
