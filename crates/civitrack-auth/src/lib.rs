//! # CiviTrack Auth
//!
//! JWT claims and token verification for the CiviTrack API.
//!
//! The credential is an opaque HS256-signed JWT carrying
//! `{sub, email?, role?, exp, iat}`. Verification is all-or-nothing: a
//! token that cannot be verified never yields a [`Principal`], and the
//! secret always comes from an injected [`civitrack_config::JwtConfig`]
//! rather than ambient process state.
//!
//! # Example
//!
//! ```ignore
//! use civitrack_auth::{issue_access_token, verify_bearer};
//! use civitrack_config::JwtConfig;
//! use civitrack_core::Role;
//!
//! let config = JwtConfig::from_env();
//! let token = issue_access_token("42", Some("clerk@city.gov"), Some(Role::Officer), &config)?;
//! let principal = verify_bearer(Some(&format!("Bearer {token}")), &config)?;
//! assert_eq!(principal.role, Some(Role::Officer));
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used items at crate root
pub use claims::{Claims, Principal};
pub use jwt::{issue_access_token, verify_bearer, verify_token};
