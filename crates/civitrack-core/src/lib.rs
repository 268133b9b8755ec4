//! # CiviTrack Core
//!
//! Core types for the CiviTrack API.
//!
//! This crate provides the foundational pieces shared across the workspace:
//!
//! - [`errors`]: application error taxonomy with HTTP response conversion
//! - [`permissions`]: roles, capabilities, and the static permission table
//!
//! # Example
//!
//! ```ignore
//! use civitrack_core::errors::AppError;
//! use civitrack_core::permissions::{allows, Capability, Role};
//!
//! if !allows(Role::Officer, Capability::Delete) {
//!     return Err(AppError::forbidden("Officers cannot delete issues"));
//! }
//! ```

pub mod errors;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorCode};
pub use permissions::{Capability, Role};
