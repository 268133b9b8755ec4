//! Feature modules.
//!
//! These are deliberately thin: the interesting machinery lives in the
//! authorization pipeline that wraps them. Each module follows the
//! controller/model/router convention.

pub mod admin;
pub mod health;
pub mod issues;
pub mod users;
