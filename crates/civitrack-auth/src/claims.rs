//! JWT claim structures and the per-request decoded identity.

use civitrack_core::{Capability, Role, permissions};
use serde::{Deserialize, Serialize};

/// JWT claims for access tokens.
///
/// `email` and `role` are optional on the wire: a token without them
/// decodes fine, and it is the authorization middleware's decision whether
/// an absent claim is fatal for a given route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (the user's id)
    pub sub: String,
    /// User's email address, if the issuer included one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role claim string, if the issuer included one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// The decoded, validated identity for one request.
///
/// Built from verified [`Claims`], never persisted, discarded at end of
/// request. A role claim the permission model does not know about becomes
/// `role: None`, which grants nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl Principal {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role.as_deref().and_then(Role::parse),
        }
    }

    /// Does this principal's role grant the capability? Fails closed when
    /// the token carried no (known) role.
    pub fn can(&self, capability: Capability) -> bool {
        self.role
            .map(|r| permissions::allows(r, capability))
            .unwrap_or(false)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}
