//! Roles, capabilities, and the static permission table.
//!
//! Both [`Role`] and [`Capability`] are closed enumerations; the table
//! mapping one to the other is a compile-time constant with no runtime
//! mutation path. Lookups for roles the table does not know about cannot
//! exist at the type level, and the string-claim entry point
//! [`allows_claim`] fails closed for anything it cannot parse.
//!
//! [`rank`] exists only for ordering comparisons ("does this role outrank
//! that one"); capabilities always come from the explicit table, never
//! from rank.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of roles known to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Officer,
    Admin,
}

impl Role {
    /// Parse a role claim string. Unknown strings yield `None`; callers
    /// must treat that as "no capabilities".
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "citizen" => Some(Role::Citizen),
            "officer" => Some(Role::Officer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Officer => "officer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single permitted action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Create,
    Read,
    Update,
    Delete,
}

const CITIZEN_CAPABILITIES: &[Capability] = &[Capability::Create, Capability::Read];

const OFFICER_CAPABILITIES: &[Capability] =
    &[Capability::Create, Capability::Read, Capability::Update];

const ADMIN_CAPABILITIES: &[Capability] = &[
    Capability::Create,
    Capability::Read,
    Capability::Update,
    Capability::Delete,
];

/// The capability set granted to a role. Total over [`Role`].
pub fn capabilities(role: Role) -> &'static [Capability] {
    match role {
        Role::Citizen => CITIZEN_CAPABILITIES,
        Role::Officer => OFFICER_CAPABILITIES,
        Role::Admin => ADMIN_CAPABILITIES,
    }
}

/// Does `role` grant `capability`?
pub fn allows(role: Role, capability: Capability) -> bool {
    capabilities(role).contains(&capability)
}

/// Does `role` grant at least one of `caps`?
pub fn allows_any(role: Role, caps: &[Capability]) -> bool {
    caps.iter().any(|c| allows(role, *c))
}

/// Does `role` grant every one of `caps`?
pub fn allows_all(role: Role, caps: &[Capability]) -> bool {
    caps.iter().all(|c| allows(role, *c))
}

/// Capability check straight from a raw role claim. Absent or unknown
/// roles grant nothing.
pub fn allows_claim(role: Option<&str>, capability: Capability) -> bool {
    role.and_then(Role::parse)
        .map(|r| allows(r, capability))
        .unwrap_or(false)
}

/// Hierarchy level of a role (higher outranks lower). Used for ordering
/// comparisons only; capability resolution goes through the table.
pub fn rank(role: Role) -> u8 {
    match role {
        Role::Citizen => 0,
        Role::Officer => 1,
        Role::Admin => 2,
    }
}

/// Does `role` outrank or equal `other`?
pub fn outranks_or_equals(role: Role, other: Role) -> bool {
    rank(role) >= rank(other)
}
