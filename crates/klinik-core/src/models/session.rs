//! Session and role models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Admin,
    Doctor,
    Pharmacist,
    Receptionist,
    Administration,
}

impl Role {
    /// Every role, in login-form order.
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Doctor,
        Role::Pharmacist,
        Role::Receptionist,
        Role::Administration,
    ];

    /// Storage string.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "dokter",
            Role::Pharmacist => "apoteker",
            Role::Receptionist => "resepsionis",
            Role::Administration => "administrasi",
        }
    }

    /// Parse a storage string. Matching is exact, as the role gate compares strings.
    pub fn parse(s: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The logged-in user, stored in the `user` slot.
///
/// The role is kept as the raw stored string; an unrecognised role is
/// denied everywhere except ungated routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl Session {
    /// Create a session for a known role.
    pub fn new(email: String, role: Role) -> Self {
        Self {
            email,
            role: role.as_str().to_string(),
        }
    }

    /// Parsed role, if recognised.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}
