//! The fixed enumeration of role names known to the application.
//!
//! These must match the rows seeded at startup into the `roles` table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A role name from the closed set the application understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    User,
    Admin,
}

impl RoleName {
    /// Every role name, in seed order.
    pub const ALL: [RoleName; 2] = [RoleName::User, RoleName::Admin];

    /// The stable string form stored in the `roles.name` column.
    pub fn as_str(self) -> &'static str {
        match self {
            RoleName::User => "ROLE_USER",
            RoleName::Admin => "ROLE_ADMIN",
        }
    }

    /// Parse a stored string form back into the enumeration.
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<RoleName> {
        match s {
            "ROLE_USER" => Some(RoleName::User),
            "ROLE_ADMIN" => Some(RoleName::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
