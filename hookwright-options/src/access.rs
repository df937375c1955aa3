//! Access-control mechanisms.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Access-control mechanism guarding privileged functions.
///
/// `Options::access` holds `Option<AccessKind>`; `None` means disabled and is
/// written as `false` in option files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    /// Single owner (`Ownable`).
    Ownable,
    /// Role-based (`AccessControl`).
    Roles,
    /// Delegated to an access manager (`AccessManaged`).
    Managed,
}

impl AccessKind {
    pub const ALL: [AccessKind; 3] = [AccessKind::Ownable, AccessKind::Roles, AccessKind::Managed];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessKind::Ownable => "ownable",
            AccessKind::Roles => "roles",
            AccessKind::Managed => "managed",
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ownable" => Ok(AccessKind::Ownable),
            "roles" => Ok(AccessKind::Roles),
            "managed" => Ok(AccessKind::Managed),
            _ => Err(format!(
                "unknown access '{}', expected 'ownable', 'roles' or 'managed'",
                s
            )),
        }
    }
}
