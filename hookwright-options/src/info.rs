//! Contract metadata.

use serde::{Deserialize, Serialize};

/// License used when none is given.
pub const DEFAULT_LICENSE: &str = "MIT";

/// Metadata rendered into the contract header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Rendered as `@custom:security-contact` when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_contact: Option<String>,
    /// SPDX license identifier.
    #[serde(default = "default_license")]
    pub license: String,
}

fn default_license() -> String {
    DEFAULT_LICENSE.to_string()
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            security_contact: None,
            license: default_license(),
        }
    }
}

impl Metadata {
    /// The security contact, if set and non-blank.
    pub fn security_contact(&self) -> Option<&str> {
        self.security_contact
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
