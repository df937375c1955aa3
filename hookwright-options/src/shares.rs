//! Token-shares configuration.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{deserialize_flag_or, deserialize_optional_flag_or, serialize_flag_or};

/// Token standard used to represent shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum SharesKind {
    #[serde(rename = "ERC20")]
    Erc20,
    #[serde(rename = "ERC6909")]
    Erc6909,
    #[serde(rename = "ERC1155")]
    Erc1155,
}

impl SharesKind {
    pub const ALL: [SharesKind; 3] = [SharesKind::Erc20, SharesKind::Erc6909, SharesKind::Erc1155];

    pub fn as_str(&self) -> &'static str {
        match self {
            SharesKind::Erc20 => "ERC20",
            SharesKind::Erc6909 => "ERC6909",
            SharesKind::Erc1155 => "ERC1155",
        }
    }
}

impl fmt::Display for SharesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharesKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SharesKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown shares '{}', expected 'ERC20', 'ERC6909' or 'ERC1155'",
                    s
                )
            })
    }
}

/// Normalized shares configuration.
///
/// When `options` is `None` the token fields are always `None` too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SharesConfig {
    #[serde(
        deserialize_with = "deserialize_flag_or",
        serialize_with = "serialize_flag_or"
    )]
    pub options: Option<SharesKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl SharesConfig {
    /// Shares disabled.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// ERC20 shares with the given token name and symbol.
    pub fn erc20(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            options: Some(SharesKind::Erc20),
            name: Some(name.into()),
            symbol: Some(symbol.into()),
            uri: None,
        }
    }

    /// ERC6909 shares.
    pub fn erc6909() -> Self {
        Self {
            options: Some(SharesKind::Erc6909),
            ..Self::default()
        }
    }

    /// ERC1155 shares with the given metadata URI.
    pub fn erc1155(uri: impl Into<String>) -> Self {
        Self {
            options: Some(SharesKind::Erc1155),
            uri: Some(uri.into()),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.options.is_some()
    }
}

/// Shares configuration as supplied by the caller, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialShares {
    #[serde(default, deserialize_with = "deserialize_optional_flag_or")]
    pub options: Option<Option<SharesKind>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl PartialShares {
    /// Fill defaults. Token fields are dropped when shares are disabled.
    pub fn normalize(self) -> SharesConfig {
        match self.options.flatten() {
            None => SharesConfig::disabled(),
            Some(kind) => SharesConfig {
                options: Some(kind),
                name: self.name,
                symbol: self.symbol,
                uri: self.uri,
            },
        }
    }

    /// Whether token fields were supplied that normalization will drop.
    pub fn has_ignored_fields(&self) -> bool {
        self.options.flatten().is_none()
            && (self.name.is_some() || self.symbol.is_some() || self.uri.is_some())
    }
}

impl From<SharesConfig> for PartialShares {
    fn from(config: SharesConfig) -> Self {
        Self {
            options: Some(config.options),
            name: config.name,
            symbol: config.symbol,
            uri: config.uri,
        }
    }
}
