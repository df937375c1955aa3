//! Option records: the partial form callers supply and the normalized form
//! the generator consumes.

use std::{collections::BTreeMap, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    AccessKind, Error, HookKind, Metadata, PartialShares, PermissionSet, Result, SharesConfig,
    serde_helpers::{deserialize_optional_flag_or, serialize_flag_or},
    validate::{is_solidity_keyword, validate_identifier, validate_license, validate_single_line},
};

/// Contract name used when none is given.
pub const DEFAULT_NAME: &str = "MyHook";

/// Input key for the liquidity penalty window.
pub const BLOCK_NUMBER_OFFSET: &str = "blockNumberOffset";

/// Default liquidity penalty window, in blocks.
pub const DEFAULT_BLOCK_NUMBER_OFFSET: u64 = 10;

/// Free-form inputs consumed by component templates.
pub type Inputs = BTreeMap<String, serde_json::Value>;

fn default_inputs() -> Inputs {
    Inputs::from([(
        BLOCK_NUMBER_OFFSET.to_string(),
        serde_json::Value::from(DEFAULT_BLOCK_NUMBER_OFFSET),
    )])
}

/// Fully populated options. Every field has a defined default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub hook: HookKind,
    pub name: String,
    pub pausable: bool,
    #[serde(serialize_with = "serialize_flag_or")]
    pub access: Option<AccessKind>,
    pub currency_settler: bool,
    pub safe_cast: bool,
    pub transient_storage: bool,
    pub shares: SharesConfig,
    pub permissions: PermissionSet,
    pub inputs: Inputs,
    pub info: Metadata,
}

impl Options {
    /// The normalized default options.
    pub fn defaults() -> Self {
        PartialOptions::default().normalize()
    }

    /// Check field-level constraints that do not depend on the component registry.
    pub fn validate(&self) -> Result<()> {
        if is_solidity_keyword(&self.name) {
            return Err(Error::configuration(
                "name",
                format!("'{}' is a Solidity reserved word", self.name),
            ));
        }
        if let Some(reason) = validate_identifier(&self.name) {
            return Err(Error::configuration(
                "name",
                format!("'{}' is not a valid contract name: {}", self.name, reason),
            ));
        }
        if let Some(reason) = validate_license(&self.info.license) {
            return Err(Error::configuration("info.license", reason));
        }
        if let Some(contact) = &self.info.security_contact
            && let Some(reason) = validate_single_line(contact)
        {
            return Err(Error::configuration("info.securityContact", reason));
        }
        for (field, value) in [
            ("shares.name", &self.shares.name),
            ("shares.symbol", &self.shares.symbol),
            ("shares.uri", &self.shares.uri),
        ] {
            if let Some(reason) = value.as_deref().and_then(validate_single_line) {
                return Err(Error::configuration(field, reason));
            }
        }
        if let Some(value) = self.inputs.get(BLOCK_NUMBER_OFFSET)
            && value.as_u64().is_none()
        {
            return Err(Error::configuration(
                format!("inputs.{}", BLOCK_NUMBER_OFFSET),
                format!("must be a non-negative integer, got {}", value),
            ));
        }
        Ok(())
    }

    /// Render an input value for template substitution.
    pub fn input(&self, key: &str) -> Option<String> {
        self.inputs.get(key).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Options as supplied by a caller: every field independently optional.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialOptions {
    #[serde(default)]
    pub hook: Option<HookKind>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pausable: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_flag_or")]
    pub access: Option<Option<AccessKind>>,
    #[serde(default)]
    pub currency_settler: Option<bool>,
    #[serde(default)]
    pub safe_cast: Option<bool>,
    #[serde(default)]
    pub transient_storage: Option<bool>,
    #[serde(default)]
    pub shares: Option<PartialShares>,
    #[serde(default)]
    pub permissions: Option<PermissionSet>,
    #[serde(default)]
    pub inputs: Option<Inputs>,
    #[serde(default)]
    pub info: Option<Metadata>,
}

impl PartialOptions {
    /// Fill every unset field with its default. Never fails.
    pub fn normalize(self) -> Options {
        let mut inputs = default_inputs();
        inputs.extend(self.inputs.unwrap_or_default());

        Options {
            hook: self.hook.unwrap_or_default(),
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            pausable: self.pausable.unwrap_or(false),
            access: self.access.flatten(),
            currency_settler: self.currency_settler.unwrap_or(false),
            safe_cast: self.safe_cast.unwrap_or(false),
            transient_storage: self.transient_storage.unwrap_or(false),
            shares: self.shares.unwrap_or_default().normalize(),
            permissions: self.permissions.unwrap_or_default(),
            inputs,
            info: self.info.unwrap_or_default(),
        }
    }

    /// Layer `overrides` on top of `self`, field by field.
    ///
    /// Shares fields and input keys merge individually; permissions are unioned.
    pub fn merge(self, overrides: PartialOptions) -> PartialOptions {
        let shares = match (self.shares, overrides.shares) {
            (Some(base), Some(top)) => Some(PartialShares {
                options: top.options.or(base.options),
                name: top.name.or(base.name),
                symbol: top.symbol.or(base.symbol),
                uri: top.uri.or(base.uri),
            }),
            (base, top) => top.or(base),
        };

        let permissions = match (self.permissions, overrides.permissions) {
            (Some(mut base), Some(top)) => {
                base.union_with(&top);
                Some(base)
            }
            (base, top) => top.or(base),
        };

        let inputs = match (self.inputs, overrides.inputs) {
            (Some(mut base), Some(top)) => {
                base.extend(top);
                Some(base)
            }
            (base, top) => top.or(base),
        };

        PartialOptions {
            hook: overrides.hook.or(self.hook),
            name: overrides.name.or(self.name),
            pausable: overrides.pausable.or(self.pausable),
            access: overrides.access.or(self.access),
            currency_settler: overrides.currency_settler.or(self.currency_settler),
            safe_cast: overrides.safe_cast.or(self.safe_cast),
            transient_storage: overrides.transient_storage.or(self.transient_storage),
            shares,
            permissions,
            inputs,
            info: overrides.info.or(self.info),
        }
    }

    /// Parse options from a TOML string with a filename for error reporting.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Parse options from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| Box::new(Error::Json { source }))
    }

    /// Load options from a file; `.json` files are read as JSON, anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content, &path.display().to_string())
        }
    }
}

impl FromStr for PartialOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s, "hookwright.toml")
    }
}

impl From<Options> for PartialOptions {
    fn from(options: Options) -> Self {
        Self {
            hook: Some(options.hook),
            name: Some(options.name),
            pausable: Some(options.pausable),
            access: Some(options.access),
            currency_settler: Some(options.currency_settler),
            safe_cast: Some(options.safe_cast),
            transient_storage: Some(options.transient_storage),
            shares: Some(options.shares.into()),
            permissions: Some(options.permissions),
            inputs: Some(options.inputs),
            info: Some(options.info),
        }
    }
}
