//! Placeholder substitution for registry templates.
//!
//! Registry statements are static text with `${key}` slots. Bindings are
//! built from the normalized options and resolved when a component's
//! contribution is composed into the contract model.

use std::collections::BTreeMap;

use hookwright_options::Options;

use crate::{Error, Result};

/// Key for the generated contract name.
pub const CONTRACT_NAME: &str = "contractName";
/// Key for the ERC20 shares token name.
pub const SHARES_NAME: &str = "sharesName";
/// Key for the ERC20 shares token symbol.
pub const SHARES_SYMBOL: &str = "sharesSymbol";
/// Key for the ERC1155 shares metadata URI.
pub const SHARES_URI: &str = "sharesUri";
/// Key for the access-control modifier guarding a privileged function.
pub const RESTRICTED: &str = "restricted";

/// Values available to `${key}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: BTreeMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings for everything the options define: contract name, shares
    /// token fields (escaped as string-literal contents) and every input.
    pub fn from_options(options: &Options) -> Self {
        let mut bindings = Self::new();
        bindings.insert(CONTRACT_NAME, &options.name);

        let shares = &options.shares;
        for (key, value) in [
            (SHARES_NAME, &shares.name),
            (SHARES_SYMBOL, &shares.symbol),
            (SHARES_URI, &shares.uri),
        ] {
            if let Some(value) = value {
                bindings.insert(key, escape_string(value));
            }
        }

        for key in options.inputs.keys() {
            if let Some(value) = options.input(key) {
                bindings.insert(key, value);
            }
        }
        bindings
    }

    /// Bind a key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// A copy of these bindings with one more key bound.
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut bindings = self.clone();
        bindings.insert(key, value);
        bindings
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Substitute every `${key}` in `template`.
    ///
    /// An unbound or unterminated placeholder is a registry defect.
    pub fn render(&self, template: &str) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find('}').ok_or_else(|| {
                Error::registry(format!("unterminated placeholder in template '{}'", template))
            })?;
            let key = &after[..end];
            let value = self.get(key).ok_or_else(|| {
                Error::registry(format!(
                    "unbound placeholder '{}' in template '{}'",
                    key, template
                ))
            })?;
            out.push_str(value);
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }

    /// Substitute every template in a list.
    pub fn render_all<S: AsRef<str>>(&self, templates: &[S]) -> Result<Vec<String>> {
        templates.iter().map(|t| self.render(t.as_ref())).collect()
    }
}

/// Escape text for use inside a double-quoted Solidity string literal.
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
