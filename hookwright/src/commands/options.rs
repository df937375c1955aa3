use std::{path::PathBuf, str::FromStr};

use clap::Args;
use hookwright_options::{
    AccessKind, HookKind, Inputs, PartialOptions, PartialShares, Permission, PermissionSet,
    SharesKind,
};

/// A flag value that is either `false` (disabled) or a variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle<T>(pub Option<T>);

impl<T: FromStr<Err = String>> FromStr for Toggle<T> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "false" | "none" => Ok(Toggle(None)),
            other => other.parse().map(|value| Toggle(Some(value))),
        }
    }
}

fn parse_input(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::from(raw));
    Ok((key.to_string(), value))
}

/// Options shared by every command that generates a contract.
///
/// Flags override values loaded from `--config`.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Options file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Contract name
    #[arg(long)]
    pub name: Option<String>,

    /// Hook base (e.g. BaseHook, BaseDynamicFee, LimitOrderHook)
    #[arg(long)]
    pub hook: Option<HookKind>,

    /// Make the hook pausable
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub pausable: Option<bool>,

    /// Access control: ownable, roles, managed or false
    #[arg(long)]
    pub access: Option<Toggle<AccessKind>>,

    /// Token shares: ERC20, ERC6909, ERC1155 or false
    #[arg(long)]
    pub shares: Option<Toggle<SharesKind>>,

    /// Shares token name
    #[arg(long)]
    pub shares_name: Option<String>,

    /// Shares token symbol
    #[arg(long)]
    pub shares_symbol: Option<String>,

    /// Shares metadata URI
    #[arg(long)]
    pub shares_uri: Option<String>,

    /// Use the CurrencySettler library
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub currency_settler: Option<bool>,

    /// Use the SafeCast library
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub safe_cast: Option<bool>,

    /// Use the TransientSlot library
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub transient_storage: Option<bool>,

    /// Enable a hook permission flag (repeatable)
    #[arg(short, long = "permission", value_name = "FLAG")]
    pub permissions: Vec<Permission>,

    /// Template input as KEY=VALUE, VALUE parsed as JSON when possible (repeatable)
    #[arg(long = "input", value_name = "KEY=VALUE", value_parser = parse_input)]
    pub inputs: Vec<(String, serde_json::Value)>,

    /// SPDX license identifier
    #[arg(long)]
    pub license: Option<String>,

    /// Security contact rendered in the contract natspec
    #[arg(long)]
    pub security_contact: Option<String>,
}

impl OptionArgs {
    /// Load the options file, if any, and layer the flags on top.
    pub fn load(&self) -> hookwright_options::Result<PartialOptions> {
        let base = match &self.config {
            Some(path) => PartialOptions::from_file(path)?,
            None => PartialOptions::default(),
        };
        let overrides = self.overrides(&base);
        Ok(base.merge(overrides))
    }

    fn overrides(&self, base: &PartialOptions) -> PartialOptions {
        let shares_given = self.shares.is_some()
            || self.shares_name.is_some()
            || self.shares_symbol.is_some()
            || self.shares_uri.is_some();
        let shares = shares_given.then(|| PartialShares {
            options: self.shares.map(|toggle| toggle.0),
            name: self.shares_name.clone(),
            symbol: self.shares_symbol.clone(),
            uri: self.shares_uri.clone(),
        });

        let info = (self.license.is_some() || self.security_contact.is_some()).then(|| {
            let mut info = base.info.clone().unwrap_or_default();
            if let Some(license) = &self.license {
                info.license = license.clone();
            }
            if let Some(contact) = &self.security_contact {
                info.security_contact = Some(contact.clone());
            }
            info
        });

        PartialOptions {
            hook: self.hook,
            name: self.name.clone(),
            pausable: self.pausable,
            access: self.access.map(|toggle| toggle.0),
            currency_settler: self.currency_settler,
            safe_cast: self.safe_cast,
            transient_storage: self.transient_storage,
            shares,
            permissions: (!self.permissions.is_empty())
                .then(|| PermissionSet::from_permissions(self.permissions.iter().copied())),
            inputs: (!self.inputs.is_empty())
                .then(|| self.inputs.iter().cloned().collect::<Inputs>()),
            info,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use hookwright_options::SharesConfig;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        options: OptionArgs,
    }

    fn parse(args: &[&str]) -> OptionArgs {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().options
    }

    #[test]
    fn test_no_flags_is_default() {
        assert_eq!(parse(&[]).load().unwrap(), PartialOptions::default());
    }

    #[test]
    fn test_flags() {
        let options = parse(&[
            "--hook",
            "BaseDynamicFee",
            "--pausable",
            "--access",
            "roles",
            "--shares",
            "ERC20",
            "--shares-name",
            "Vault",
            "--shares-symbol",
            "VLT",
            "-p",
            "afterSwap",
            "--input",
            "blockNumberOffset=5",
            "--safe-cast",
        ])
        .load()
        .unwrap();

        assert_eq!(options.hook, Some(HookKind::BaseDynamicFee));
        assert_eq!(options.pausable, Some(true));
        assert_eq!(options.access, Some(Some(AccessKind::Roles)));
        assert_eq!(
            options.shares.map(PartialShares::normalize),
            Some(SharesConfig::erc20("Vault", "VLT"))
        );
        assert!(options.permissions.unwrap().after_swap);
        assert_eq!(options.inputs.unwrap()["blockNumberOffset"], 5);
        assert_eq!(options.safe_cast, Some(true));
        assert_eq!(options.currency_settler, None);
    }

    #[test]
    fn test_toggle_false() {
        let options = parse(&["--access", "false", "--shares", "false", "--pausable=false"])
            .load()
            .unwrap();
        assert_eq!(options.access, Some(None));
        assert_eq!(options.shares.unwrap().options, Some(None));
        assert_eq!(options.pausable, Some(false));
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(TestCli::try_parse_from(["test", "--access", "admin"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--input", "novalue"]).is_err());
        assert!(TestCli::try_parse_from(["test", "-p", "beforeEverything"]).is_err());
    }

    #[test]
    fn test_input_values() {
        assert_eq!(
            parse_input("offset=12").unwrap(),
            ("offset".to_string(), serde_json::Value::from(12))
        );
        assert_eq!(
            parse_input("label=hello world").unwrap(),
            ("label".to_string(), serde_json::Value::from("hello world"))
        );
        assert!(parse_input("=1").is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hookwright.toml");
        std::fs::write(
            &path,
            r#"
            name = "FromFile"
            pausable = true
            access = "managed"

            [shares]
            options = "ERC20"
            name = "File Shares"
            symbol = "FS"

            [info]
            license = "Apache-2.0"
            "#,
        )
        .unwrap();

        let config = path.to_str().unwrap();
        let options = parse(&[
            "--config",
            config,
            "--name",
            "FromFlag",
            "--shares-symbol",
            "FLG",
            "--security-contact",
            "sec@example.com",
        ])
        .load()
        .unwrap();

        assert_eq!(options.name.as_deref(), Some("FromFlag"));
        assert_eq!(options.pausable, Some(true));
        assert_eq!(options.access, Some(Some(AccessKind::Managed)));
        let shares = options.shares.unwrap().normalize();
        assert_eq!(shares.name.as_deref(), Some("File Shares"));
        assert_eq!(shares.symbol.as_deref(), Some("FLG"));
        let info = options.info.unwrap();
        assert_eq!(info.license, "Apache-2.0");
        assert_eq!(info.security_contact.as_deref(), Some("sec@example.com"));
    }

    #[test]
    fn test_utility_flags_switch_off_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hookwright.toml");
        std::fs::write(
            &path,
            r#"
            currencySettler = true
            safeCast = true
            transientStorage = true
            "#,
        )
        .unwrap();

        let config = path.to_str().unwrap();
        let options = parse(&["--config", config, "--safe-cast=false", "--transient-storage=false"])
            .load()
            .unwrap();

        assert_eq!(options.currency_settler, Some(true));
        assert_eq!(options.safe_cast, Some(false));
        assert_eq!(options.transient_storage, Some(false));
    }

    #[test]
    fn test_missing_config_file() {
        let err = parse(&["--config", "/no/such/hookwright.toml"])
            .load()
            .unwrap_err();
        assert!(matches!(*err, hookwright_options::Error::Io { .. }));
    }
}
