//! Normalize phase - fills defaults and checks field-level constraints.

use tracing::debug;

use crate::{
    Result,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that turns the caller's partial options into normalized [`Options`](hookwright_options::Options).
pub struct NormalizePhase;

impl Phase for NormalizePhase {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn description(&self) -> &'static str {
        "Fill option defaults and validate names and inputs"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        if let Some(shares) = &ctx.partial.shares
            && shares.has_ignored_fields()
        {
            ctx.add_diagnostic(
                Diagnostic::warning(
                    self.name(),
                    "shares token fields are ignored because shares are disabled",
                )
                .at("shares"),
            );
        }

        let options = ctx.partial.clone().normalize();
        options.validate()?;
        debug!(hook = %options.hook, name = %options.name, "normalized options");

        ctx.options = Some(options);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hookwright_options::{HookKind, PartialOptions, PartialShares, SharesKind};

    use super::*;
    use crate::registry::Registry;

    #[test]
    fn test_defaults_filled() {
        let mut ctx = CompilationContext::new(Registry::builtin(), PartialOptions::default());
        NormalizePhase.run(&mut ctx).unwrap();
        let options = ctx.options.unwrap();
        assert_eq!(options.hook, HookKind::BaseHook);
        assert_eq!(options.name, "MyHook");
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_name_is_configuration_error() {
        let partial = PartialOptions {
            name: Some("1stHook".into()),
            ..PartialOptions::default()
        };
        let mut ctx = CompilationContext::new(Registry::builtin(), partial);
        let err = NormalizePhase.run(&mut ctx).unwrap_err();
        assert!(err.is_user_error());
        assert!(err.to_string().starts_with("invalid option 'name'"));
    }

    #[test]
    fn test_ignored_shares_fields_warn() {
        let partial = PartialOptions {
            shares: Some(PartialShares {
                options: Some(None),
                symbol: Some("SYM".into()),
                ..PartialShares::default()
            }),
            ..PartialOptions::default()
        };
        let mut ctx = CompilationContext::new(Registry::builtin(), partial);
        NormalizePhase.run(&mut ctx).unwrap();
        assert!(ctx.has_warnings());
        assert_eq!(ctx.options.unwrap().shares.symbol, None);
    }

    #[test]
    fn test_enabled_shares_do_not_warn() {
        let partial = PartialOptions {
            shares: Some(PartialShares {
                options: Some(Some(SharesKind::Erc6909)),
                ..PartialShares::default()
            }),
            ..PartialOptions::default()
        };
        let mut ctx = CompilationContext::new(Registry::builtin(), partial);
        NormalizePhase.run(&mut ctx).unwrap();
        assert!(!ctx.has_warnings());
    }
}
