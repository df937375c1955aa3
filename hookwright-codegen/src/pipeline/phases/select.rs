//! Select phase - maps options to registry components.

use std::collections::BTreeSet;

use hookwright_options::{AccessKind, HookKind, Options, PartialOptions, SharesKind};
use tracing::{debug, trace};

use crate::{
    Error, Result,
    pipeline::{CompilationContext, Diagnostic, Phase},
    registry::{ComponentId, Registry, SharesPolicy, Utility},
};

/// Access mechanism used when access control is required but not chosen.
pub const DEFAULT_ACCESS: AccessKind = AccessKind::Ownable;

/// The components chosen for one contract, before linearization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected components without duplicates, in selection order.
    pub components: Vec<ComponentId>,
    /// Effective access mechanism after defaulting.
    pub access: Option<AccessKind>,
    /// Effective shares standard after defaulting.
    pub shares: Option<SharesKind>,
}

/// The combined shares policy of a hook kind and its ancestors.
///
/// `Forbidden` wins over `Required`, which wins over `Optional`.
pub fn shares_policy(hook: HookKind, registry: &Registry) -> SharesPolicy {
    let mut policy = SharesPolicy::Optional;
    for id in registry.closure(ComponentId::Hook(hook)) {
        match registry.find(id).map(|c| c.shares_policy) {
            Some(SharesPolicy::Forbidden) => return SharesPolicy::Forbidden,
            Some(required @ SharesPolicy::Required(_)) => policy = required,
            _ => {}
        }
    }
    policy
}

/// Components whose functions need access control, given a hook kind,
/// pausability and a shares standard.
pub fn privileged_components(
    hook: HookKind,
    pausable: bool,
    shares: Option<SharesKind>,
    registry: &Registry,
) -> Vec<ComponentId> {
    let mut candidates = registry.closure(ComponentId::Hook(hook));
    if pausable {
        candidates.insert(ComponentId::Pausable);
    }
    if let Some(kind) = shares {
        candidates.insert(ComponentId::Shares(kind));
    }

    candidates
        .into_iter()
        .filter(|id| registry.find(*id).is_some_and(|c| c.requires_access()))
        .collect()
}

/// Whether the feature set described by `partial` includes a privileged
/// operation, so that access control is mandatory.
///
/// Works directly on partial options: unset fields are read as their
/// defaults, and a hook kind that mandates shares counts its default
/// shares standard.
pub fn is_access_control_required(partial: &PartialOptions, registry: &Registry) -> bool {
    let hook = partial.hook.unwrap_or_default();
    let pausable = partial.pausable.unwrap_or(false);
    let shares = partial
        .shares
        .as_ref()
        .and_then(|shares| shares.options.flatten())
        .or(match shares_policy(hook, registry) {
            SharesPolicy::Required(kind) => Some(kind),
            _ => None,
        });

    !privileged_components(hook, pausable, shares, registry).is_empty()
}

/// Map normalized options to a component selection.
///
/// # Errors
///
/// A configuration error when the shares option is forbidden for the hook
/// kind or a shares standard is missing its token fields.
pub fn select(options: &Options, registry: &Registry) -> Result<Selection> {
    let policy = shares_policy(options.hook, registry);
    let shares = match (policy, options.shares.options) {
        (SharesPolicy::Forbidden, Some(kind)) => {
            return Err(Error::configuration(
                "shares.options",
                format!(
                    "must be false for hook '{}', which does not support shares (got '{}')",
                    options.hook, kind
                ),
            ));
        }
        (SharesPolicy::Required(default), None) => Some(default),
        (_, chosen) => chosen,
    };
    if let Some(kind) = options.shares.options {
        check_shares_fields(options, kind)?;
    }

    let required = !privileged_components(options.hook, options.pausable, shares, registry).is_empty();
    let access = match options.access {
        Some(kind) => Some(kind),
        None if required => Some(DEFAULT_ACCESS),
        None => None,
    };

    let mut components = vec![ComponentId::Hook(options.hook)];
    if let Some(kind) = access {
        components.push(ComponentId::Access(kind));
    }
    if options.pausable {
        components.push(ComponentId::Pausable);
    }
    if let Some(kind) = shares {
        components.push(ComponentId::Shares(kind));
    }
    for (enabled, utility) in [
        (options.currency_settler, Utility::CurrencySettler),
        (options.safe_cast, Utility::SafeCast),
        (options.transient_storage, Utility::TransientStorage),
    ] {
        if enabled {
            components.push(ComponentId::Utility(utility));
        }
    }

    let mut seen = BTreeSet::new();
    components.retain(|id| seen.insert(*id));
    for id in &components {
        registry.get(*id)?;
    }

    Ok(Selection {
        components,
        access,
        shares,
    })
}

fn check_shares_fields(options: &Options, kind: SharesKind) -> Result<()> {
    let shares = &options.shares;
    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
    let requirement = format!("required when shares.options is '{}'", kind);

    match kind {
        SharesKind::Erc20 => {
            if !present(&shares.name) {
                return Err(Error::configuration("shares.name", requirement));
            }
            if !present(&shares.symbol) {
                return Err(Error::configuration("shares.symbol", requirement));
            }
        }
        SharesKind::Erc1155 => {
            if !present(&shares.uri) {
                return Err(Error::configuration("shares.uri", requirement));
            }
        }
        SharesKind::Erc6909 => {}
    }
    Ok(())
}

/// Phase that selects components and applies the access and shares defaults.
pub struct SelectPhase;

impl Phase for SelectPhase {
    fn name(&self) -> &'static str {
        "select"
    }

    fn description(&self) -> &'static str {
        "Select components for the enabled features"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let options = ctx.options(self.name())?;
        let selection = select(options, ctx.registry)?;

        let mut notes = Vec::new();
        if options.access.is_none()
            && let Some(kind) = selection.access
        {
            let reasons: Vec<String> = privileged_components(
                options.hook,
                options.pausable,
                selection.shares,
                ctx.registry,
            )
            .into_iter()
            .map(|id| id.to_string())
            .collect();
            notes.push(
                Diagnostic::info(
                    self.name(),
                    format!(
                        "access defaulted to '{}' because {} exposes privileged functions",
                        kind,
                        reasons.join(", ")
                    ),
                )
                .at("access"),
            );
        }
        if options.shares.options.is_none()
            && let Some(kind) = selection.shares
        {
            notes.push(
                Diagnostic::info(
                    self.name(),
                    format!("shares defaulted to '{}' for hook '{}'", kind, options.hook),
                )
                .at("shares.options"),
            );
        }

        debug!(count = selection.components.len(), "selected components");
        trace!(components = ?selection.components, "selection");

        ctx.diagnostics.extend(notes);
        ctx.selection = Some(selection);
        Ok(())
    }
}
