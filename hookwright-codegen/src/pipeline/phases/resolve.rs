//! Resolve phase - computes the final permission set.

use hookwright_options::{Options, Permission, PermissionSet};
use tracing::debug;

use crate::{
    Result,
    pipeline::{CompilationContext, Phase},
    registry::{ComponentId, Registry},
};

/// Compute the final permission set.
///
/// Starts from the caller's flags, unions in the permissions intrinsic to the
/// hook kind (and its ancestors) and, when pausable, those of the pausable
/// module, then forces the primary flag of every enabled return-delta flag.
/// All rules only ever set flags, so the result never loses a caller flag.
pub fn resolve_permissions(options: &Options, registry: &Registry) -> Result<PermissionSet> {
    let mut resolved = options.permissions;

    let hook = ComponentId::Hook(options.hook);
    registry.get(hook)?;
    for id in registry.closure(hook) {
        resolved.union_with(&registry.get(id)?.permissions);
    }

    if options.pausable {
        resolved.union_with(&registry.get(ComponentId::Pausable)?.permissions);
    }

    for delta in Permission::RETURN_DELTA {
        if resolved.contains(delta)
            && let Some(base) = delta.base()
        {
            resolved.insert(base);
        }
    }

    Ok(resolved)
}

/// Phase that resolves the permission bitmap.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve the hook permission bitmap"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let permissions = resolve_permissions(ctx.options(self.name())?, ctx.registry)?;
        debug!(enabled = permissions.len(), "resolved permissions");
        ctx.permissions = Some(permissions);
        Ok(())
    }
}
