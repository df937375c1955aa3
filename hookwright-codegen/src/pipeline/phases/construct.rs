//! Construct phase - synthesizes the single constructor.

use hookwright_options::Options;
use indexmap::IndexMap;
use tracing::debug;

use super::{
    contributions::{access_gate, roles, template_bindings},
    linearize::implied_ancestors,
};
use crate::{
    Error, Result,
    model::Constructor,
    pipeline::{CompilationContext, Phase},
    registry::{ComponentId, Param, Registry},
    roles::Role,
};

/// Merge the constructors of the linearized components.
///
/// Parameters are deduplicated by name; a later declaration replaces an
/// earlier one in place, and two declarations disagreeing on the type are a
/// registry defect. Base initializers follow linearization order, skipping
/// libraries and ancestors that a selected descendant already initializes.
/// With role-based access every role gets a parameter and a grant.
pub fn synthesize(
    options: &Options,
    linearized: &[ComponentId],
    registry: &Registry,
) -> Result<Constructor> {
    let bindings = template_bindings(options, linearized, registry)?;
    let implied = implied_ancestors(linearized, registry);

    let mut params: IndexMap<String, (Param, String)> = IndexMap::new();
    let mut inits = Vec::new();
    let mut body = Vec::new();

    for id in linearized {
        let component = registry.get(*id)?;
        if !component.is_contract() {
            continue;
        }

        for param in &component.ctor_params {
            add_param(&mut params, param.clone(), id.to_string())?;
        }
        if !implied.contains(id)
            && let Some(init) = &component.ctor_init
        {
            inits.push(bindings.render(init)?);
        }
        body.extend(bindings.render_all(&component.ctor_body)?);
    }

    if access_gate(linearized, registry)?.is_some_and(|gate| gate.grants_roles) {
        for role in roles(linearized, registry)? {
            let role = Role(role);
            add_param(
                &mut params,
                Param::new("address", role.param()),
                role.constant(),
            )?;
            body.push(role.grant());
        }
    }

    Ok(Constructor {
        params: params.into_values().map(|(param, _)| param).collect(),
        inits,
        body,
    })
}

fn add_param(
    params: &mut IndexMap<String, (Param, String)>,
    param: Param,
    owner: String,
) -> Result<()> {
    if let Some((existing, previous)) = params.get(&param.name)
        && existing.ty != param.ty
    {
        return Err(Error::registry(format!(
            "constructor parameter '{}' is '{}' in '{}' but '{}' in '{}'",
            param.name, existing.ty, previous, param.ty, owner
        )));
    }
    params.insert(param.name.clone(), (param, owner));
    Ok(())
}

/// Phase that builds the constructor.
pub struct ConstructPhase;

impl Phase for ConstructPhase {
    fn name(&self) -> &'static str {
        "construct"
    }

    fn description(&self) -> &'static str {
        "Merge constructor parameters and base initializers"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let options = ctx.options(self.name())?;
        let linearized = ctx.linearized(self.name())?;
        let constructor = synthesize(options, linearized, ctx.registry)?;

        debug!(
            params = constructor.params.len(),
            inits = constructor.inits.len(),
            "synthesized constructor"
        );

        ctx.constructor = Some(constructor);
        Ok(())
    }
}
