//! What the linearized components contribute beyond their own declarations:
//! functions, roles, the access gate and template bindings.

use std::collections::BTreeSet;

use hookwright_options::Options;

use crate::{
    Result,
    generation::Bindings,
    registry::{AccessGate, ComponentId, FunctionTemplate, Registry},
};

/// Functions the generated contract defines, in linearization order.
///
/// For each component: first its required functions that no linearized
/// component provides, then its concrete functions. A required function
/// declared by several components is emitted once.
pub fn contributed_functions<'r>(
    linearized: &[ComponentId],
    registry: &'r Registry,
) -> Result<Vec<&'r FunctionTemplate>> {
    let mut provided = BTreeSet::new();
    for id in linearized {
        provided.extend(registry.get(*id)?.provides.iter().map(String::as_str));
    }

    let mut functions = Vec::new();
    let mut required_seen = BTreeSet::new();
    for id in linearized {
        let component = registry.get(*id)?;
        for function in &component.required {
            let name = function.name.as_str();
            if !provided.contains(name) && required_seen.insert(name) {
                functions.push(function);
            }
        }
        functions.extend(&component.functions);
    }
    Ok(functions)
}

/// Distinct roles guarding the contributed functions, in order of first use.
pub fn roles<'r>(linearized: &[ComponentId], registry: &'r Registry) -> Result<Vec<&'r str>> {
    let mut roles: Vec<&str> = Vec::new();
    for function in contributed_functions(linearized, registry)? {
        if let Some(role) = function.role.as_deref()
            && !roles.contains(&role)
        {
            roles.push(role);
        }
    }
    Ok(roles)
}

/// The access gate of the selected access module, if any.
pub fn access_gate<'r>(
    linearized: &[ComponentId],
    registry: &'r Registry,
) -> Result<Option<&'r AccessGate>> {
    for id in linearized {
        if let Some(gate) = &registry.get(*id)?.gate {
            return Ok(Some(gate));
        }
    }
    Ok(None)
}

/// Bindings for every template of the linearized components: the options'
/// own values plus the keys components bind (e.g. `mintShares`).
pub fn template_bindings(
    options: &Options,
    linearized: &[ComponentId],
    registry: &Registry,
) -> Result<Bindings> {
    let mut bindings = Bindings::from_options(options);
    for id in linearized {
        for (key, value) in &registry.get(*id)?.bindings {
            bindings.insert(key.as_str(), value.as_str());
        }
    }
    Ok(bindings)
}
