//! Compose phase - assembles the contract model.

use std::collections::BTreeSet;

use hookwright_options::{Options, PermissionSet};
use indexmap::IndexMap;
use tracing::{debug, trace};

use super::{
    contributions::{access_gate, contributed_functions, roles, template_bindings},
    linearize::implied_ancestors,
};
use crate::{
    Error, Result,
    generation::{Bindings, ImportCollector, RESTRICTED},
    lifecycle::Lifecycle,
    model::{Constructor, ContractModel, Function},
    pipeline::{CompilationContext, Phase},
    registry::{ComponentId, FunctionTemplate, InterfaceMethod, Registry, Tier, paths::HOOKS},
    roles::Role,
};

/// Binding key for the role constant inside an access gate template.
const ROLE: &str = "role";

/// Build the contract model from the linearized components.
///
/// Lifecycle overrides are emitted for exactly the enabled primary
/// permissions. Each body is every component's statements for that hook in
/// linearization order, followed by a delegation to the base when a
/// selected hook base implements the hook, or else by the hook's own
/// return (declaring the delta first when its return-delta flag is set).
pub fn compose(
    options: &Options,
    permissions: &PermissionSet,
    linearized: &[ComponentId],
    constructor: Constructor,
    registry: &Registry,
) -> Result<ContractModel> {
    let bindings = template_bindings(options, linearized, registry)?;
    let implied = implied_ancestors(linearized, registry);

    let mut imports = ImportCollector::new();
    imports.add_ref(&HOOKS);

    let mut parents = Vec::new();
    let mut using = Vec::new();
    let mut state_vars = Vec::new();
    for id in linearized {
        let component = registry.get(*id)?;
        if component.is_contract() {
            if implied.contains(id) {
                continue;
            }
            parents.push(component.name.clone());
        }
        imports.extend(&component.imports);
        using.extend(bindings.render_all(&component.using)?);
        state_vars.extend(bindings.render_all(&component.state_vars)?);
    }

    let gate = access_gate(linearized, registry)?;
    if gate.is_some_and(|gate| gate.grants_roles) {
        state_vars.extend(
            roles(linearized, registry)?
                .into_iter()
                .map(|role| Role(role).declaration()),
        );
    }

    let mut functions = Vec::new();
    for template in contributed_functions(linearized, registry)? {
        let bindings = match (&template.role, gate) {
            (Some(role), Some(gate)) => {
                let constant = Role(role).constant();
                let modifier = bindings.with(ROLE, constant).render(&gate.modifier)?;
                bindings.with(RESTRICTED, modifier)
            }
            _ => bindings.with(RESTRICTED, ""),
        };
        imports.extend(&template.imports);
        functions.push(render_function(template, &bindings)?);
    }

    let mut hooks = Vec::new();
    for lifecycle in Lifecycle::all() {
        let permission = lifecycle.permission;
        if !permissions.contains(permission) {
            continue;
        }

        let mut body = Vec::new();
        let mut base_implements = false;
        for id in linearized {
            let component = registry.get(*id)?;
            if let Some(statements) = component.hook_bodies.get(&permission) {
                body.extend(bindings.render_all(statements)?);
            }
            if id.tier() == Tier::Hook && component.permissions.contains(permission) {
                base_implements = true;
            }
        }

        if base_implements {
            body.push(lifecycle.super_return());
        } else {
            let with_delta = permission
                .return_delta()
                .is_some_and(|delta| permissions.contains(delta));
            let (statements, return_imports) = lifecycle.own_return(with_delta);
            body.extend(statements);
            imports.extend(&return_imports);
        }
        imports.extend(lifecycle.imports());

        hooks.push(Function {
            name: lifecycle.function_name(),
            params: lifecycle.params(),
            attributes: lifecycle.attributes(),
            body,
        });
    }

    let interface_overrides = interface_overrides(linearized, &implied, registry)?;

    let model = ContractModel {
        name: options.name.clone(),
        license: options.info.license.clone(),
        security_contact: options.info.security_contact().map(str::to_string),
        imports,
        parents,
        using,
        state_vars,
        constructor,
        functions,
        hooks,
        interface_overrides,
        permissions: *permissions,
        components: linearized.to_vec(),
    };
    Ok(model)
}

fn render_function(template: &FunctionTemplate, bindings: &Bindings) -> Result<Function> {
    let attributes = bindings
        .render_all(&template.attributes)?
        .into_iter()
        .filter(|attribute| !attribute.is_empty())
        .collect();
    Ok(Function {
        name: template.name.clone(),
        params: template.params.clone(),
        attributes,
        body: bindings.render_all(&template.body)?,
    })
}

/// One explicit override per view declared by two or more direct parents.
fn interface_overrides(
    linearized: &[ComponentId],
    implied: &BTreeSet<ComponentId>,
    registry: &Registry,
) -> Result<Vec<Function>> {
    let mut declared: IndexMap<&str, (&InterfaceMethod, Vec<&str>)> = IndexMap::new();
    for id in linearized {
        if implied.contains(id) {
            continue;
        }
        let component = registry.get(*id)?;
        for method in &component.interfaces {
            let (first, owners) = declared
                .entry(method.name.as_str())
                .or_insert_with(|| (method, Vec::new()));
            if first.params != method.params || first.returns != method.returns {
                return Err(Error::registry(format!(
                    "'{}' declares '{}' with a different signature",
                    id, method.name
                )));
            }
            owners.push(component.name.as_str());
        }
    }

    Ok(declared
        .into_values()
        .filter(|(_, owners)| owners.len() > 1)
        .map(|(method, owners)| {
            let args: Vec<&str> = method.params.iter().map(|p| p.name.as_str()).collect();
            Function {
                name: method.name.clone(),
                params: method.params.iter().map(ToString::to_string).collect(),
                attributes: vec![
                    "public".to_string(),
                    "view".to_string(),
                    format!("override({})", owners.join(", ")),
                    format!("returns ({})", method.returns),
                ],
                body: vec![format!(
                    "return super.{}({});",
                    method.name,
                    args.join(", ")
                )],
            }
        })
        .collect())
}

/// Phase that assembles the [`ContractModel`].
pub struct ComposePhase;

impl Phase for ComposePhase {
    fn name(&self) -> &'static str {
        "compose"
    }

    fn description(&self) -> &'static str {
        "Compose lifecycle bodies, functions and imports into the contract model"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let constructor = ctx.constructor.clone().ok_or(Error::Pipeline {
            phase: self.name(),
            missing: "constructor",
        })?;
        let model = compose(
            ctx.options(self.name())?,
            ctx.permissions(self.name())?,
            ctx.linearized(self.name())?,
            constructor,
            ctx.registry,
        )?;

        debug!(
            hooks = model.hooks.len(),
            functions = model.functions.len(),
            "composed contract model"
        );
        trace!(parents = ?model.parents, "contract parents");

        ctx.model = Some(model);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hookwright_options::{AccessKind, HookKind, PartialOptions, Permission, SharesConfig};

    use super::*;
    use crate::pipeline::Pipeline;

    fn model(partial: PartialOptions) -> ContractModel {
        Pipeline::new()
            .run(Registry::builtin(), partial)
            .expect("pipeline should succeed")
            .model
            .expect("model composed")
    }

    fn hook(model: &ContractModel, name: &str) -> Function {
        model
            .hooks
            .iter()
            .find(|h| h.name == name)
            .cloned()
            .unwrap_or_else(|| panic!("no hook {name}"))
    }

    #[test]
    fn test_default_model() {
        let model = model(PartialOptions::default());
        assert_eq!(model.name, "MyHook");
        assert_eq!(model.parents, vec!["BaseHook"]);
        assert!(model.hooks.is_empty());
        assert!(model.functions.is_empty());
        assert!(model.imports.has_symbol("Hooks"));
        assert!(model.imports.has_symbol("IPoolManager"));
    }

    #[test]
    fn test_hooks_match_permissions() {
        let partial = PartialOptions {
            hook: Some(HookKind::BaseDynamicFee),
            permissions: Some(PermissionSet::from_permissions([
                Permission::BeforeDonate,
                Permission::AfterSwapReturnDelta,
            ])),
            ..PartialOptions::default()
        };
        let model = model(partial);
        let names: Vec<&str> = model.hook_names().collect();
        assert_eq!(
            names,
            vec!["_afterInitialize", "_afterSwap", "_beforeDonate"]
        );

        assert_eq!(
            hook(&model, "_afterInitialize").body,
            vec!["return super._afterInitialize(sender, key, sqrtPriceX96, tick);"]
        );
        assert_eq!(
            hook(&model, "_afterSwap").body,
            vec![
                "int128 hookDelta = 0;",
                "return (this.afterSwap.selector, hookDelta);"
            ]
        );
    }

    #[test]
    fn test_pausable_statements_precede_return() {
        let partial = PartialOptions {
            pausable: Some(true),
            hook: Some(HookKind::BaseAsyncSwap),
            ..PartialOptions::default()
        };
        let model = model(partial);
        assert_eq!(
            hook(&model, "_beforeSwap").body,
            vec![
                "_requireNotPaused();",
                "return super._beforeSwap(sender, key, params, hookData);"
            ]
        );
        assert_eq!(
            hook(&model, "_beforeDonate").body,
            vec!["_requireNotPaused();", "return this.beforeDonate.selector;"]
        );
        assert_eq!(model.parents, vec!["BaseAsyncSwap", "Ownable", "Pausable"]);
    }

    #[test]
    fn test_gated_functions() {
        for (access, modifier) in [
            (AccessKind::Ownable, "onlyOwner"),
            (AccessKind::Roles, "onlyRole(PAUSER_ROLE)"),
            (AccessKind::Managed, "restricted"),
        ] {
            let partial = PartialOptions {
                pausable: Some(true),
                access: Some(Some(access)),
                ..PartialOptions::default()
            };
            let model = model(partial);
            let pause = model.functions.iter().find(|f| f.name == "pause").unwrap();
            assert_eq!(pause.attributes, vec!["public", modifier]);
            assert_eq!(pause.body, vec!["_pause();"]);
        }
    }

    #[test]
    fn test_role_constants() {
        let partial = PartialOptions {
            pausable: Some(true),
            access: Some(Some(AccessKind::Roles)),
            ..PartialOptions::default()
        };
        let model = model(partial);
        assert_eq!(
            model.state_vars,
            vec!["bytes32 public constant PAUSER_ROLE = keccak256(\"PAUSER_ROLE\");"]
        );
    }

    #[test]
    fn test_supports_interface_override() {
        let partial = PartialOptions {
            access: Some(Some(AccessKind::Roles)),
            shares: Some(SharesConfig::erc1155("ipfs://shares/{id}").into()),
            ..PartialOptions::default()
        };
        let model = model(partial);
        assert_eq!(model.interface_overrides.len(), 1);
        let method = &model.interface_overrides[0];
        assert_eq!(method.signature(), "supportsInterface(bytes4 interfaceId)");
        assert_eq!(
            method.attributes,
            vec!["public", "view", "override(AccessControl, ERC1155)", "returns (bool)"]
        );
    }

    #[test]
    fn test_single_interface_needs_no_override() {
        let partial = PartialOptions {
            shares: Some(SharesConfig::erc6909().into()),
            ..PartialOptions::default()
        };
        assert!(model(partial).interface_overrides.is_empty());
    }

    #[test]
    fn test_custom_accounting_mint_and_burn() {
        let partial = PartialOptions {
            hook: Some(HookKind::BaseCustomAccounting),
            ..PartialOptions::default()
        };
        let model = model(partial);
        let mint = model.functions.iter().find(|f| f.name == "_mint").unwrap();
        assert_eq!(mint.body, vec!["_mint(params.to, 0, shares);"]);
        assert_eq!(model.parents, vec!["BaseCustomAccounting", "ERC6909"]);
    }

    #[test]
    fn test_utilities_add_using_not_parents() {
        let partial = PartialOptions {
            currency_settler: Some(true),
            safe_cast: Some(true),
            ..PartialOptions::default()
        };
        let model = model(partial);
        assert_eq!(model.parents, vec!["BaseHook"]);
        assert_eq!(
            model.using,
            vec![
                "CurrencySettler for Currency",
                "SafeCast for uint256",
                "SafeCast for int256"
            ]
        );
        assert!(model.imports.has_symbol("Currency"));
    }
}
