//! Component descriptors.

use std::{collections::BTreeMap, fmt};

use hookwright_options::{AccessKind, HookKind, Permission, PermissionSet, SharesKind};

use crate::generation::ImportRef;

/// Utility libraries attached with `using` directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Utility {
    CurrencySettler,
    SafeCast,
    TransientStorage,
}

impl Utility {
    pub const ALL: [Utility; 3] = [
        Utility::CurrencySettler,
        Utility::SafeCast,
        Utility::TransientStorage,
    ];

    /// The option flag that enables this utility.
    pub fn as_str(&self) -> &'static str {
        match self {
            Utility::CurrencySettler => "currencySettler",
            Utility::SafeCast => "safeCast",
            Utility::TransientStorage => "transientStorage",
        }
    }
}

/// Identity of a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentId {
    Hook(HookKind),
    Access(AccessKind),
    Pausable,
    Shares(SharesKind),
    Utility(Utility),
}

impl ComponentId {
    /// The tie-break tier used when two components have no ordering constraint.
    pub fn tier(&self) -> Tier {
        match self {
            ComponentId::Hook(_) => Tier::Hook,
            ComponentId::Access(_) => Tier::Access,
            ComponentId::Pausable => Tier::Pausable,
            ComponentId::Shares(_) => Tier::Shares,
            ComponentId::Utility(_) => Tier::Utility,
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Hook(kind) => write!(f, "hook:{}", kind),
            ComponentId::Access(kind) => write!(f, "access:{}", kind),
            ComponentId::Pausable => write!(f, "pausable"),
            ComponentId::Shares(kind) => write!(f, "shares:{}", kind),
            ComponentId::Utility(utility) => write!(f, "utility:{}", utility.as_str()),
        }
    }
}

/// Linearization tiers, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Hook,
    Access,
    Pausable,
    Shares,
    Utility,
}

/// Whether a component becomes a parent contract or a `using` library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Contract,
    Library,
}

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// How a hook kind relates to the shares option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SharesPolicy {
    #[default]
    Optional,
    /// Shares are mandatory; the given standard is used when none is chosen.
    Required(SharesKind),
    Forbidden,
}

/// A function a component contributes, or requires the generated contract to implement.
///
/// Attributes and body lines are templates; `${restricted}` binds to the
/// access gate for [`role`](Self::role).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionTemplate {
    pub name: String,
    pub params: Vec<String>,
    pub attributes: Vec<String>,
    pub body: Vec<String>,
    /// Role guarding the function, upper snake case without the `_ROLE` suffix.
    pub role: Option<String>,
    pub imports: Vec<ImportRef>,
}

impl FunctionTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            attributes: Vec::new(),
            body: Vec::new(),
            role: None,
            imports: Vec::new(),
        }
    }

    pub fn params<S: Into<String>>(mut self, params: impl IntoIterator<Item = S>) -> Self {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn attributes<S: Into<String>>(mut self, attributes: impl IntoIterator<Item = S>) -> Self {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn body<S: Into<String>>(mut self, body: impl IntoIterator<Item = S>) -> Self {
        self.body = body.into_iter().map(Into::into).collect();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn imports(mut self, imports: &[ImportRef]) -> Self {
        self.imports = imports.to_vec();
        self
    }
}

/// A view function several parents may each declare, which the generated
/// contract then has to override explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceMethod {
    pub name: String,
    pub params: Vec<Param>,
    pub returns: String,
}

impl InterfaceMethod {
    /// ERC-165 `supportsInterface(bytes4)`.
    pub fn supports_interface() -> Self {
        Self {
            name: "supportsInterface".to_string(),
            params: vec![Param::new("bytes4", "interfaceId")],
            returns: "bool".to_string(),
        }
    }
}

/// Access-control behavior of an access module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    /// Modifier template; `${role}` binds to the role constant.
    pub modifier: String,
    /// Whether each role gets its own constant, constructor parameter and grant.
    pub grants_roles: bool,
}

/// A static, read-only registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub id: ComponentId,
    /// Solidity contract or library name.
    pub name: String,
    pub kind: ComponentKind,
    pub parents: Vec<ComponentId>,
    pub imports: Vec<ImportRef>,
    pub ctor_params: Vec<Param>,
    /// Base-initialization call template, e.g. `Ownable(initialOwner)`.
    pub ctor_init: Option<String>,
    pub ctor_body: Vec<String>,
    pub state_vars: Vec<String>,
    /// `using` directive bodies, e.g. `SafeCast for uint256`.
    pub using: Vec<String>,
    /// Statements contributed to each primary lifecycle hook.
    pub hook_bodies: BTreeMap<Permission, Vec<String>>,
    /// Permissions this component needs. For hook kinds, the base
    /// implements exactly these hooks.
    pub permissions: PermissionSet,
    /// Concrete functions always emitted with the component.
    pub functions: Vec<FunctionTemplate>,
    /// Functions left for the generated contract to implement.
    pub required: Vec<FunctionTemplate>,
    /// Names of functions this component implements for its ancestors.
    pub provides: Vec<String>,
    pub interfaces: Vec<InterfaceMethod>,
    pub shares_policy: SharesPolicy,
    pub gate: Option<AccessGate>,
    /// Extra template bindings this component makes available, e.g. `mintShares`.
    pub bindings: Vec<(String, String)>,
}

impl Component {
    pub fn contract(id: ComponentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ComponentKind::Contract,
            parents: Vec::new(),
            imports: Vec::new(),
            ctor_params: Vec::new(),
            ctor_init: None,
            ctor_body: Vec::new(),
            state_vars: Vec::new(),
            using: Vec::new(),
            hook_bodies: BTreeMap::new(),
            permissions: PermissionSet::empty(),
            functions: Vec::new(),
            required: Vec::new(),
            provides: Vec::new(),
            interfaces: Vec::new(),
            shares_policy: SharesPolicy::Optional,
            gate: None,
            bindings: Vec::new(),
        }
    }

    pub fn library(id: ComponentId, name: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Library,
            ..Self::contract(id, name)
        }
    }

    pub fn parent(mut self, parent: ComponentId) -> Self {
        self.parents.push(parent);
        self
    }

    pub fn imports(mut self, imports: &[ImportRef]) -> Self {
        self.imports.extend_from_slice(imports);
        self
    }

    pub fn ctor_param(mut self, ty: &str, name: &str) -> Self {
        self.ctor_params.push(Param::new(ty, name));
        self
    }

    pub fn ctor_init(mut self, init: impl Into<String>) -> Self {
        self.ctor_init = Some(init.into());
        self
    }

    pub fn ctor_statement(mut self, statement: impl Into<String>) -> Self {
        self.ctor_body.push(statement.into());
        self
    }

    pub fn state_var(mut self, declaration: impl Into<String>) -> Self {
        self.state_vars.push(declaration.into());
        self
    }

    pub fn using(mut self, directive: impl Into<String>) -> Self {
        self.using.push(directive.into());
        self
    }

    /// Contribute a statement to a primary lifecycle hook.
    pub fn hook_statement(mut self, permission: Permission, statement: impl Into<String>) -> Self {
        self.hook_bodies
            .entry(permission)
            .or_default()
            .push(statement.into());
        self
    }

    pub fn permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        for permission in permissions {
            self.permissions.insert(permission);
        }
        self
    }

    pub fn function(mut self, function: FunctionTemplate) -> Self {
        self.functions.push(function);
        self
    }

    pub fn requires(mut self, function: FunctionTemplate) -> Self {
        self.required.push(function);
        self
    }

    pub fn provides(mut self, name: impl Into<String>) -> Self {
        self.provides.push(name.into());
        self
    }

    pub fn interface(mut self, method: InterfaceMethod) -> Self {
        self.interfaces.push(method);
        self
    }

    pub fn shares_policy(mut self, policy: SharesPolicy) -> Self {
        self.shares_policy = policy;
        self
    }

    pub fn gate(mut self, modifier: impl Into<String>, grants_roles: bool) -> Self {
        self.gate = Some(AccessGate {
            modifier: modifier.into(),
            grants_roles,
        });
        self
    }

    pub fn binding(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.bindings.push((key.into(), value.into()));
        self
    }

    /// Whether any function of this component is privileged.
    pub fn requires_access(&self) -> bool {
        self.functions
            .iter()
            .chain(&self.required)
            .any(|function| function.role.is_some())
    }

    pub fn is_contract(&self) -> bool {
        self.kind == ComponentKind::Contract
    }
}
