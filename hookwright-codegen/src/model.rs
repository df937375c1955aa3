//! The contract model: the pipeline's terminal value and the renderer's input.

use hookwright_options::PermissionSet;

use crate::{
    generation::ImportCollector,
    registry::{ComponentId, Param},
};

/// A rendered function: every template already bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub params: Vec<String>,
    pub attributes: Vec<String>,
    pub body: Vec<String>,
}

impl Function {
    /// `name(type a, type b)`
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.params.join(", "))
    }
}

/// The synthesized constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constructor {
    pub params: Vec<Param>,
    /// Base-initialization calls, in linearization order.
    pub inits: Vec<String>,
    pub body: Vec<String>,
}

/// Everything the renderer needs, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractModel {
    pub name: String,
    pub license: String,
    pub security_contact: Option<String>,
    pub imports: ImportCollector,
    /// Parent contracts, most-derived last.
    pub parents: Vec<String>,
    /// `using` directive bodies.
    pub using: Vec<String>,
    pub state_vars: Vec<String>,
    pub constructor: Constructor,
    pub functions: Vec<Function>,
    /// Lifecycle overrides in bitmap order.
    pub hooks: Vec<Function>,
    pub interface_overrides: Vec<Function>,
    pub permissions: PermissionSet,
    /// Every selected component, linearized, including implied ancestors.
    pub components: Vec<ComponentId>,
}

impl ContractModel {
    /// Names of the emitted lifecycle overrides.
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.iter().map(|hook| hook.name.as_str())
    }

    pub fn has_component(&self, id: ComponentId) -> bool {
        self.components.contains(&id)
    }
}
