//! The component registry.
//!
//! A [`Registry`] is an explicitly constructed, read-only index of
//! [`Component`] descriptors. [`Registry::builtin`] returns the process-wide
//! built-in registry; tests construct fixture registries with
//! [`Registry::new`].

pub mod builtin;
mod component;
pub mod paths;

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    sync::OnceLock,
};

pub use component::{
    AccessGate, Component, ComponentId, ComponentKind, FunctionTemplate, InterfaceMethod, Param,
    SharesPolicy, Tier, Utility,
};

use crate::{Error, Result};

/// An indexed set of components.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    components: Vec<Component>,
    index: HashMap<ComponentId, usize>,
}

impl Registry {
    /// Index components in declaration order.
    ///
    /// Construction never fails; integrity problems are reported by
    /// [`validate`](Self::validate). On duplicate ids the first entry wins.
    pub fn new(components: Vec<Component>) -> Self {
        let mut index = HashMap::with_capacity(components.len());
        for (position, component) in components.iter().enumerate() {
            index.entry(component.id).or_insert(position);
        }
        Self { components, index }
    }

    /// The built-in registry, initialized once per process.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| Registry::new(builtin::components()))
    }

    /// Look up a component.
    pub fn get(&self, id: ComponentId) -> Result<&Component> {
        self.find(id)
            .ok_or_else(|| Error::registry(format!("no component registered for '{}'", id)))
    }

    /// Look up a component, if registered.
    pub fn find(&self, id: ComponentId) -> Option<&Component> {
        self.index.get(&id).map(|&position| &self.components[position])
    }

    /// Position of a component in declaration order.
    pub fn declaration_index(&self, id: ComponentId) -> usize {
        self.index.get(&id).copied().unwrap_or(usize::MAX)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Every strict ancestor of `id`, following parent links.
    ///
    /// Unregistered parents are skipped; [`validate`](Self::validate)
    /// reports them. Cycles terminate.
    pub fn ancestors(&self, id: ComponentId) -> BTreeSet<ComponentId> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<ComponentId> = self
            .find(id)
            .map(|c| c.parents.clone())
            .unwrap_or_default();

        while let Some(next) = stack.pop() {
            if !seen.insert(next) {
                continue;
            }
            if let Some(component) = self.find(next) {
                stack.extend(component.parents.iter().copied());
            }
        }
        seen
    }

    /// `id` and all of its ancestors.
    pub fn closure(&self, id: ComponentId) -> BTreeSet<ComponentId> {
        let mut closure = self.ancestors(id);
        closure.insert(id);
        closure
    }

    /// Check the registry for duplicate ids, dangling parents and shares
    /// defaults that point at unregistered components.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.components.len());
        for component in &self.components {
            if !seen.insert(component.id) {
                return Err(Error::registry(format!(
                    "duplicate component id '{}'",
                    component.id
                )));
            }
        }

        for component in &self.components {
            for parent in &component.parents {
                if !self.index.contains_key(parent) {
                    return Err(Error::registry(format!(
                        "'{}' declares unregistered parent '{}'",
                        component.id, parent
                    )));
                }
            }
            if let SharesPolicy::Required(kind) = component.shares_policy
                && !self.index.contains_key(&ComponentId::Shares(kind))
            {
                return Err(Error::registry(format!(
                    "'{}' defaults to unregistered shares '{}'",
                    component.id, kind
                )));
            }
        }
        Ok(())
    }
}
