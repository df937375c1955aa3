//! Linearize phase - orders components parents-first.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    Error, Result,
    pipeline::{CompilationContext, Phase},
    registry::{ComponentId, Registry},
};

/// Order the selected components and all of their ancestors so that every
/// component follows its parents.
///
/// Each component appears once however many paths lead to it. Among the
/// components whose parents are all placed, the next one is the lowest by
/// tier (hook, access, pausable, shares, utility) and then by registry
/// declaration order, so the result depends only on the selected set.
///
/// # Errors
///
/// [`Error::Linearization`] when the parent graph has a cycle;
/// [`Error::Registry`] when a component or parent is not registered.
pub fn linearize(selected: &[ComponentId], registry: &Registry) -> Result<Vec<ComponentId>> {
    let mut remaining = BTreeSet::new();
    let mut stack: Vec<ComponentId> = selected.to_vec();
    while let Some(id) = stack.pop() {
        if remaining.insert(id) {
            stack.extend(registry.get(id)?.parents.iter().copied());
        }
    }

    let mut order = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let mut ready = Vec::new();
        for &id in &remaining {
            let parents = &registry.get(id)?.parents;
            if parents.iter().all(|parent| !remaining.contains(parent)) {
                ready.push(id);
            }
        }

        let next = ready
            .into_iter()
            .min_by_key(|id| (id.tier(), registry.declaration_index(*id)));
        match next {
            Some(id) => {
                remaining.remove(&id);
                order.push(id);
            }
            None => {
                return Err(Error::Linearization {
                    cycle: find_cycle(&remaining, registry)?,
                });
            }
        }
    }

    Ok(order)
}

/// Walk parent links among the unplaced components until one repeats.
///
/// Every unplaced component has at least one unplaced parent, so the walk
/// always finds a cycle.
fn find_cycle(remaining: &BTreeSet<ComponentId>, registry: &Registry) -> Result<Vec<String>> {
    let mut path: Vec<ComponentId> = Vec::new();
    let mut current = remaining.iter().next().copied();

    while let Some(id) = current {
        if let Some(start) = path.iter().position(|seen| *seen == id) {
            let mut cycle = Vec::with_capacity(path.len() - start + 1);
            for member in &path[start..] {
                cycle.push(registry.get(*member)?.name.clone());
            }
            cycle.push(registry.get(id)?.name.clone());
            return Ok(cycle);
        }
        path.push(id);
        current = registry
            .get(id)?
            .parents
            .iter()
            .copied()
            .find(|parent| remaining.contains(parent));
    }

    Ok(path.iter().map(ToString::to_string).collect())
}

/// Components that are strict ancestors of another linearized component.
///
/// These are inherited through their descendants: they are neither listed
/// as direct parents nor initialized by the generated constructor.
pub fn implied_ancestors(linearized: &[ComponentId], registry: &Registry) -> BTreeSet<ComponentId> {
    linearized
        .iter()
        .flat_map(|id| registry.ancestors(*id))
        .collect()
}

/// Phase that linearizes the selection.
pub struct LinearizePhase;

impl Phase for LinearizePhase {
    fn name(&self) -> &'static str {
        "linearize"
    }

    fn description(&self) -> &'static str {
        "Order components so every parent precedes its children"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let selection = ctx.selection(self.name())?;
        let linearized = linearize(&selection.components, ctx.registry)?;

        debug!(count = linearized.len(), "linearized components");
        trace!(order = ?linearized, "linearization");

        ctx.linearized = Some(linearized);
        Ok(())
    }
}
