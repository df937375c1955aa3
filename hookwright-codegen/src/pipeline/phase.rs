//! Pipeline phase trait.

use super::CompilationContext;
use crate::Result;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the generation pipeline.
///
/// Each phase reads what earlier phases stored in the context and stores
/// its own output. Phases never touch the registry beyond reading it.
///
/// Built-in phases, in order:
/// - `NormalizePhase` - fills defaults and validates field-level constraints
/// - `ResolvePhase` - computes the final permission set
/// - `SelectPhase` - picks components, applying access and shares defaults
/// - `LinearizePhase` - orders components parents-first
/// - `ConstructPhase` - merges constructor parameters and initializers
/// - `ComposePhase` - assembles the contract model
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues are
    /// recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
