//! Pipeline orchestrator.

use hookwright_options::PartialOptions;
use tracing::debug;

use super::{
    CompilationContext, Phase,
    phases::{
        ComposePhase, ConstructPhase, LinearizePhase, NormalizePhase, ResolvePhase, SelectPhase,
    },
};
use crate::{Result, registry::Registry};

/// The generation pipeline.
///
/// Runs the built-in phases in dependency order, then any extra phases
/// added with [`phase`](Self::phase).
///
/// # Example
///
/// ```
/// use hookwright_codegen::{pipeline::Pipeline, registry::Registry};
/// use hookwright_options::PartialOptions;
///
/// let ctx = Pipeline::new()
///     .run(Registry::builtin(), PartialOptions::default())
///     .unwrap();
/// assert!(ctx.model.is_some());
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run every phase on a fresh context.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; no partial context is returned.
    pub fn run<'r>(
        &self,
        registry: &'r Registry,
        partial: PartialOptions,
    ) -> Result<CompilationContext<'r>> {
        registry.validate()?;
        let mut ctx = CompilationContext::new(registry, partial);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(NormalizePhase),
            Box::new(ResolvePhase),
            Box::new(SelectPhase),
            Box::new(LinearizePhase),
            Box::new(ConstructPhase),
            Box::new(ComposePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
