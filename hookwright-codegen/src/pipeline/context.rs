//! Compilation context passed through pipeline phases.

use hookwright_options::{Options, PartialOptions, PermissionSet};

use super::{
    diagnostic::{Diagnostic, Severity},
    phases::Selection,
};
use crate::{
    Error, Result,
    model::{Constructor, ContractModel},
    registry::{ComponentId, Registry},
};

/// State of one generation run.
///
/// Every output slot starts empty and is filled by the phase that owns it.
/// Accessors return [`Error::Pipeline`] when a phase asks for a slot that
/// no earlier phase has filled.
#[derive(Debug)]
pub struct CompilationContext<'r> {
    pub registry: &'r Registry,
    /// The options as the caller supplied them.
    pub partial: PartialOptions,
    /// Populated by NormalizePhase.
    pub options: Option<Options>,
    /// Populated by ResolvePhase.
    pub permissions: Option<PermissionSet>,
    /// Populated by SelectPhase.
    pub selection: Option<Selection>,
    /// Populated by LinearizePhase.
    pub linearized: Option<Vec<ComponentId>>,
    /// Populated by ConstructPhase.
    pub constructor: Option<Constructor>,
    /// Populated by ComposePhase.
    pub model: Option<ContractModel>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'r> CompilationContext<'r> {
    pub fn new(registry: &'r Registry, partial: PartialOptions) -> Self {
        Self {
            registry,
            partial,
            options: None,
            permissions: None,
            selection: None,
            linearized: None,
            constructor: None,
            model: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn options(&self, phase: &'static str) -> Result<&Options> {
        self.options.as_ref().ok_or(Error::Pipeline {
            phase,
            missing: "normalized options",
        })
    }

    pub fn permissions(&self, phase: &'static str) -> Result<&PermissionSet> {
        self.permissions.as_ref().ok_or(Error::Pipeline {
            phase,
            missing: "resolved permissions",
        })
    }

    pub fn selection(&self, phase: &'static str) -> Result<&Selection> {
        self.selection.as_ref().ok_or(Error::Pipeline {
            phase,
            missing: "component selection",
        })
    }

    pub fn linearized(&self, phase: &'static str) -> Result<&[ComponentId]> {
        self.linearized.as_deref().ok_or(Error::Pipeline {
            phase,
            missing: "linearized components",
        })
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
