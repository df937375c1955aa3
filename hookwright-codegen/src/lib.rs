//! Composition engine and Solidity renderer for Uniswap v4 hook contracts.
//!
//! The entry points are [`print`], [`generate`], [`defaults`] and
//! [`is_access_control_required`]. Generation runs the [`pipeline`] over a
//! [`Registry`] of components and renders the resulting [`ContractModel`].
//!
//! ```
//! use hookwright_codegen::print;
//! use hookwright_options::{HookKind, PartialOptions};
//!
//! let source = print(&PartialOptions {
//!     name: Some("MyDynamicFeeHook".into()),
//!     hook: Some(HookKind::BaseDynamicFee),
//!     ..PartialOptions::default()
//! })
//! .unwrap();
//! assert!(source.contains("contract MyDynamicFeeHook is BaseDynamicFee {"));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod error;
pub mod generation;
pub mod lifecycle;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod render;
pub mod roles;

pub use error::{Error, Result};
use hookwright_options::{Options, PartialOptions};
pub use model::ContractModel;
pub use pipeline::{Diagnostic, Pipeline, Severity};
pub use registry::Registry;

/// The output of one generation run.
#[derive(Debug, Clone)]
pub struct Generated {
    pub model: ContractModel,
    pub source: String,
    /// Non-fatal notes: defaults applied and options ignored.
    pub diagnostics: Vec<Diagnostic>,
}

/// Generate a contract against an explicit registry.
///
/// # Errors
///
/// [`Error::Configuration`] for inconsistent options; any other variant
/// points at a defect in the registry.
pub fn generate(options: &PartialOptions, registry: &Registry) -> Result<Generated> {
    let ctx = Pipeline::new().run(registry, options.clone())?;
    let diagnostics = ctx.diagnostics;
    let model = ctx.model.ok_or(Error::Pipeline {
        phase: "render",
        missing: "contract model",
    })?;
    let source = render::render(&model);

    Ok(Generated {
        model,
        source,
        diagnostics,
    })
}

/// Generate contract source with the built-in registry.
///
/// `print(&PartialOptions::default())` renders the default contract.
pub fn print(options: &PartialOptions) -> Result<String> {
    generate(options, Registry::builtin()).map(|generated| generated.source)
}

/// The fully normalized default options.
pub fn defaults() -> Options {
    Options::defaults()
}

/// Whether the options describe a feature set that needs access control,
/// judged by the built-in registry.
///
/// When true and `access` is unset or `false`, generation defaults access
/// to `ownable`.
pub fn is_access_control_required(options: &PartialOptions) -> bool {
    pipeline::phases::is_access_control_required(options, Registry::builtin())
}
