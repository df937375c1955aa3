//! Generation pipeline.
//!
//! A [`Pipeline`] runs the phases that turn partial options into a
//! [`ContractModel`](crate::model::ContractModel):
//!
//! normalize → resolve → select → linearize → construct → compose
//!
//! Each phase wraps a pure function of the previous phases' output and the
//! read-only [`Registry`](crate::registry::Registry). Diagnostics collect in
//! the [`CompilationContext`].

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
