//! Built-in pipeline phases.
//!
//! - [`NormalizePhase`] - fills option defaults
//! - [`ResolvePhase`] - resolves the permission bitmap
//! - [`SelectPhase`] - selects components
//! - [`LinearizePhase`] - orders components parents-first
//! - [`ConstructPhase`] - synthesizes the constructor
//! - [`ComposePhase`] - builds the contract model

mod compose;
mod construct;
mod contributions;
mod linearize;
mod normalize;
mod resolve;
mod select;

pub use compose::{ComposePhase, compose};
pub use construct::{ConstructPhase, synthesize};
pub use contributions::{access_gate, contributed_functions, roles, template_bindings};
pub use linearize::{LinearizePhase, implied_ancestors, linearize};
pub use normalize::NormalizePhase;
pub use resolve::{ResolvePhase, resolve_permissions};
pub use select::{
    DEFAULT_ACCESS, SelectPhase, Selection, is_access_control_required, privileged_components,
    select, shares_policy,
};
