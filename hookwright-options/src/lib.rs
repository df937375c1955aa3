//! Option model for the hookwright contract generator.
//!
//! Callers describe a hook with a [`PartialOptions`] record, every field
//! optional. [`PartialOptions::normalize`] fills the documented defaults and
//! yields the [`Options`] record the generator consumes.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod access;
mod error;
mod hook;
mod info;
mod options;
mod permissions;
mod serde_helpers;
mod shares;
mod validate;

pub use access::AccessKind;
pub use error::{Error, Result};
pub use hook::HookKind;
pub use info::{DEFAULT_LICENSE, Metadata};
pub use options::{
    BLOCK_NUMBER_OFFSET, DEFAULT_BLOCK_NUMBER_OFFSET, DEFAULT_NAME, Inputs, Options,
    PartialOptions,
};
pub use permissions::{Permission, PermissionSet};
pub use shares::{PartialShares, SharesConfig, SharesKind};
