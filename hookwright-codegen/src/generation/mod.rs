//! Generated output helpers.
//!
//! - [`ImportCollector`] - import tracking and deduplication
//! - [`Bindings`] - placeholder substitution for registry templates

mod bindings;
mod imports;

pub use bindings::{Bindings, CONTRACT_NAME, RESTRICTED, SHARES_NAME, SHARES_SYMBOL, SHARES_URI};
pub use imports::{ImportCollector, ImportRef};
