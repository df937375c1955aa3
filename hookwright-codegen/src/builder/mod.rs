//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - line-oriented builder for indented source text
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
