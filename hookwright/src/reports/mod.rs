//! The `check` summary, kept apart from the printing so it can be asserted on.

mod check;
mod output;

pub use check::CheckReport;
pub use output::{Report, TerminalOutput};
