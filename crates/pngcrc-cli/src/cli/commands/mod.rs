//! CLI command handlers.

mod generate;

pub use generate::run_generate;

use pngcrc_core::Generated;

/// How a run ended without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Sidecar written.
    Generated(Generated),
    /// User answered no to the extension warning. Not a failure.
    Declined,
}
