//!
//! The Solidity optimizer settings.
//!

use serde::Serialize;

///
/// The Solidity optimizer settings.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Optimizer {
    /// Whether the optimizer is enabled.
    pub enabled: bool,
    /// The expected number of runs of each opcode over the contract lifetime.
    pub runs: u32,
}

impl Optimizer {
    /// The default number of runs used by `solc`.
    pub const DEFAULT_RUNS: u32 = 200;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(enabled: bool, runs: u32) -> Self {
        Self { enabled, runs }
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(false, Self::DEFAULT_RUNS)
    }
}
