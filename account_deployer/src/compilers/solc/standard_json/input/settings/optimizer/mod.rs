//!
//! The `solc --standard-json` input settings optimizer.
//!

use serde::Serialize;

use crate::config::solidity::optimizer::Optimizer as OptimizerConfig;

///
/// The `solc --standard-json` input settings optimizer.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimizer {
    /// Whether the optimizer is enabled.
    pub enabled: bool,
    /// The expected number of runs of each opcode.
    pub runs: u32,
}

impl Optimizer {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(enabled: bool, runs: u32) -> Self {
        Self { enabled, runs }
    }
}

impl From<&OptimizerConfig> for Optimizer {
    fn from(config: &OptimizerConfig) -> Self {
        Self::new(config.enabled, config.runs)
    }
}
