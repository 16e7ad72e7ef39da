//!
//! The `solc --standard-json` expected output selection flag.
//!

use serde::Serialize;

///
/// The `solc --standard-json` expected output selection flag.
///
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Flag {
    /// The ABI JSON.
    #[serde(rename = "abi")]
    ABI,
    /// The deploy bytecode.
    #[serde(rename = "evm.bytecode")]
    Bytecode,
    /// The runtime bytecode.
    #[serde(rename = "evm.deployedBytecode")]
    DeployedBytecode,
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ABI => write!(f, "abi"),
            Self::Bytecode => write!(f, "evm.bytecode"),
            Self::DeployedBytecode => write!(f, "evm.deployedBytecode"),
        }
    }
}
