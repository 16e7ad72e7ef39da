//!
//! The `solc --standard-json` output contract.
//!

pub mod evm;

use serde::Deserialize;

use self::evm::EVM;

///
/// The `solc --standard-json` output contract.
///
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// The contract ABI.
    #[serde(default)]
    pub abi: Option<serde_json::Value>,
    /// The contract EVM data.
    pub evm: Option<EVM>,
}
