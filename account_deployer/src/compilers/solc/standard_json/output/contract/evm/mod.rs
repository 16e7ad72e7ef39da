//!
//! The `solc --standard-json` output contract EVM data.
//!

pub mod bytecode;

use serde::Deserialize;

use self::bytecode::Bytecode;

///
/// The `solc --standard-json` output contract EVM data.
///
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EVM {
    /// Contract deploy bytecode.
    pub bytecode: Option<Bytecode>,
    /// Contract runtime bytecode.
    pub deployed_bytecode: Option<Bytecode>,
}
