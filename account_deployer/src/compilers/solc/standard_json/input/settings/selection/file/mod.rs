//!
//! The `solc --standard-json` output file selection.
//!

pub mod flag;

use std::collections::BTreeSet;

use serde::Serialize;

use self::flag::Flag as SelectionFlag;

///
/// The `solc --standard-json` output file selection.
///
#[derive(Debug, Default, Serialize)]
pub struct File {
    /// The per-contract output selections.
    #[serde(rename = "*", skip_serializing_if = "Option::is_none")]
    pub per_contract: Option<BTreeSet<SelectionFlag>>,
}

impl File {
    ///
    /// Creates the selection required by the artifacts.
    ///
    pub fn new_required() -> Self {
        Self {
            per_contract: Some(BTreeSet::from([
                SelectionFlag::ABI,
                SelectionFlag::Bytecode,
                SelectionFlag::DeployedBytecode,
            ])),
        }
    }
}
