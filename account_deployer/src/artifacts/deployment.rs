//!
//! The deployment record.
//!

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

///
/// The deployment record.
///
/// Stored at `<deployments>/<network>/<contract name>.json`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// The deployed contract address.
    pub address: web3::types::Address,
    /// The deployment transaction hash, if the contract was deployed by this record's run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<web3::types::H256>,
    /// The constructor arguments.
    pub args: Vec<String>,
    /// The contract ABI.
    pub abi: serde_json::Value,
    /// The `0x`-prefixed deploy bytecode.
    pub bytecode: String,
    /// Whether the address was derived deterministically.
    pub deterministic: bool,
}

impl Deployment {
    ///
    /// Returns the record file path.
    ///
    pub fn path(directory: &Path, network: &str, contract_name: &str) -> PathBuf {
        directory
            .join(network)
            .join(format!("{contract_name}.json"))
    }

    ///
    /// Writes the record.
    ///
    pub fn write(&self, directory: &Path, network: &str, contract_name: &str) -> anyhow::Result<PathBuf> {
        let path = Self::path(directory, network, contract_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Deployments directory {parent:?} creating error: {error}")
            })?;
        }
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path.as_path(), json)
            .map_err(|error| anyhow::anyhow!("Deployment record {path:?} writing error: {error}"))?;
        Ok(path)
    }

    ///
    /// Reads the record, if it exists.
    ///
    pub fn read(directory: &Path, network: &str, contract_name: &str) -> anyhow::Result<Option<Self>> {
        let path = Self::path(directory, network, contract_name);
        if !path.exists() {
            return Ok(None);
        }
        let file = std::fs::File::open(path.as_path())
            .map_err(|error| anyhow::anyhow!("Deployment record {path:?} opening error: {error}"))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .map(Some)
            .map_err(|error| anyhow::anyhow!("Deployment record {path:?} parsing error: {error}"))
    }
}
