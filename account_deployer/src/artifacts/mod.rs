//!
//! The compiled contract artifact.
//!

pub mod deployment;


use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

///
/// The compiled contract artifact.
///
/// Stored at `<artifacts>/<source name>/<contract name>.json`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// The artifact format identifier.
    #[serde(rename = "_format")]
    pub format: String,
    /// The contract name.
    pub contract_name: String,
    /// The source file path, relative to the project root.
    pub source_name: String,
    /// The contract ABI.
    pub abi: serde_json::Value,
    /// The `0x`-prefixed deploy bytecode.
    pub bytecode: String,
    /// The `0x`-prefixed runtime bytecode.
    pub deployed_bytecode: String,
}

impl Artifact {
    /// The artifact format identifier.
    pub const FORMAT: &'static str = "hh-sol-artifact-1";

    /// The artifact file extension.
    pub const EXTENSION: &'static str = "json";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        contract_name: String,
        source_name: String,
        abi: serde_json::Value,
        bytecode: &str,
        deployed_bytecode: &str,
    ) -> Self {
        Self {
            format: Self::FORMAT.to_owned(),
            contract_name,
            source_name,
            abi,
            bytecode: Self::prefixed(bytecode),
            deployed_bytecode: Self::prefixed(deployed_bytecode),
        }
    }

    ///
    /// Returns the artifact file path.
    ///
    pub fn path(directory: &Path, source_name: &str, contract_name: &str) -> PathBuf {
        directory
            .join(source_name)
            .join(format!("{contract_name}.{}", Self::EXTENSION))
    }

    ///
    /// Writes the artifact to the directory.
    ///
    pub fn write(&self, directory: &Path) -> anyhow::Result<PathBuf> {
        let path = Self::path(directory, self.source_name.as_str(), self.contract_name.as_str());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Artifact directory {parent:?} creating error: {error}")
            })?;
        }
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path.as_path(), json)
            .map_err(|error| anyhow::anyhow!("Artifact {path:?} writing error: {error}"))?;
        Ok(path)
    }

    ///
    /// Reads the artifact file.
    ///
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|error| anyhow::anyhow!("Artifact {path:?} opening error: {error}"))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|error| anyhow::anyhow!("Artifact {path:?} parsing error: {error}"))
    }

    ///
    /// Finds the artifact of the contract by its name.
    ///
    /// Fails if the name is ambiguous between several source files.
    ///
    pub fn find(directory: &Path, contract_name: &str) -> anyhow::Result<Self> {
        let pattern = directory
            .join("**")
            .join(format!("{contract_name}.{}", Self::EXTENSION));
        let pattern = pattern.to_string_lossy();

        let paths = glob::glob(pattern.as_ref())
            .map_err(|error| anyhow::anyhow!("Artifact pattern `{pattern}` error: {error}"))?
            .collect::<Result<Vec<PathBuf>, glob::GlobError>>()?;

        match paths.len() {
            0 => anyhow::bail!(
                "Artifact of the contract `{contract_name}` not found in {directory:?}. Compile the contracts first"
            ),
            1 => Self::read(paths[0].as_path()),
            _ => anyhow::bail!(
                "Contract name `{contract_name}` is ambiguous: {:?}",
                paths
            ),
        }
    }

    ///
    /// Returns the decoded deploy bytecode.
    ///
    pub fn bytecode(&self) -> anyhow::Result<Vec<u8>> {
        let bytecode = crate::utils::decode_hex(self.bytecode.as_str()).map_err(|error| {
            anyhow::anyhow!(
                "Bytecode of the contract `{}` is invalid, possibly due to unlinked libraries: {}",
                self.contract_name,
                error
            )
        })?;
        if bytecode.is_empty() {
            anyhow::bail!(
                "Contract `{}` has no bytecode. Abstract contracts and interfaces cannot be deployed",
                self.contract_name
            );
        }
        Ok(bytecode)
    }

    ///
    /// Adds the `0x` prefix if missing.
    ///
    fn prefixed(bytecode: &str) -> String {
        if bytecode.starts_with("0x") {
            bytecode.to_owned()
        } else {
            format!("0x{bytecode}")
        }
    }
}
