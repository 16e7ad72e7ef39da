//!
//! The process environment snapshot.
//!

use std::path::Path;

///
/// The process environment snapshot.
///
/// Read once at startup, so that the configuration never observes the
/// environment changing underneath it.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// The deployer private key.
    pub private_key: Option<String>,
    /// The Alchemy API key.
    pub alchemy_id: Option<String>,
    /// The Infura API key.
    pub infura_id: Option<String>,
    /// The Etherscan API key used for contract verification.
    pub etherscan_api_key: Option<String>,
    /// Whether the coverage instrumentation is running.
    pub coverage: bool,
}

impl Environment {
    /// The private key variable.
    pub const PRIVATE_KEY: &'static str = "PRIVATE_KEY";

    /// The Alchemy API key variable.
    pub const ALCHEMY_ID: &'static str = "ALCHEMY_ID";

    /// The Infura API key variable.
    pub const INFURA_ID: &'static str = "INFURA_ID";

    /// The Etherscan API key variable.
    pub const ETHERSCAN_API_KEY: &'static str = "ETHERSCAN_API_KEY";

    /// The coverage mode flag variable.
    pub const COVERAGE: &'static str = "COVERAGE";

    /// The dotenv file name.
    pub const DOTENV_FILE_NAME: &'static str = ".env";

    ///
    /// Loads the dotenv file from the project root, if it exists.
    ///
    /// Variables already set in the process environment take precedence.
    ///
    pub fn load_dotenv(root: &Path) -> anyhow::Result<bool> {
        let path = root.join(Self::DOTENV_FILE_NAME);
        if !path.exists() {
            return Ok(false);
        }
        dotenvy::from_path(path.as_path())
            .map_err(|error| anyhow::anyhow!("Dotenv file {path:?} loading error: {error}"))?;
        Ok(true)
    }

    ///
    /// Takes the snapshot of the current process environment.
    ///
    pub fn from_process() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    ///
    /// Takes the snapshot using an arbitrary variable lookup.
    ///
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            private_key: lookup(Self::PRIVATE_KEY),
            alchemy_id: lookup(Self::ALCHEMY_ID),
            infura_id: lookup(Self::INFURA_ID),
            etherscan_api_key: lookup(Self::ETHERSCAN_API_KEY),
            coverage: lookup(Self::COVERAGE).is_some(),
        }
    }
}
