//!
//! The project configuration.
//!

pub mod network;
pub mod paths;
pub mod solidity;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use crate::environment::Environment;

use self::network::name::Name as NetworkName;
use self::network::Network;
use self::paths::Paths;
use self::solidity::Solidity;

///
/// The project configuration.
///
/// Built once at startup and only read afterwards.
///
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// The supported networks.
    pub networks: BTreeMap<String, Network>,
    /// The Solidity compiler configuration.
    pub solidity: Solidity,
    /// The Etherscan API key used for contract verification.
    #[serde(serialize_with = "crate::utils::serialize_redacted_option")]
    pub etherscan_api_key: Option<String>,
    /// The test harness timeout.
    #[serde(serialize_with = "crate::utils::serialize_duration_millis")]
    pub test_timeout: Duration,
    /// The project paths.
    pub paths: Paths,
}

impl Config {
    /// The test harness timeout in milliseconds.
    pub const TEST_TIMEOUT_MILLIS: u64 = 10_000;

    ///
    /// Builds the configuration from the environment snapshot.
    ///
    pub fn new(root: &Path, environment: &Environment) -> Self {
        let networks = NetworkName::ALL
            .into_iter()
            .map(|name| {
                (
                    name.as_str().to_owned(),
                    Network::resolve(name, environment),
                )
            })
            .collect();

        let mut solidity = Solidity::project();
        if environment.coverage {
            solidity = solidity.collapse_for_coverage();
        }

        Self {
            networks,
            solidity,
            etherscan_api_key: environment.etherscan_api_key.clone(),
            test_timeout: Duration::from_millis(Self::TEST_TIMEOUT_MILLIS),
            paths: Paths::new(root),
        }
    }

    ///
    /// Returns the descriptor of the network.
    ///
    pub fn network(&self, name: NetworkName) -> anyhow::Result<&Network> {
        self.networks
            .get(name.as_str())
            .ok_or_else(|| anyhow::anyhow!("Network `{name}` is not configured"))
    }
}
