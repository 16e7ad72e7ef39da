//!
//! The network descriptor.
//!

pub mod name;
pub mod provider;


use serde::Serialize;

use crate::environment::Environment;

use self::name::Name;
use self::provider::Provider;

///
/// The network descriptor.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    /// The network name.
    pub name: String,
    /// The JSON-RPC endpoint URL.
    #[serde(serialize_with = "crate::utils::serialize_redacted_url")]
    pub url: String,
    /// The signing credentials, in the order of preference.
    ///
    /// Empty if the node signs transactions with its own unlocked accounts.
    #[serde(serialize_with = "crate::utils::serialize_redacted_list")]
    pub accounts: Vec<String>,
}

impl Network {
    /// The local development node URL.
    pub const LOCALHOST_URL: &'static str = "http://localhost:8545";

    /// The CI-only local `geth` node URL.
    pub const LOCALGETH_URL: &'static str = "http://localgeth:8545";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, url: String, accounts: Vec<String>) -> Self {
        Self {
            name,
            url,
            accounts,
        }
    }

    ///
    /// Creates a network signed by the node's own accounts.
    ///
    pub fn unlocked(name: &str, url: &str) -> Self {
        Self::new(name.to_owned(), url.to_owned(), vec![])
    }

    ///
    /// Creates a network signed by the configured private key.
    ///
    /// The key is not validated here.
    ///
    pub fn with_private_key(name: &str, url: String, environment: &Environment) -> Self {
        Self::new(
            name.to_owned(),
            url,
            vec![environment.private_key.clone().unwrap_or_default()],
        )
    }

    ///
    /// Creates a network served by a hosted provider.
    ///
    pub fn hosted(name: &str, environment: &Environment) -> Self {
        let url = Provider::for_network(name).url(name, environment);
        Self::with_private_key(name, url, environment)
    }

    ///
    /// Resolves the descriptor of a supported network.
    ///
    pub fn resolve(name: Name, environment: &Environment) -> Self {
        match name {
            Name::Dev => Self::unlocked(name.as_str(), Self::LOCALHOST_URL),
            Name::LocalGeth => Self::unlocked(name.as_str(), Self::LOCALGETH_URL),
            Name::Goerli | Name::Sepolia | Name::Mumbai => {
                Self::hosted(name.as_str(), environment)
            }
            Name::Proxy => Self::with_private_key(
                name.as_str(),
                Self::LOCALHOST_URL.to_owned(),
                environment,
            ),
        }
    }

    ///
    /// Returns the validated endpoint URL.
    ///
    pub fn endpoint(&self) -> anyhow::Result<reqwest::Url> {
        let url = reqwest::Url::parse(self.url.as_str()).map_err(|error| {
            anyhow::anyhow!(
                "Network `{}` endpoint `{}` is invalid: {}",
                self.name,
                self.url,
                error
            )
        })?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => anyhow::bail!(
                "Network `{}` endpoint scheme `{}` is not supported. Expected `http` or `https`",
                self.name,
                scheme
            ),
        }
        if url.host_str().is_none() {
            anyhow::bail!("Network `{}` endpoint `{}` has no host", self.name, self.url);
        }
        Ok(url)
    }
}
