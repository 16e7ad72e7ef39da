//!
//! The hosted JSON-RPC provider.
//!

use crate::environment::Environment;

///
/// The hosted JSON-RPC provider.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Alchemy, used for the networks it is explicitly aliased for.
    Alchemy,
    /// Infura, used for every other hosted network.
    Infura,
}

impl Provider {
    /// The network name served by Alchemy.
    pub const ALCHEMY_ALIAS: &'static str = "mumbai";

    ///
    /// Selects the provider for the network name.
    ///
    pub fn for_network(name: &str) -> Self {
        match name {
            Self::ALCHEMY_ALIAS => Self::Alchemy,
            _ => Self::Infura,
        }
    }

    ///
    /// Returns the endpoint URL of the network.
    ///
    /// A missing API key is substituted with an empty string and surfaces as
    /// a connection failure once the network is used.
    ///
    pub fn url(&self, name: &str, environment: &Environment) -> String {
        match self {
            Self::Alchemy => format!(
                "https://polygon-mumbai.g.alchemy.com/v2/{}",
                environment.alchemy_id.as_deref().unwrap_or_default()
            ),
            Self::Infura => format!(
                "https://{name}.infura.io/v3/{}",
                environment.infura_id.as_deref().unwrap_or_default()
            ),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alchemy => write!(f, "alchemy"),
            Self::Infura => write!(f, "infura"),
        }
    }
}
