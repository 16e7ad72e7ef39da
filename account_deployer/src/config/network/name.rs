//!
//! The supported network name.
//!

///
/// The supported network name.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Name {
    /// The local development node.
    Dev,
    /// The CI-only local `geth` node, used for gas calculations.
    LocalGeth,
    /// The Goerli public test network.
    Goerli,
    /// The Sepolia public test network.
    Sepolia,
    /// The Polygon Mumbai public test network.
    Mumbai,
    /// The local proxy, signing with the configured private key.
    Proxy,
}

impl Name {
    /// All supported networks.
    pub const ALL: [Self; 6] = [
        Self::Dev,
        Self::LocalGeth,
        Self::Goerli,
        Self::Sepolia,
        Self::Mumbai,
        Self::Proxy,
    ];

    ///
    /// Returns the network name string.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::LocalGeth => "localgeth",
            Self::Goerli => "goerli",
            Self::Sepolia => "sepolia",
            Self::Mumbai => "mumbai",
            Self::Proxy => "proxy",
        }
    }
}

impl std::str::FromStr for Name {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown network `{}`. Supported networks: {}",
                    string,
                    Self::ALL
                        .into_iter()
                        .map(|name| name.as_str())
                        .collect::<Vec<&str>>()
                        .join(", ")
                )
            })
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
