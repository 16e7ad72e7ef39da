//!
//! The transaction signer.
//!

use std::str::FromStr;

use web3::signing::Key;

///
/// The transaction signer.
///
pub enum Signer {
    /// Signs locally with the private key.
    Local(web3::signing::SecretKey),
    /// Lets the node sign with its unlocked account.
    Node(web3::types::Address),
}

impl Signer {
    ///
    /// Parses the hexadecimal private key with an optional `0x` prefix.
    ///
    pub fn parse_private_key(private_key: &str) -> anyhow::Result<web3::signing::SecretKey> {
        let private_key = private_key.trim();
        if private_key.is_empty() {
            anyhow::bail!("The signing private key is not set");
        }
        web3::signing::SecretKey::from_str(
            private_key.strip_prefix("0x").unwrap_or(private_key),
        )
        .map_err(|error| anyhow::anyhow!("The signing private key is invalid: {error}"))
    }

    ///
    /// Returns the signer address.
    ///
    pub fn address(&self) -> web3::types::Address {
        match self {
            Self::Local(secret_key) => web3::signing::SecretKeyRef::new(secret_key).address(),
            Self::Node(address) => *address,
        }
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local(_) => write!(f, "Local({:?})", self.address()),
            Self::Node(address) => write!(f, "Node({address:?})"),
        }
    }
}
