//!
//! The contract deployment result.
//!

///
/// The contract deployment result.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Result {
    /// The contract address.
    pub address: web3::types::Address,
    /// The deployment transaction hash. `None` if the existing deployment was reused.
    pub transaction_hash: Option<web3::types::H256>,
    /// Whether the contract has been deployed by this request.
    pub newly_deployed: bool,
}

impl Result {
    ///
    /// Creates a result of a new deployment.
    ///
    pub fn deployed(address: web3::types::Address, transaction_hash: web3::types::H256) -> Self {
        Self {
            address,
            transaction_hash: Some(transaction_hash),
            newly_deployed: true,
        }
    }

    ///
    /// Creates a result of a reused deployment.
    ///
    pub fn reused(address: web3::types::Address) -> Self {
        Self {
            address,
            transaction_hash: None,
            newly_deployed: false,
        }
    }
}
