//!
//! The transaction to be signed and sent by the chain signer.
//!

///
/// The transaction to be signed and sent by the chain signer.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    /// The recipient, or `None` for a contract creation.
    pub to: Option<web3::types::Address>,
    /// The transferred value in wei.
    pub value: web3::types::U256,
    /// The calldata or the init code.
    pub data: Vec<u8>,
    /// The gas limit. Estimated by the node if not set.
    pub gas: Option<web3::types::U256>,
}

impl Transaction {
    /// The gas of a plain value transfer.
    pub const TRANSFER_GAS: u64 = 21_000;

    ///
    /// Creates a call to the address.
    ///
    pub fn call(to: web3::types::Address, data: Vec<u8>, gas: Option<web3::types::U256>) -> Self {
        Self {
            to: Some(to),
            value: web3::types::U256::zero(),
            data,
            gas,
        }
    }

    ///
    /// Creates a contract creation.
    ///
    pub fn create(init_code: Vec<u8>, gas: Option<web3::types::U256>) -> Self {
        Self {
            to: None,
            value: web3::types::U256::zero(),
            data: init_code,
            gas,
        }
    }

    ///
    /// Creates a plain value transfer.
    ///
    pub fn transfer(to: web3::types::Address, value: web3::types::U256) -> Self {
        Self {
            to: Some(to),
            value,
            data: vec![],
            gas: Some(web3::types::U256::from(Self::TRANSFER_GAS)),
        }
    }
}
