//!
//! The mined transaction receipt.
//!

///
/// The mined transaction receipt.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The transaction hash.
    pub transaction_hash: web3::types::H256,
    /// The created contract address, if the transaction was a contract creation.
    pub contract_address: Option<web3::types::Address>,
    /// Whether the transaction succeeded.
    pub success: bool,
}

impl Receipt {
    ///
    /// Fails if the transaction reverted.
    ///
    pub fn check(self, description: &str) -> anyhow::Result<Self> {
        if !self.success {
            anyhow::bail!(
                "{} transaction {:?} reverted",
                description,
                self.transaction_hash
            );
        }
        Ok(self)
    }
}

impl From<web3::types::TransactionReceipt> for Receipt {
    fn from(receipt: web3::types::TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            contract_address: receipt.contract_address,
            success: receipt.status.map_or(true, |status| !status.is_zero()),
        }
    }
}
