//!
//! The blockchain connection.
//!

pub mod http;
#[cfg(test)]
pub mod memory;
pub mod receipt;
pub mod signer;
pub mod transaction;

use self::receipt::Receipt;
use self::transaction::Transaction;

///
/// The blockchain connection with a resolved signer.
///
#[async_trait::async_trait]
pub trait Chain: Send + Sync {
    ///
    /// Returns the signer address, used as the sender of all transactions.
    ///
    fn signer(&self) -> web3::types::Address;

    ///
    /// Returns the code deployed at the address.
    ///
    async fn code(&self, address: web3::types::Address) -> anyhow::Result<Vec<u8>>;

    ///
    /// Returns the balance of the address in wei.
    ///
    async fn balance(&self, address: web3::types::Address) -> anyhow::Result<web3::types::U256>;

    ///
    /// Signs and sends the transaction, and waits for its receipt.
    ///
    async fn send_transaction(&self, transaction: Transaction) -> anyhow::Result<Receipt>;

    ///
    /// Sends the pre-signed raw transaction, and waits for its receipt.
    ///
    async fn send_raw_transaction(&self, raw_transaction: Vec<u8>) -> anyhow::Result<Receipt>;
}
