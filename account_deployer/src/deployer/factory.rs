//!
//! The deterministic deployment factory.
//!

use crate::chain::transaction::Transaction;
use crate::chain::Chain;
use crate::console::Console;

///
/// The deterministic deployment factory.
///
/// The factory is deployed by a keyless pre-signed transaction, so it has
/// the same address on every chain that accepts pre-EIP-155 transactions.
///
pub struct Factory;

impl Factory {
    /// The factory address.
    pub const ADDRESS: web3::types::Address = web3::types::H160([
        0x4e, 0x59, 0xb4, 0x48, 0x47, 0xb3, 0x79, 0x57, 0x85, 0x88, 0x92, 0x0c, 0xa7, 0x8f, 0xbf,
        0x26, 0xc0, 0xb4, 0x95, 0x6c,
    ]);

    /// The one-time account sending the factory deployment transaction.
    pub const DEPLOYER: web3::types::Address = web3::types::H160([
        0x3f, 0xab, 0x18, 0x46, 0x22, 0xdc, 0x19, 0xb6, 0x10, 0x93, 0x49, 0xb9, 0x48, 0x11, 0x49,
        0x3b, 0xf2, 0xa4, 0x53, 0x62,
    ]);

    /// The gas price of the factory deployment transaction.
    pub const GAS_PRICE: u64 = 100_000_000_000;

    /// The gas limit of the factory deployment transaction.
    pub const GAS_LIMIT: u64 = 100_000;

    /// The pre-signed factory deployment transaction.
    pub const TRANSACTION: &'static str = concat!(
        "f8a58085174876e800830186a08080b853604580600e600039806000f350fe7f",
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "e03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf3",
        "1ba02222222222222222222222222222222222222222222222222222222222222222",
        "a02222222222222222222222222222222222222222222222222222222222222222",
    );

    ///
    /// Returns the balance the deployer account needs to pay for the factory deployment.
    ///
    pub fn funding() -> web3::types::U256 {
        web3::types::U256::from(Self::GAS_PRICE) * web3::types::U256::from(Self::GAS_LIMIT)
    }

    ///
    /// Returns the pre-signed factory deployment transaction bytes.
    ///
    pub fn transaction() -> anyhow::Result<Vec<u8>> {
        crate::utils::decode_hex(Self::TRANSACTION)
    }

    ///
    /// Deploys the factory if it is missing on the chain.
    ///
    /// Returns `true` if the factory has been deployed by this call.
    ///
    pub async fn ensure_deployed(chain: &dyn Chain, console: Console) -> anyhow::Result<bool> {
        if !chain.code(Self::ADDRESS).await?.is_empty() {
            return Ok(false);
        }

        console.status(
            "Deploying",
            format!(
                "deterministic deployment factory at {}",
                crate::utils::address_as_checksummed(&Self::ADDRESS)
            ),
        );

        let funding = Self::funding();
        let balance = chain.balance(Self::DEPLOYER).await?;
        if balance < funding {
            let missing = funding - balance;
            console.detail("Funding", format!("factory deployer with {missing} wei"));
            chain
                .send_transaction(Transaction::transfer(Self::DEPLOYER, missing))
                .await?
                .check("Factory deployer funding")?;
        }

        chain
            .send_raw_transaction(Self::transaction()?)
            .await?
            .check("Factory deployment")?;

        if chain.code(Self::ADDRESS).await?.is_empty() {
            anyhow::bail!(
                "The deterministic deployment factory is still missing at {:?}",
                Self::ADDRESS
            );
        }
        Ok(true)
    }
}
