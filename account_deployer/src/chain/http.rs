//!
//! The blockchain connection over the HTTP JSON-RPC.
//!

use std::time::Duration;

use crate::config::network::Network;

use super::receipt::Receipt;
use super::signer::Signer;
use super::transaction::Transaction;
use super::Chain;

///
/// The blockchain connection over the HTTP JSON-RPC.
///
pub struct HttpChain {
    /// The `web3` client.
    web3: web3::Web3<web3::transports::Http>,
    /// The network name.
    network: String,
    /// The chain ID reported by the node.
    chain_id: u64,
    /// The transaction signer.
    signer: Signer,
    /// The receipt polling interval.
    poll_interval: Duration,
    /// The maximum number of receipt polls.
    poll_attempts: usize,
}

impl HttpChain {
    /// The default receipt polling interval.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

    /// The default maximum number of receipt polls.
    pub const POLL_ATTEMPTS: usize = 600;

    ///
    /// Connects to the network and resolves the signer.
    ///
    /// The first configured credential signs locally. Without credentials,
    /// the first account unlocked on the node is used.
    ///
    pub async fn connect(network: &Network) -> anyhow::Result<Self> {
        let url = network.endpoint()?;
        let transport = web3::transports::Http::new(url.as_str()).map_err(|error| {
            anyhow::anyhow!("Network `{}` transport error: {}", network.name, error)
        })?;
        let web3 = web3::Web3::new(transport);

        let chain_id = web3.eth().chain_id().await.map_err(|error| {
            anyhow::anyhow!(
                "Network `{}` at `{}` is unreachable: {}",
                network.name,
                url,
                error
            )
        })?;
        let chain_id = Self::chain_id_to_u64(chain_id)
            .map_err(|error| anyhow::anyhow!("Network `{}` {}", network.name, error))?;

        let signer = match network.accounts.first() {
            Some(private_key) => Signer::Local(Signer::parse_private_key(private_key).map_err(
                |error| anyhow::anyhow!("Network `{}` signer error: {}", network.name, error),
            )?),
            None => {
                let accounts = web3.eth().accounts().await.map_err(|error| {
                    anyhow::anyhow!("Network `{}` accounts error: {}", network.name, error)
                })?;
                let account = accounts.first().copied().ok_or_else(|| {
                    anyhow::anyhow!(
                        "Network `{}` has no unlocked accounts and no private key is configured",
                        network.name
                    )
                })?;
                Signer::Node(account)
            }
        };

        Ok(Self {
            web3,
            network: network.name.to_owned(),
            chain_id,
            signer,
            poll_interval: Self::POLL_INTERVAL,
            poll_attempts: Self::POLL_ATTEMPTS,
        })
    }

    ///
    /// Sets the receipt polling parameters.
    ///
    pub fn with_polling(mut self, poll_interval: Duration, poll_attempts: usize) -> Self {
        self.poll_interval = poll_interval;
        self.poll_attempts = poll_attempts;
        self
    }

    ///
    /// Returns the chain ID reported by the node.
    ///
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    ///
    /// Narrows the chain ID to the width used by the transaction signing.
    ///
    fn chain_id_to_u64(chain_id: web3::types::U256) -> anyhow::Result<u64> {
        u64::try_from(chain_id)
            .map_err(|_| anyhow::anyhow!("chain ID {chain_id} does not fit into 64 bits"))
    }

    ///
    /// Returns the network name.
    ///
    pub fn network(&self) -> &str {
        self.network.as_str()
    }

    ///
    /// Estimates the gas of the transaction if it is not set explicitly.
    ///
    async fn gas(&self, transaction: &Transaction) -> anyhow::Result<web3::types::U256> {
        if let Some(gas) = transaction.gas {
            return Ok(gas);
        }

        let request = web3::types::CallRequest {
            from: Some(self.signer.address()),
            to: transaction.to,
            value: Some(transaction.value),
            data: Some(web3::types::Bytes(transaction.data.clone())),
            ..Default::default()
        };
        self.web3
            .eth()
            .estimate_gas(request, None)
            .await
            .map_err(|error| anyhow::anyhow!("Gas estimation error: {error}"))
    }

    ///
    /// Polls the node until the transaction is mined.
    ///
    async fn wait_for_receipt(&self, hash: web3::types::H256) -> anyhow::Result<Receipt> {
        for _ in 0..self.poll_attempts {
            let receipt = self
                .web3
                .eth()
                .transaction_receipt(hash)
                .await
                .map_err(|error| anyhow::anyhow!("Transaction {hash:?} receipt error: {error}"))?;
            if let Some(receipt) = receipt {
                return Ok(Receipt::from(receipt));
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        anyhow::bail!(
            "Transaction {:?} has not been mined after {:?}",
            hash,
            self.poll_interval * self.poll_attempts as u32
        )
    }
}

#[async_trait::async_trait]
impl Chain for HttpChain {
    fn signer(&self) -> web3::types::Address {
        self.signer.address()
    }

    async fn code(&self, address: web3::types::Address) -> anyhow::Result<Vec<u8>> {
        self.web3
            .eth()
            .code(address, None)
            .await
            .map(|code| code.0)
            .map_err(|error| anyhow::anyhow!("Code of {address:?} getting error: {error}"))
    }

    async fn balance(&self, address: web3::types::Address) -> anyhow::Result<web3::types::U256> {
        self.web3
            .eth()
            .balance(address, None)
            .await
            .map_err(|error| anyhow::anyhow!("Balance of {address:?} getting error: {error}"))
    }

    async fn send_transaction(&self, transaction: Transaction) -> anyhow::Result<Receipt> {
        let gas = self.gas(&transaction).await?;

        let hash = match self.signer {
            Signer::Local(ref secret_key) => {
                let parameters = web3::types::TransactionParameters {
                    to: transaction.to,
                    gas,
                    value: transaction.value,
                    data: web3::types::Bytes(transaction.data),
                    chain_id: Some(self.chain_id),
                    ..Default::default()
                };
                let signed = self
                    .web3
                    .accounts()
                    .sign_transaction(parameters, web3::signing::SecretKeyRef::new(secret_key))
                    .await
                    .map_err(|error| anyhow::anyhow!("Transaction signing error: {error}"))?;
                self.web3
                    .eth()
                    .send_raw_transaction(signed.raw_transaction)
                    .await
            }
            Signer::Node(from) => {
                let request = web3::types::TransactionRequest {
                    from,
                    to: transaction.to,
                    gas: Some(gas),
                    value: Some(transaction.value),
                    data: Some(web3::types::Bytes(transaction.data)),
                    ..Default::default()
                };
                self.web3.eth().send_transaction(request).await
            }
        }
        .map_err(|error| anyhow::anyhow!("Transaction broadcasting error: {error}"))?;

        self.wait_for_receipt(hash).await
    }

    async fn send_raw_transaction(&self, raw_transaction: Vec<u8>) -> anyhow::Result<Receipt> {
        let hash = self
            .web3
            .eth()
            .send_raw_transaction(web3::types::Bytes(raw_transaction))
            .await
            .map_err(|error| anyhow::anyhow!("Raw transaction broadcasting error: {error}"))?;

        self.wait_for_receipt(hash).await
    }
}
