//!
//! The contract deployer.
//!

pub mod address_predictor;
pub mod factory;
pub mod request;
pub mod result;

#[cfg(test)]
mod tests;

use crate::artifacts::Artifact;
use crate::chain::transaction::Transaction;
use crate::chain::Chain;
use crate::console::Console;

use self::address_predictor::AddressPredictor;
use self::factory::Factory;
use self::request::Request;
use self::result::Result as DeploymentResult;

///
/// The contract deployer.
///
/// Deterministic requests go through the CREATE2 factory and are idempotent.
/// Other requests are plain CREATE transactions.
///
pub struct Deployer<'a> {
    /// The blockchain connection.
    chain: &'a dyn Chain,
    /// The console output.
    console: Console,
}

impl<'a> Deployer<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(chain: &'a dyn Chain, console: Console) -> Self {
        Self { chain, console }
    }

    ///
    /// Deploys the artifact's contract as requested.
    ///
    pub async fn deploy(
        &self,
        request: &Request,
        artifact: &Artifact,
    ) -> anyhow::Result<DeploymentResult> {
        let signer = self.chain.signer();
        if request.from != signer {
            anyhow::bail!(
                "Deployment of `{}` is requested from {:?}, but the network signer is {:?}",
                request.contract_name,
                request.from,
                signer
            );
        }

        let init_code = request.init_code(artifact.bytecode()?.as_slice());
        if request.deterministic {
            self.deploy_deterministic(request, init_code).await
        } else {
            self.deploy_create(request, init_code).await
        }
    }

    ///
    /// Returns the address the deterministic request deploys to.
    ///
    pub fn predict_address(request: &Request, init_code: &[u8]) -> web3::types::Address {
        AddressPredictor::new(Factory::ADDRESS).predict(&request.salt, init_code)
    }

    ///
    /// Deploys through the CREATE2 factory, reusing the existing code at the predicted address.
    ///
    async fn deploy_deterministic(
        &self,
        request: &Request,
        init_code: Vec<u8>,
    ) -> anyhow::Result<DeploymentResult> {
        let address = Self::predict_address(request, init_code.as_slice());
        let address_checksummed = crate::utils::address_as_checksummed(&address);

        if !self.chain.code(address).await?.is_empty() {
            self.console.status(
                "Reusing",
                format!("{} at {}", request.contract_name, address_checksummed),
            );
            return Ok(DeploymentResult::reused(address));
        }

        Factory::ensure_deployed(self.chain, self.console).await?;

        self.console.status(
            "Deploying",
            format!("{} to {}", request.contract_name, address_checksummed),
        );
        let mut data = request.salt.as_bytes().to_vec();
        data.extend(init_code);
        let receipt = self
            .chain
            .send_transaction(Transaction::call(
                Factory::ADDRESS,
                data,
                Some(request.gas_limit),
            ))
            .await?
            .check(request.contract_name.as_str())?;
        self.console
            .detail("Mined", format!("{:?}", receipt.transaction_hash));

        if self.chain.code(address).await?.is_empty() {
            anyhow::bail!(
                "Transaction {:?} succeeded, but `{}` has no code at {}",
                receipt.transaction_hash,
                request.contract_name,
                address_checksummed
            );
        }

        Ok(DeploymentResult::deployed(address, receipt.transaction_hash))
    }

    ///
    /// Deploys with a plain CREATE transaction.
    ///
    async fn deploy_create(
        &self,
        request: &Request,
        init_code: Vec<u8>,
    ) -> anyhow::Result<DeploymentResult> {
        self.console
            .status("Deploying", request.contract_name.as_str());
        let receipt = self
            .chain
            .send_transaction(Transaction::create(init_code, Some(request.gas_limit)))
            .await?
            .check(request.contract_name.as_str())?;

        let address = receipt.contract_address.ok_or_else(|| {
            anyhow::anyhow!(
                "Transaction {:?} of `{}` has no contract address in its receipt",
                receipt.transaction_hash,
                request.contract_name
            )
        })?;
        self.console.detail(
            "Mined",
            format!(
                "{:?} at {}",
                receipt.transaction_hash,
                crate::utils::address_as_checksummed(&address)
            ),
        );

        Ok(DeploymentResult::deployed(address, receipt.transaction_hash))
    }
}
