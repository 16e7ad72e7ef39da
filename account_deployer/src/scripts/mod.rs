//!
//! The deployment scripts.
//!

pub mod simple_account_factory;

use crate::artifacts::deployment::Deployment as DeploymentRecord;
use crate::artifacts::Artifact;
use crate::chain::Chain;
use crate::config::Config;
use crate::console::Console;
use crate::deployer::request::Request;
use crate::deployer::result::Result as DeploymentResult;
use crate::deployer::Deployer;

use self::simple_account_factory::SimpleAccountFactory;

///
/// The deployment script.
///
pub trait Script {
    ///
    /// Returns the deployed contract name.
    ///
    fn contract_name(&self) -> &'static str;

    ///
    /// Builds the deployment request sent from the address.
    ///
    fn request(&self, from: web3::types::Address) -> anyhow::Result<Request>;
}

///
/// Returns the scripts in their execution order.
///
pub fn all() -> Vec<Box<dyn Script>> {
    vec![Box::new(SimpleAccountFactory)]
}

///
/// The deployment scripts runner.
///
pub struct Runner<'a> {
    /// The project configuration.
    config: &'a Config,
    /// The target network name.
    network: &'a str,
    /// The blockchain connection.
    chain: &'a dyn Chain,
    /// The console output.
    console: Console,
}

impl<'a> Runner<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: &'a Config, network: &'a str, chain: &'a dyn Chain, console: Console) -> Self {
        Self {
            config,
            network,
            chain,
            console,
        }
    }

    ///
    /// Runs the scripts sequentially, stopping at the first failure.
    ///
    /// Prints the deployed address of every script to the standard output.
    ///
    pub async fn run(
        &self,
        scripts: &[Box<dyn Script>],
    ) -> anyhow::Result<Vec<(&'static str, DeploymentResult)>> {
        let deployer = Deployer::new(self.chain, self.console);

        let mut results = Vec::with_capacity(scripts.len());
        for script in scripts.iter() {
            let contract_name = script.contract_name();
            let artifact = Artifact::find(self.config.paths.artifacts.as_path(), contract_name)?;
            let request = script.request(self.chain.signer())?;

            let result = deployer.deploy(&request, &artifact).await?;
            println!(
                "=={} addr= {}",
                contract_name,
                crate::utils::address_as_checksummed(&result.address)
            );

            let path = self.record(&request, &artifact, &result)?;
            self.console.detail("Recorded", format!("{path:?}"));

            results.push((contract_name, result));
        }
        Ok(results)
    }

    ///
    /// Writes the deployment record.
    ///
    /// A reused deployment keeps the transaction hash of the existing record at the same address.
    ///
    fn record(
        &self,
        request: &Request,
        artifact: &Artifact,
        result: &DeploymentResult,
    ) -> anyhow::Result<std::path::PathBuf> {
        let directory = self.config.paths.deployments.as_path();
        let contract_name = request.contract_name.as_str();

        let transaction_hash = match result.transaction_hash {
            Some(transaction_hash) => Some(transaction_hash),
            None => DeploymentRecord::read(directory, self.network, contract_name)?
                .filter(|record| record.address == result.address)
                .and_then(|record| record.transaction_hash),
        };

        DeploymentRecord {
            address: result.address,
            transaction_hash,
            args: request.args_formatted(),
            abi: artifact.abi.clone(),
            bytecode: artifact.bytecode.clone(),
            deterministic: request.deterministic,
        }
        .write(directory, self.network, contract_name)
    }
}
